use bevy::prelude::*;

use crate::core::components::Bubble;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::core::viewport::Viewport;

/// Plugin re-entering bubbles that leave the viewport rectangle from the
/// opposite side. Velocity is untouched; only position shifts by whole spans.
pub struct WorldWrapPlugin;

impl Plugin for WorldWrapPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, wrap_bubbles.in_set(PostPhysicsAdjustSet));
    }
}

/// Map `v` back into `[min, max)` by shifting whole spans.
pub fn wrap_coord(v: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        return min;
    }
    let mut out = v;
    while out < min {
        out += span;
    }
    while out >= max {
        out -= span;
    }
    out
}

fn wrap_bubbles(viewport: Res<Viewport>, mut q: Query<&mut Transform, With<Bubble>>) {
    let (min, max) = viewport.bounds();
    for mut tf in q.iter_mut() {
        let x = wrap_coord(tf.translation.x, min.x, max.x);
        let y = wrap_coord(tf.translation.y, min.y, max.y);
        if x != tf.translation.x {
            tf.translation.x = x;
        }
        if y != tf.translation.y {
            tf.translation.y = y;
        }
    }
}
