use bevy::prelude::*;

use crate::core::components::{CtaAnchor, CtaButton};
use crate::core::config::BannerConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::core::throttle::Throttle;
use crate::physics::spring::AnchorRest;

#[derive(Resource, Deref, DerefMut)]
pub struct MagnetThrottle(pub Throttle);

/// Plugin mirroring the anchor body's displacement onto the CTA button node.
pub struct ButtonOffsetPlugin;

impl Plugin for ButtonOffsetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_magnet_throttle)
            .add_systems(Update, sync_button_offset.in_set(PostPhysicsAdjustSet));
    }
}

fn setup_magnet_throttle(mut commands: Commands, cfg: Res<BannerConfig>) {
    commands.insert_resource(MagnetThrottle(Throttle::from_millis(cfg.magnet.throttle_ms)));
}

/// `None` when both axes are within `epsilon` of rest (snap the button back);
/// otherwise the exact displacement to mirror.
pub fn rest_or_offset(disp: Vec2, epsilon: f32) -> Option<Vec2> {
    if disp.x.abs() < epsilon && disp.y.abs() < epsilon {
        None
    } else {
        Some(disp)
    }
}

fn sync_button_offset(
    time: Res<Time>,
    cfg: Res<BannerConfig>,
    rest: Res<AnchorRest>,
    mut throttle: ResMut<MagnetThrottle>,
    anchors: Query<&Transform, With<CtaAnchor>>,
    mut buttons: Query<(&CtaButton, &mut Node)>,
) {
    // Every completed physics step requests a sync; the throttle coalesces them.
    throttle.request();
    if !throttle.tick(time.delta()) {
        return;
    }
    let Ok(anchor_tf) = anchors.single() else {
        return;
    };
    let disp = anchor_tf.translation.truncate() - rest.0;
    for (button, mut node) in buttons.iter_mut() {
        let offset = match rest_or_offset(disp, cfg.magnet.rest_epsilon) {
            // world y-up -> screen y-down
            Some(d) => Vec2::new(d.x, -d.y),
            None => Vec2::ZERO,
        };
        node.left = Val::Px(button.base.x + offset.x);
        node.top = Val::Px(button.base.y + offset.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.1;

    #[test]
    fn tiny_displacement_snaps_to_rest() {
        assert_eq!(rest_or_offset(Vec2::new(0.05, -0.09), EPSILON), None);
        assert_eq!(rest_or_offset(Vec2::ZERO, EPSILON), None);
    }

    #[test]
    fn threshold_is_exclusive() {
        // exactly epsilon on one axis is no longer "at rest"
        assert_eq!(
            rest_or_offset(Vec2::new(0.1, 0.0), EPSILON),
            Some(Vec2::new(0.1, 0.0))
        );
    }

    #[test]
    fn one_large_axis_is_enough_to_offset() {
        let disp = Vec2::new(0.02, 12.5);
        assert_eq!(rest_or_offset(disp, EPSILON), Some(disp));
    }

    #[test]
    fn offset_is_exact_displacement() {
        let disp = Vec2::new(-3.25, 7.5);
        assert_eq!(rest_or_offset(disp, EPSILON), Some(disp));
    }
}
