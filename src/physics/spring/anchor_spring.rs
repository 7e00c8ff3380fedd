use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::CtaAnchor;
use crate::core::config::BannerConfig;
use crate::core::system::system_order::PrePhysicsSet;

/// World-space rest point the CTA anchor body is pulled back to. Written at
/// scene build, read by the spring and the button offset sync.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct AnchorRest(pub Vec2);

/// Plugin applying the soft spring that tethers the CTA anchor body to its
/// rest point, before physics integrates.
pub struct AnchorSpringPlugin;

impl Plugin for AnchorSpringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnchorRest>()
            .add_systems(Update, apply_anchor_spring.in_set(PrePhysicsSet));
    }
}

/// One spring step: pull the velocity toward rest and damp it.
/// `disp` is the body's displacement from the rest point.
pub fn spring_kick(vel: Vec2, disp: Vec2, stiffness: f32, damping: f32, dt: f32) -> Vec2 {
    let pulled = vel - disp * stiffness * dt;
    pulled * (1.0 - damping * dt).max(0.0)
}

fn apply_anchor_spring(
    time: Res<Time>,
    cfg: Res<BannerConfig>,
    rest: Res<AnchorRest>,
    mut q: Query<(&Transform, &mut Velocity), With<CtaAnchor>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    for (transform, mut vel) in q.iter_mut() {
        let disp = transform.translation.truncate() - rest.0;
        vel.linvel = spring_kick(
            vel.linvel,
            disp,
            cfg.magnet.stiffness,
            cfg.magnet.damping,
            dt,
        );
    }
}
