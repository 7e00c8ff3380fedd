use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::BannerConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the banner world

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Startup, configure_gravity);
        let debug_render = app
            .world()
            .get_resource::<BannerConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    // The banner world is weightless; bubbles only drift from scroll kicks
    // and the anchor spring.
    for mut cfg in &mut rapier_cfg {
        cfg.gravity = Vect::ZERO;
    }
}
