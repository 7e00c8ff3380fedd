use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{BannerEntity, Bubble, BubbleRadius, BubbleSerial};
use crate::core::config::BannerConfig;
use crate::core::viewport::Viewport;
use crate::physics::spring::AnchorRest;
use crate::physics::STEP_RATE;
use crate::scene::button::spawn_cta;

/// Tear the whole banner down and build it again from the current viewport.
#[derive(Event, Debug, Default)]
pub struct RebuildScene;

/// Bubbles created since the last rebuild; drives fill color alternation.
#[derive(Resource, Debug, Default)]
pub struct SpawnSerial(pub usize);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RebuildScene>()
            .init_resource::<Viewport>()
            .init_resource::<SpawnSerial>()
            .init_resource::<AnchorRest>()
            .add_systems(Startup, (capture_viewport, setup_scene).chain())
            .add_systems(Update, rebuild_scene);
    }
}

/// Bubbles for a given viewport: the rounded area quotient plus one.
pub fn bubble_count(width: f32, height: f32, area_per_bubble: f32) -> usize {
    (width * height / area_per_bubble).round().max(0.0) as usize + 1
}

/// Uniform-random point inside `[min, max)` per axis; degenerate axes pin to min.
pub fn random_point_in(min: Vec2, max: Vec2, rng: &mut impl Rng) -> Vec2 {
    let x = if min.x < max.x {
        rng.gen_range(min.x..max.x)
    } else {
        min.x
    };
    let y = if min.y < max.y {
        rng.gen_range(min.y..max.y)
    } else {
        min.y
    };
    Vec2::new(x, y)
}

fn capture_viewport(mut viewport: ResMut<Viewport>, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        return;
    };
    viewport.width = window.width();
    viewport.height = window.height();
}

fn setup_scene(
    mut commands: Commands,
    cfg: Res<BannerConfig>,
    viewport: Res<Viewport>,
    mut serial: ResMut<SpawnSerial>,
    mut rest: ResMut<AnchorRest>,
) {
    spawn_banner(&mut commands, &cfg, &viewport, &mut serial, &mut rest);
}

fn rebuild_scene(
    mut events: EventReader<RebuildScene>,
    mut commands: Commands,
    existing: Query<Entity, With<BannerEntity>>,
    cfg: Res<BannerConfig>,
    viewport: Res<Viewport>,
    mut serial: ResMut<SpawnSerial>,
    mut rest: ResMut<AnchorRest>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    for e in existing.iter() {
        commands.entity(e).despawn();
    }
    serial.0 = 0;
    spawn_banner(&mut commands, &cfg, &viewport, &mut serial, &mut rest);
}

pub fn spawn_banner(
    commands: &mut Commands,
    cfg: &BannerConfig,
    viewport: &Viewport,
    serial: &mut SpawnSerial,
    rest: &mut AnchorRest,
) {
    let (min, max) = viewport.bounds();
    let mut rng = rand::thread_rng();
    let count = bubble_count(viewport.width, viewport.height, cfg.bubbles.area_per_bubble);
    for _ in 0..count {
        let pos = random_point_in(min, max, &mut rng);
        let radius = cfg.bubbles.radius_range.sample(&mut rng);
        spawn_bubble(commands, pos, radius, cfg, serial.0);
        serial.0 += 1;
    }
    spawn_cta(commands, cfg, viewport, rest);
    info!(
        bubbles = count,
        width = viewport.width,
        height = viewport.height,
        "banner scene spawned"
    );
}

fn spawn_bubble(commands: &mut Commands, pos: Vec2, radius: f32, cfg: &BannerConfig, serial: usize) {
    commands.spawn((
        Transform::from_translation(pos.extend(0.0)),
        GlobalTransform::default(),
        RigidBody::Dynamic,
        Collider::ball(radius),
        Velocity::zero(),
        // Per-step drag factor expressed as Rapier's per-second damping rate.
        Damping {
            linear_damping: cfg.bubbles.air_friction * STEP_RATE,
            angular_damping: 0.0,
        },
        Bubble,
        BubbleRadius(radius),
        BubbleSerial(serial),
        BannerEntity,
    ));
}
