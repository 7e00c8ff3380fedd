use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::Bubble;
use crate::core::config::{BannerConfig, SpawnRange};
use crate::core::system::system_order::PrePhysicsSet;
use crate::core::throttle::Throttle;

/// Virtual scroll position accumulated from wheel input, plus the baseline
/// the next drift kick is measured against.
#[derive(Resource, Debug, Default)]
pub struct ScrollState {
    pub scroll_top: f32,
    pub last_scroll_top: f32,
}

#[derive(Resource, Deref, DerefMut)]
pub struct ScrollThrottle(pub Throttle);

/// Plugin pushing bubbles around in response to wheel scrolling.
pub struct ScrollDriftPlugin;

impl Plugin for ScrollDriftPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollState>()
            .add_systems(Startup, setup_scroll_throttle)
            .add_systems(
                Update,
                (accumulate_scroll, apply_scroll_drift)
                    .chain()
                    .in_set(PrePhysicsSet),
            );
    }
}

fn setup_scroll_throttle(mut commands: Commands, cfg: Res<BannerConfig>) {
    commands.insert_resource(ScrollThrottle(Throttle::from_millis(cfg.scroll.throttle_ms)));
}

fn accumulate_scroll(
    mut wheel: EventReader<MouseWheel>,
    cfg: Res<BannerConfig>,
    mut state: ResMut<ScrollState>,
    mut throttle: ResMut<ScrollThrottle>,
) {
    let mut moved = false;
    for ev in wheel.read() {
        let px = match ev.unit {
            MouseScrollUnit::Line => ev.y * cfg.scroll.line_height,
            MouseScrollUnit::Pixel => ev.y,
        };
        // wheel up (positive y) scrolls toward the top of the virtual page
        state.scroll_top -= px;
        moved = true;
    }
    if moved {
        throttle.request();
    }
}

/// Kick for one bubble: the scroll delta scaled by per-axis jitter.
/// The y jitter is negated so the push reads screen-down in a y-up world.
pub fn scroll_kick(
    delta: f32,
    kick_x: &SpawnRange<f32>,
    kick_y: &SpawnRange<f32>,
    rng: &mut impl Rng,
) -> Vec2 {
    Vec2::new(delta * kick_x.sample(rng), -delta * kick_y.sample(rng))
}

fn apply_scroll_drift(
    time: Res<Time>,
    cfg: Res<BannerConfig>,
    mut state: ResMut<ScrollState>,
    mut throttle: ResMut<ScrollThrottle>,
    mut q: Query<&mut Velocity, With<Bubble>>,
) {
    if !throttle.tick(time.delta()) {
        return;
    }
    let delta = (state.last_scroll_top - state.scroll_top) / cfg.scroll.distance_divisor;
    let mut rng = rand::thread_rng();
    for mut vel in q.iter_mut() {
        vel.linvel += scroll_kick(delta, &cfg.scroll.kick_x, &cfg.scroll.kick_y, &mut rng);
    }
    state.last_scroll_top = state.scroll_top;
}
