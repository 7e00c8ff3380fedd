use bevy::prelude::*;

use crate::core::components::{Bubble, CtaAnchor};
use crate::physics::spring::AnchorRest;

#[derive(Resource)]
pub struct DebugLogState {
    timer: Timer,
}
impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    q_bubbles: Query<(), With<Bubble>>,
    anchors: Query<&Transform, With<CtaAnchor>>,
    rest: Res<AnchorRest>,
) {
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }
    let anchor_disp = anchors
        .single()
        .map(|tf| (tf.translation.truncate() - rest.0).length())
        .unwrap_or(0.0);
    let dt = time.delta_secs().max(1e-6);
    info!(
        "BANNER t={:.1}s fps={:.1} bubbles={} anchor_disp={:.2}px",
        time.elapsed_secs(),
        1.0 / dt,
        q_bubbles.iter().count(),
        anchor_disp
    );
}
