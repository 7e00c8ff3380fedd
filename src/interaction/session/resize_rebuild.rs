use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::config::BannerConfig;
use crate::core::throttle::Throttle;
use crate::core::viewport::Viewport;
use crate::interaction::scroll::ScrollState;
use crate::scene::RebuildScene;

#[derive(Resource, Deref, DerefMut)]
pub struct ResizeThrottle(pub Throttle);

/// Plugin tearing the banner down and rebuilding it when the window geometry
/// changes. There is no incremental re-layout: the rebuild is always total.
pub struct ResizeRebuildPlugin;

impl Plugin for ResizeRebuildPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_resize_throttle)
            .add_systems(Update, resize_rebuild);
    }
}

fn setup_resize_throttle(mut commands: Commands, cfg: Res<BannerConfig>) {
    commands.insert_resource(ResizeThrottle(Throttle::from_millis(cfg.resize.throttle_ms)));
}

fn resize_rebuild(
    time: Res<Time>,
    mut events: EventReader<WindowResized>,
    mut throttle: ResMut<ResizeThrottle>,
    mut viewport: ResMut<Viewport>,
    mut scroll: ResMut<ScrollState>,
    windows: Query<&Window>,
    mut rebuild: EventWriter<RebuildScene>,
) {
    if events.read().next().is_some() {
        events.clear();
        throttle.request();
    }
    if !throttle.tick(time.delta()) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    // Start over from the new geometry.
    viewport.width = window.width();
    viewport.height = window.height();
    scroll.last_scroll_top = scroll.scroll_top;
    rebuild.write(RebuildScene);
    info!(
        width = viewport.width,
        height = viewport.height,
        "viewport changed; rebuilding banner scene"
    );
}
