use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use drift_banner::core::components::Bubble;
use drift_banner::core::config::BannerConfig;
use drift_banner::interaction::scroll::{ScrollDriftPlugin, ScrollState};

fn scroll_app() -> App {
    let mut cfg = BannerConfig::default();
    cfg.scroll.throttle_ms = 0; // fire on the next frame
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_event::<MouseWheel>();
    app.insert_resource(cfg);
    app.add_plugins(ScrollDriftPlugin);
    app
}

fn spawn_bubble(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Bubble,
            Transform::default(),
            GlobalTransform::default(),
            Velocity::zero(),
        ))
        .id()
}

#[test]
fn wheel_scroll_kicks_bubble_velocities() {
    let mut app = scroll_app();
    let bubble = spawn_bubble(&mut app);
    app.update(); // startup

    let source = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y: -3.0, // scroll down by three lines
        window: source,
    });
    app.update();

    // 3 lines * 40 px -> scroll_top 120; delta = -120 / 50 = -2.4
    let state = app.world().resource::<ScrollState>();
    assert_eq!(state.scroll_top, 120.0);
    assert_eq!(state.last_scroll_top, 120.0, "baseline resyncs after the kick");

    let vel = app.world().get::<Velocity>(bubble).unwrap();
    // kick_y [0.5, 1.5) scaled by -delta -> strictly upward in world space
    assert!(
        vel.linvel.y >= 1.2 && vel.linvel.y < 3.6,
        "unexpected y kick: {:?}",
        vel.linvel
    );
    assert!(
        vel.linvel.x >= -1.2 && vel.linvel.x < 1.2,
        "unexpected x kick: {:?}",
        vel.linvel
    );
}

#[test]
fn no_wheel_input_leaves_velocities_untouched() {
    let mut app = scroll_app();
    let bubble = spawn_bubble(&mut app);
    for _ in 0..5 {
        app.update();
    }
    let vel = app.world().get::<Velocity>(bubble).unwrap();
    assert_eq!(vel.linvel, Vec2::ZERO);
}
