use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{BannerEntity, CtaAnchor, CtaButton};
use crate::core::config::BannerConfig;
use crate::core::viewport::Viewport;
use crate::physics::spring::AnchorRest;
use crate::rendering::palette::palette::{BUTTON_FILL, BUTTON_TEXT};

/// Button center in world coordinates (centered origin, y-up) from the
/// configured viewport fractions.
pub fn cta_world_center(cfg: &BannerConfig, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (cfg.magnet.center_x - 0.5) * viewport.width,
        (0.5 - cfg.magnet.center_y) * viewport.height,
    )
}

/// Untranslated top-left offset of the button node in logical pixels.
pub fn cta_base(cfg: &BannerConfig, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        cfg.magnet.center_x * viewport.width - cfg.magnet.button_width * 0.5,
        cfg.magnet.center_y * viewport.height - cfg.magnet.button_height * 0.5,
    )
}

/// Spawns the call-to-action pair: the visible UI button and the invisible
/// anchor body the spring tethers to the button's center.
pub fn spawn_cta(
    commands: &mut Commands,
    cfg: &BannerConfig,
    viewport: &Viewport,
    rest: &mut AnchorRest,
) {
    let center = cta_world_center(cfg, viewport);
    rest.0 = center;

    commands.spawn((
        Transform::from_translation(center.extend(0.0)),
        GlobalTransform::default(),
        RigidBody::Dynamic,
        Collider::ball(cfg.magnet.button_width * 0.5),
        Velocity::zero(),
        CtaAnchor,
        BannerEntity,
    ));

    let base = cta_base(cfg, viewport);
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(base.x),
                top: Val::Px(base.y),
                width: Val::Px(cfg.magnet.button_width),
                height: Val::Px(cfg.magnet.button_height),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_FILL),
            BorderRadius::MAX,
            Button,
            CtaButton { base },
            BannerEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(cfg.magnet.label.clone()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(BUTTON_TEXT),
            ));
        });
}
