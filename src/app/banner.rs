// This file is part of Drift Banner.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::{BannerConfig, ConfigLoadReport};
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::interaction::magnet::button_offset::ButtonOffsetPlugin;
use crate::interaction::scroll::scroll_drift::ScrollDriftPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::session::resize_rebuild::ResizeRebuildPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::physics::spring::anchor_spring::AnchorSpringPlugin;
use crate::physics::wrap::world_wrap::WorldWrapPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::circles::circles::BubbleVisualsPlugin;
use crate::scene::spawn::ScenePlugin;

pub struct BannerPlugin;

impl Plugin for BannerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_systems(Startup, log_config_report)
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            ScenePlugin,
            BubbleVisualsPlugin,
            AnchorSpringPlugin,
            WorldWrapPlugin,
            ScrollDriftPlugin,
            ButtonOffsetPlugin,
            ResizeRebuildPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
            DebugPlugin,
        ));
    }
}

fn log_config_report(cfg: Res<BannerConfig>, report: Option<Res<ConfigLoadReport>>) {
    if let Some(report) = report {
        for layer in &report.used {
            info!("config layer applied: {layer}");
        }
        for err in &report.errors {
            warn!("config layer issue: {err}");
        }
    }
    for w in cfg.validate() {
        warn!("config: {w}");
    }
}
