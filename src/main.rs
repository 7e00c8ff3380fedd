use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use drift_banner::core::config::{BannerConfig, ConfigLoadReport};
use drift_banner::BannerPlugin;

const CONFIG_LAYERS: [&str; 2] = ["assets/config/banner.ron", "assets/config/banner.local.ron"];

/// Decorative physics banner: floating bubbles plus a magnetic
/// call-to-action button, pushed around by wheel scrolling.
#[derive(Parser, Debug)]
#[command(name = "drift_banner", version, about)]
struct Cli {
    /// Extra config layer applied over the default layers.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Close automatically after this many seconds (overrides config).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cli = Cli::parse();
    let mut layers: Vec<PathBuf> = CONFIG_LAYERS.iter().map(PathBuf::from).collect();
    if let Some(extra) = cli.config {
        layers.push(extra);
    }
    let (mut cfg, used, errors) = BannerConfig::load_layered(&layers);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigLoadReport { used, errors })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BannerPlugin)
        .run();
}
