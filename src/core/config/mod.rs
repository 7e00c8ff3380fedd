pub mod config;

pub use config::{
    BannerConfig, BubbleConfig, ConfigLoadReport, MagnetConfig, ResizeConfig, ScrollConfig,
    SpawnRange, WindowConfig,
};
