pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod scene;

// Curated re-exports
pub use crate::app::banner::BannerPlugin;
pub use crate::core::components::{BannerEntity, Bubble, BubbleRadius, BubbleSerial, CtaAnchor, CtaButton};
pub use crate::core::config::{BannerConfig, WindowConfig};
pub use crate::core::viewport::Viewport;
pub use crate::scene::spawn::RebuildScene;
