pub mod auto_close;
pub mod config_hot_reload;
pub mod resize_rebuild;

pub use auto_close::AutoClosePlugin;
pub use config_hot_reload::ConfigHotReloadPlugin;
pub use resize_rebuild::ResizeRebuildPlugin;
