pub mod button;
pub mod spawn;

pub use spawn::{RebuildScene, ScenePlugin, SpawnSerial};
