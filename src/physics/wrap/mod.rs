pub mod world_wrap;

pub use world_wrap::WorldWrapPlugin;
