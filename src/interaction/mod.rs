pub mod magnet;
pub mod scroll;
pub mod session;
