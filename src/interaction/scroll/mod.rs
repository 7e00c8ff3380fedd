pub mod scroll_drift;

pub use scroll_drift::{ScrollDriftPlugin, ScrollState};
