pub mod circles;

pub use circles::BubbleVisualsPlugin;
