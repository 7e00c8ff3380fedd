pub mod button_offset;

pub use button_offset::ButtonOffsetPlugin;
