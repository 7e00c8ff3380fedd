pub mod palette;

pub use palette::{color_for_serial, BUBBLE_COLORS, BUTTON_FILL, BUTTON_TEXT};
