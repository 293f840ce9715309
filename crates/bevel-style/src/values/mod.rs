//! Border value types
//!
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

mod border_style;
mod color;

pub use border_style::BorderStyle;
pub use color::ColorValue;
