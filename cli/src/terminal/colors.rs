use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const IPV4_PREFIX: Color = Color::TrueColor { r: 255, g: 170, b: 90 };
