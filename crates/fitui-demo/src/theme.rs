#![forbid(unsafe_code)]

//! Demo color palette.

use fitui_render::cell::Rgb;

pub const BACKGROUND: Rgb = Rgb::new(24, 24, 37);
pub const SURFACE: Rgb = Rgb::new(49, 50, 68);
pub const TEXT: Rgb = Rgb::new(205, 214, 244);
pub const MUTED: Rgb = Rgb::new(127, 132, 156);
pub const ACCENT: Rgb = Rgb::new(137, 180, 250);
pub const CHIP_BG: Rgb = Rgb::new(69, 71, 90);
pub const OK: Rgb = Rgb::new(166, 227, 161);
pub const OVERFLOW: Rgb = Rgb::new(243, 139, 168);
