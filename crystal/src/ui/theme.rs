//! Palette and color math shared by the renderers.
//!
//! Dark navy text tones read well on any blurred background; each metric
//! keeps a fixed accent color across gauge and bar renditions.

use crate::surface::Rgb;

pub const FG: Rgb = Rgb::new(0x0d, 0x1e, 0x3a);
pub const FG2: Rgb = Rgb::new(0x4a, 0x68, 0x88);
pub const FG3: Rgb = Rgb::new(0x8a, 0xa8, 0xcc);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

pub const CPU: Rgb = Rgb::new(0x1a, 0x7f, 0xff);
pub const GPU: Rgb = Rgb::new(0xf9, 0x73, 0x16);
pub const RAM: Rgb = Rgb::new(0x10, 0xb9, 0x81);
pub const DISK: Rgb = Rgb::new(0x8b, 0x5c, 0xf6);
pub const NET_UP: Rgb = Rgb::new(0xef, 0x44, 0x44);
pub const NET_DN: Rgb = Rgb::new(0x06, 0xb6, 0xd4);

pub const PANEL_BORDER: Rgb = Rgb::new(0xb8, 0xcc, 0xe8);
pub const PANEL_FILL: Rgb = Rgb::new(0xee, 0xf4, 0xff);
pub const PANEL_HIGHLIGHT: Rgb = Rgb::new(0xf8, 0xfb, 0xff);
pub const BAR_TRACK: Rgb = Rgb::new(0xd8, 0xe4, 0xf4);
pub const DIVIDER: Rgb = Rgb::new(0xc0, 0xd0, 0xe8);

/// Linear interpolation from `a` to `b`, channel-wise.
pub fn blend(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let ch = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t) as u8;
    Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

pub fn lighten(c: Rgb, f: f64) -> Rgb {
    blend(c, WHITE, f)
}
