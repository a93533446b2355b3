//! Immediate-mode drawing abstraction consumed by every renderer.
//!
//! Coordinates are device pixels with y growing downward. Angles are in
//! degrees, 0 pointing east and positive counter-clockwise, so a gauge sweep
//! starting at 225 with a negative extent runs clockwise over the top of the
//! dial. There is no retained scene graph; callers redraw every frame.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    West,
    East,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgb,
    pub anchor: Anchor,
    pub mono: bool,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f64, color: Rgb) -> Self {
        Self {
            size,
            color,
            anchor: Anchor::Center,
            mono: false,
            bold: false,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb);
    fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, width: f64, color: Rgb);
    fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        start_deg: f64,
        extent_deg: f64,
        width: f64,
        color: Rgb,
    );
    /// Filled pie slice; used for rounded-rect corners.
    fn fill_pie(&mut self, cx: f64, cy: f64, r: f64, start_deg: f64, extent_deg: f64, color: Rgb);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgb);
    fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle);
}
