//! Terminal canvas backend: renders device-pixel draw calls onto a ratatui
//! braille canvas. Arcs and discs are approximated with polylines and
//! scanlines, which is plenty for a terminal; a compositor-backed surface
//! would rasterize the same calls natively.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Context, Line};

use crate::surface::{Anchor, Rgb, Surface, TextStyle};

pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, height: f64) -> Self {
        Self { ctx, height }
    }

    // Device coordinates are y-down; the canvas is y-up.
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }

    fn color(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    fn segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        let line = Line {
            x1,
            y1: self.flip(y1),
            x2,
            y2: self.flip(y2),
            color: Self::color(color),
        };
        self.ctx.draw(&line);
    }

    fn arc_polyline(&mut self, cx: f64, cy: f64, r: f64, start_deg: f64, extent_deg: f64, color: Rgb) {
        if r <= 0.0 {
            return;
        }
        let steps = ((extent_deg.abs() / 4.0).ceil() as usize).max(8);
        let mut prev: Option<(f64, f64)> = None;
        for i in 0..=steps {
            let a = (start_deg + extent_deg * i as f64 / steps as f64).to_radians();
            let p = (cx + r * a.cos(), cy - r * a.sin());
            if let Some(q) = prev {
                self.segment(q.0, q.1, p.0, p.1, color);
            }
            prev = Some(p);
        }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let mut yy = y;
        while yy <= y + h {
            self.segment(x, yy, x + w, yy, color);
            yy += 1.0;
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb) {
        if r <= 0.0 {
            return;
        }
        let mut dy = -r;
        while dy <= r {
            let half = (r * r - dy * dy).max(0.0).sqrt();
            self.segment(cx - half, cy + dy, cx + half, cy + dy, color);
            dy += 1.0;
        }
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, width: f64, color: Rgb) {
        self.stroke_arc(cx, cy, r, 0.0, 360.0, width, color);
    }

    fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        start_deg: f64,
        extent_deg: f64,
        width: f64,
        color: Rgb,
    ) {
        // Stroke width becomes concentric rings of 1-dot polylines.
        let rings = (width.ceil() as usize).max(1);
        for k in 0..rings {
            let rr = r - width / 2.0 + k as f64 + 0.5;
            self.arc_polyline(cx, cy, rr, start_deg, extent_deg, color);
        }
    }

    fn fill_pie(&mut self, cx: f64, cy: f64, r: f64, start_deg: f64, extent_deg: f64, color: Rgb) {
        let mut rr = 1.0;
        while rr <= r {
            self.arc_polyline(cx, cy, rr, start_deg, extent_deg, color);
            rr += 1.0;
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, _width: f64, color: Rgb) {
        self.segment(x1, y1, x2, y2, color);
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle) {
        // One terminal cell is 2 dots wide; anchor offsets work in dots.
        let chars = content.chars().count() as f64;
        let tx = match style.anchor {
            Anchor::West => x,
            Anchor::Center => x - chars,
            Anchor::East => x - chars * 2.0,
        };
        let mut text_style = Style::default().fg(Self::color(style.color));
        if style.bold {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        let span = Span::styled(content.to_string(), text_style);
        let flipped = self.flip(y);
        self.ctx.print(tx, flipped, TextLine::from(span));
    }
}
