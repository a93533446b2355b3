//! A `Surface` that records draw calls so tests can assert on what a frame
//! actually emitted.

use crystal::surface::{Rgb, Surface, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgb,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Rgb,
    },
    StrokeCircle {
        cx: f64,
        cy: f64,
        r: f64,
        width: f64,
        color: Rgb,
    },
    StrokeArc {
        cx: f64,
        cy: f64,
        r: f64,
        start_deg: f64,
        extent_deg: f64,
        width: f64,
        color: Rgb,
    },
    FillPie {
        cx: f64,
        cy: f64,
        r: f64,
        start_deg: f64,
        extent_deg: f64,
        color: Rgb,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Rgb,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arcs(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::StrokeArc { .. }))
            .collect()
    }

    pub fn lines(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        self.ops.push(Op::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb) {
        self.ops.push(Op::FillCircle { cx, cy, r, color });
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, r: f64, width: f64, color: Rgb) {
        self.ops.push(Op::StrokeCircle {
            cx,
            cy,
            r,
            width,
            color,
        });
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
        self.ops.push(Op::StrokeArc {
            cx,
            cy,
            r,
            start_deg,
            extent_deg,
            width,
            color,
        });
    }

    fn fill_pie(&mut self, cx: f64, cy: f64, r: f64, start_deg: f64, extent_deg: f64, color: Rgb) {
        self.ops.push(Op::FillPie {
            cx,
            cy,
            r,
            start_deg,
            extent_deg,
            color,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgb) {
        self.ops.push(Op::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle) {
        self.ops.push(Op::Text {
            x,
            y,
            content: content.to_string(),
            style,
        });
    }
}
