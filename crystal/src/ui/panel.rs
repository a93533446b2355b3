//! Frosted-glass panel: layered rounded rectangles plus a top glint line.
//! The illusion is self-contained and works whether or not the host window
//! provides real compositor blur behind it.

use crate::surface::{Rgb, Surface};
use crate::ui::theme;

/// Rounded-rect fill built from four pie-slice corners and two rectangles.
pub fn fill_rounded_rect<S: Surface>(
    s: &mut S,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    r: f64,
    color: Rgb,
) {
    let r = r.min((x2 - x1) / 2.0).min((y2 - y1) / 2.0).max(1.0);
    s.fill_pie(x1 + r, y1 + r, r, 90.0, 90.0, color);
    s.fill_pie(x2 - r, y1 + r, r, 0.0, 90.0, color);
    s.fill_pie(x1 + r, y2 - r, r, 180.0, 90.0, color);
    s.fill_pie(x2 - r, y2 - r, r, 270.0, 90.0, color);
    s.fill_rect(x1 + r, y1, (x2 - x1) - 2.0 * r, y2 - y1, color);
    s.fill_rect(x1, y1 + r, x2 - x1, (y2 - y1) - 2.0 * r, color);
}

pub fn draw_glass_panel<S: Surface>(s: &mut S, x1: f64, y1: f64, x2: f64, y2: f64, r: f64) {
    // Border shell defines the glass edge
    fill_rounded_rect(s, x1 - 1.0, y1 - 1.0, x2 + 1.0, y2 + 1.0, r + 1.0, theme::PANEL_BORDER);
    // Main frosted fill
    fill_rounded_rect(s, x1, y1, x2, y2, r, theme::PANEL_FILL);
    // Top 28% reads slightly brighter, like reflected light
    let hi_y2 = y1 + ((y2 - y1) * 0.28).floor();
    fill_rounded_rect(
        s,
        x1 + 1.0,
        y1 + 1.0,
        x2 - 1.0,
        hi_y2,
        (r - 1.0).max(2.0),
        theme::PANEL_HIGHLIGHT,
    );
    // 1px glint along the inner top edge
    s.line(x1 + r, y1 + 1.0, x2 - r, y1 + 1.0, 1.0, theme::WHITE);
}
