//! Circular gauge: a 240-degree sweep starting at 225 and decreasing, with
//! tick marks, a glow stack over the value arc, a tip dot, and centered text.
//! Every stroke width and text size derives from the radius with a fixed
//! minimum, same discipline as the layout engine.

use crate::surface::{Rgb, Surface, TextStyle};
use crate::ui::theme::{self, blend, lighten};

pub const SWEEP_START_DEG: f64 = 225.0;
pub const SWEEP_DEG: f64 = 240.0;
const TICKS: usize = 13;

fn frac_of(r: f64, f: f64, min: f64) -> f64 {
    (r * f).floor().max(min)
}

/// `pct` is a fraction in [0, 1]; the caller clamps. At 0 only the background
/// track is drawn; at 1 the value arc spans the full sweep and the tip sits
/// at -15 degrees.
pub fn draw_gauge<S: Surface>(
    s: &mut S,
    cx: f64,
    cy: f64,
    r: f64,
    pct: f64,
    color: Rgb,
    label: &str,
    value: &str,
) {
    let glow_outer = lighten(color, 0.82);
    let glow_mid = lighten(color, 0.40);
    let track_color = blend(color, theme::WHITE, 0.88);

    let track_w = frac_of(r, 0.10, 2.0);
    let glow_outer_w = frac_of(r, 0.32, 6.0);
    let glow_mid_w = frac_of(r, 0.16, 3.0);
    let arc_w = frac_of(r, 0.07, 2.0);
    let dot_r = frac_of(r, 0.12, 3.0);
    let ring_gap = frac_of(r, 0.14, 4.0);
    let tick_major = frac_of(r, 0.12, 3.0);
    let tick_minor = frac_of(r, 0.08, 2.0);
    let inner_r = r - frac_of(r, 0.25, 8.0);

    // Outer decorative ring
    s.stroke_circle(cx, cy, r + ring_gap, 1.0, lighten(color, 0.65));

    // 13 ticks every 20 degrees across the sweep, every third one major
    for i in 0..TICKS {
        let a = (SWEEP_START_DEG - i as f64 * 20.0).to_radians();
        let major = i % 3 == 0;
        let ri = r + frac_of(r, 0.06, 2.0);
        let ro = ri + if major { tick_major } else { tick_minor };
        let (ca, sa) = (a.cos(), a.sin());
        s.line(
            cx + ri * ca,
            cy - ri * sa,
            cx + ro * ca,
            cy - ro * sa,
            1.0,
            if major {
                theme::FG3
            } else {
                lighten(theme::FG3, 0.5)
            },
        );
    }

    // Background track
    s.stroke_arc(cx, cy, r, SWEEP_START_DEG, -SWEEP_DEG, track_w, track_color);

    if pct > 0.0 {
        let extent = -pct * SWEEP_DEG;
        s.stroke_arc(cx, cy, r, SWEEP_START_DEG, extent, glow_outer_w, glow_outer);
        s.stroke_arc(cx, cy, r, SWEEP_START_DEG, extent, glow_mid_w, glow_mid);
        s.stroke_arc(cx, cy, r, SWEEP_START_DEG, extent, arc_w, color);

        // Tip dot at the sweep's terminal angle
        let tip = (SWEEP_START_DEG - pct * SWEEP_DEG).to_radians();
        let (tx, ty) = (cx + r * tip.cos(), cy - r * tip.sin());
        s.fill_circle(tx, ty, dot_r, color);
        s.stroke_circle(tx, ty, dot_r, 1.0, theme::WHITE);
    }

    // Inner disc keeps the text legible over the arcs
    s.fill_circle(cx, cy, inner_r, theme::WHITE);
    s.stroke_circle(cx, cy, inner_r, 1.0, lighten(color, 0.55));

    s.text(
        cx,
        cy - frac_of(r, 0.06, 2.0),
        value,
        TextStyle::new(frac_of(r, 0.30, 8.0), color).mono().bold(),
    );
    s.text(
        cx,
        cy + (r * 0.38).floor(),
        label,
        TextStyle::new(frac_of(r, 0.20, 6.0), theme::FG2),
    );
}
