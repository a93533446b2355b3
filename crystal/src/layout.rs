//! Pure window-size to geometry derivation.
//!
//! All scale-dependent dimensions live here so no renderer recomputes them
//! ad hoc. Every derived field is `max(min, floor(base * sc))` for some fixed
//! base and minimum, which makes each one monotone in the scale factor and
//! never smaller than its floor.

/// Reference window size; `sc == 1.0` at exactly this size.
pub const REF_W: f64 = 270.0;
pub const REF_H: f64 = 360.0;

/// Smallest useful window the host should allow.
pub const MIN_W: f64 = 220.0;
pub const MIN_H: f64 = 280.0;

/// Below this the whole frame is skipped rather than drawn degenerate.
pub const MIN_SURFACE: f64 = 10.0;

const SCALE_FLOOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub sc: f64,
    pub pad: f64,
    pub panel_radius: f64,
    pub bar_font: f64,
    pub footer_font: f64,
    pub bar_height: f64,
    pub label_width: f64,
    pub value_width: f64,
    pub gauge_left_cx: f64,
    pub gauge_right_cx: f64,
    pub gauge_cy: f64,
    pub gauge_radius: f64,
    pub divider_y: f64,
    pub bars_top: f64,
    pub bars_bottom: f64,
    pub footer_y: f64,
}

fn scaled(base: f64, min: f64, sc: f64) -> f64 {
    (base * sc).floor().max(min)
}

/// Deterministic and side-effect free; recomputed on every redraw, never
/// cached across resizes.
pub fn layout(w: f64, h: f64) -> Geometry {
    let sc = (w / REF_W).min(h / REF_H).max(SCALE_FLOOR);

    let pad = scaled(14.0, 8.0, sc);
    let panel_radius = scaled(16.0, 8.0, sc);
    let bar_font = scaled(8.0, 6.0, sc);
    let footer_font = scaled(7.0, 6.0, sc);
    let bar_height = scaled(7.0, 4.0, sc);
    let label_width = scaled(44.0, 28.0, sc);
    let value_width = scaled(64.0, 42.0, sc);

    // Gauges occupy the top 44% of the panel, one per half-column.
    let gauge_h = (h * 0.44).floor();
    let half = w / 2.0 - pad - scaled(6.0, 4.0, sc);
    let gauge_radius = (half / 2.0 - scaled(12.0, 8.0, sc))
        .min((gauge_h - 2.0 * pad) / 2.0 - scaled(10.0, 6.0, sc))
        .max(22.0);

    let divider_y = gauge_h + scaled(8.0, 4.0, sc);
    let bars_top = divider_y + scaled(10.0, 6.0, sc);
    let bars_bottom = h - scaled(26.0, 18.0, sc);
    let footer_y = h - scaled(12.0, 8.0, sc);

    Geometry {
        sc,
        pad,
        panel_radius,
        bar_font,
        footer_font,
        bar_height,
        label_width,
        value_width,
        gauge_left_cx: pad + half / 2.0,
        gauge_right_cx: w - pad - half / 2.0,
        gauge_cy: (pad + gauge_h) / 2.0,
        gauge_radius,
        divider_y,
        bars_top,
        bars_bottom,
        footer_y,
    }
}
