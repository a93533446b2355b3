//! Horizontal metric bar: label column, track, glow underlay, bright tip
//! strip at the leading edge, value column.

use crate::layout::Geometry;
use crate::surface::{Anchor, Rgb, Surface, TextStyle};
use crate::ui::theme::{self, lighten};

pub fn draw_bar<S: Surface>(
    s: &mut S,
    x1: f64,
    x2: f64,
    top: f64,
    bottom: f64,
    label: &str,
    pct: f64,
    value: &str,
    color: Rgb,
    geo: &Geometry,
) {
    let bx = x1 + geo.label_width;
    let bx2 = x2 - geo.value_width;
    let cy = (top + bottom) / 2.0;
    let glow = lighten(color, 0.72);

    s.text(
        bx - 4.0,
        cy,
        label,
        TextStyle::new(geo.bar_font, theme::FG2)
            .anchor(Anchor::East)
            .bold(),
    );

    s.fill_rect(bx, top, bx2 - bx, bottom - top, theme::BAR_TRACK);

    let fill = ((bx2 - bx) * pct.clamp(0.0, 1.0)).floor();
    if fill > 0.0 {
        s.fill_rect(bx, top - 1.0, fill, bottom - top + 2.0, glow);
        s.fill_rect(bx, top, fill, bottom - top, color);
        let tip = (fill * 0.06).floor().max(2.0).min(fill);
        s.fill_rect(bx + fill - tip, top - 1.0, tip, bottom - top + 2.0, theme::WHITE);
    }

    s.text(
        x2,
        cy,
        value,
        TextStyle::new(geo.bar_font, theme::FG)
            .anchor(Anchor::East)
            .mono(),
    );
}
