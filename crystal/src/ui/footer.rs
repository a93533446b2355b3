//! Footer row: wall clock on the left, machine uptime centered.

use crate::layout::Geometry;
use crate::surface::{Anchor, Surface, TextStyle};
use crate::ui::theme;

pub fn draw_footer<S: Surface>(s: &mut S, geo: &Geometry, w: f64, clock: &str, uptime_secs: u64) {
    let hours = uptime_secs / 3600;
    let minutes = (uptime_secs % 3600) / 60;

    s.text(
        geo.pad,
        geo.footer_y,
        clock,
        TextStyle::new(geo.footer_font, theme::CPU)
            .anchor(Anchor::West)
            .mono(),
    );
    s.text(
        w / 2.0,
        geo.footer_y,
        &format!("up {hours}h {minutes:02}m"),
        TextStyle::new(geo.footer_font, theme::FG2).mono(),
    );
}
