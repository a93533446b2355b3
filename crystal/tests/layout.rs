//! Geometry derivation: scale factor, minimums, monotonicity.

use crystal::layout::{layout, Geometry, REF_H, REF_W};

fn fields(g: &Geometry) -> Vec<f64> {
    vec![
        g.pad,
        g.panel_radius,
        g.bar_font,
        g.footer_font,
        g.bar_height,
        g.label_width,
        g.value_width,
        g.gauge_left_cx,
        g.gauge_right_cx,
        g.gauge_cy,
        g.gauge_radius,
        g.divider_y,
        g.bars_top,
        g.bars_bottom,
        g.footer_y,
    ]
}

#[test]
fn reference_size_is_scale_one() {
    let g = layout(REF_W, REF_H);
    assert_eq!(g.sc, 1.0);
    assert_eq!(g.pad, 14.0);
    assert_eq!(g.panel_radius, 16.0);
    assert_eq!(g.bar_font, 8.0);
    assert_eq!(g.footer_font, 7.0);
    assert_eq!(g.bar_height, 7.0);
    assert_eq!(g.label_width, 44.0);
    assert_eq!(g.value_width, 64.0);
}

#[test]
fn scale_never_drops_below_half() {
    let g = layout(27.0, 36.0);
    assert_eq!(g.sc, 0.5);
}

#[test]
fn minimums_hold_at_tiny_sizes() {
    let g = layout(27.0, 36.0);
    assert_eq!(g.pad, 8.0);
    assert_eq!(g.panel_radius, 8.0);
    assert_eq!(g.bar_font, 6.0);
    assert_eq!(g.footer_font, 6.0);
    assert_eq!(g.bar_height, 4.0);
    assert_eq!(g.label_width, 28.0);
    assert_eq!(g.value_width, 42.0);
    assert!(g.gauge_radius >= 22.0);
}

#[test]
fn fields_non_decreasing_in_scale() {
    let mut prev: Option<Vec<f64>> = None;
    for step in 0..=24 {
        let f = 0.5 + step as f64 * 0.25;
        let g = layout(REF_W * f, REF_H * f);
        let cur = fields(&g);
        if let Some(p) = &prev {
            for (i, (a, b)) in p.iter().zip(cur.iter()).enumerate() {
                assert!(
                    b >= a,
                    "field {i} decreased from {a} to {b} at scale {f}"
                );
            }
        }
        prev = Some(cur);
    }
}

#[test]
fn scale_tracks_limiting_dimension() {
    // Width-limited
    let g = layout(REF_W, REF_H * 3.0);
    assert_eq!(g.sc, 1.0);
    // Height-limited
    let g = layout(REF_W * 3.0, REF_H);
    assert_eq!(g.sc, 1.0);
    // Both doubled
    let g = layout(REF_W * 2.0, REF_H * 2.0);
    assert_eq!(g.sc, 2.0);
    assert_eq!(g.pad, 28.0);
}
