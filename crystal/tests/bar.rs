//! Bar rendering: fill width, tip strip, empty track.

mod common;

use common::{Op, RecordingSurface};
use crystal::layout::{layout, REF_H, REF_W};
use crystal::ui::bar::draw_bar;
use crystal::ui::theme;

#[test]
fn fill_width_is_floor_of_fraction() {
    let geo = layout(REF_W, REF_H);
    let mut s = RecordingSurface::new();
    draw_bar(
        &mut s, geo.pad, REF_W - geo.pad, 200.0, 207.0, "CPU", 0.42, "42%", theme::CPU, &geo,
    );

    let track_w = (REF_W - geo.pad - geo.value_width) - (geo.pad + geo.label_width);
    let fill = s.ops.iter().find_map(|op| match op {
        Op::FillRect { w, color, .. } if *color == theme::CPU => Some(*w),
        _ => None,
    });
    assert_eq!(fill, Some((track_w * 0.42).floor()));
}

#[test]
fn tip_strip_clamped_between_two_and_fill() {
    let geo = layout(REF_W, REF_H);
    let mut s = RecordingSurface::new();
    // Tiny fill: tip would be <2, so it is clamped up to the fill width
    draw_bar(
        &mut s, geo.pad, REF_W - geo.pad, 200.0, 207.0, "NET", 0.02, "1K/s", theme::NET_UP, &geo,
    );

    let tip = s.ops.iter().rev().find_map(|op| match op {
        Op::FillRect { w, color, .. } if *color == theme::WHITE => Some(*w),
        _ => None,
    });
    // fill is floor(134 * 0.02) = 2, so the tip occupies the whole fill
    assert_eq!(tip, Some(2.0));
}

#[test]
fn zero_fraction_draws_only_the_track() {
    let geo = layout(REF_W, REF_H);
    let mut s = RecordingSurface::new();
    draw_bar(
        &mut s, geo.pad, REF_W - geo.pad, 200.0, 207.0, "NET", 0.0, "0B/s", theme::NET_DN, &geo,
    );

    let rects: Vec<_> = s
        .ops
        .iter()
        .filter(|op| matches!(op, Op::FillRect { .. }))
        .collect();
    assert_eq!(rects.len(), 1);
    assert!(matches!(
        rects[0],
        Op::FillRect { color, .. } if *color == theme::BAR_TRACK
    ));
}

#[test]
fn over_unity_fraction_is_clamped() {
    let geo = layout(REF_W, REF_H);
    let mut s = RecordingSurface::new();
    draw_bar(
        &mut s, geo.pad, REF_W - geo.pad, 200.0, 207.0, "CPU", 1.7, "170%", theme::CPU, &geo,
    );

    let track_w = (REF_W - geo.pad - geo.value_width) - (geo.pad + geo.label_width);
    let fill = s.ops.iter().find_map(|op| match op {
        Op::FillRect { w, color, .. } if *color == theme::CPU => Some(*w),
        _ => None,
    });
    assert_eq!(fill, Some(track_w.floor()));
}
