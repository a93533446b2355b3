//! Byte formatting and the logarithmic network bar fraction.

use crystal::ui::util::{format_bytes, network_fraction};

#[test]
fn format_bytes_thresholds() {
    assert_eq!(format_bytes(0.0), "0B");
    assert_eq!(format_bytes(512.0), "512B");
    assert_eq!(format_bytes(2048.0), "2K");
    assert_eq!(format_bytes(5.0 * 1024.0 * 1024.0), "5.0M");
    assert_eq!(format_bytes(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0G");
}

#[test]
fn network_fraction_at_zero_and_below() {
    assert_eq!(network_fraction(0.0), 0.0);
    assert_eq!(network_fraction(-123.0), 0.0);
}

#[test]
fn network_fraction_saturates_at_hundred_mib() {
    let f = network_fraction(100.0 * 1024.0 * 1024.0);
    assert!((f - 1.0).abs() < 1e-6);
    assert_eq!(network_fraction(1e18), 1.0);
}

#[test]
fn network_fraction_monotonic_and_bounded() {
    let rates = [1.0, 10.0, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9];
    let mut prev = 0.0;
    for r in rates {
        let f = network_fraction(r);
        assert!((0.0..=1.0).contains(&f), "fraction out of range for {r}");
        assert!(f >= prev, "fraction decreased at {r}");
        prev = f;
    }
}
