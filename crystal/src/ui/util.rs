//! Value formatting helpers shared by bars and gauges.

/// Binary-threshold byte formatter: "512B", "2K", "5.0M", "3.0G".
pub fn format_bytes(b: f64) -> String {
    const KI: f64 = 1024.0;
    const MI: f64 = KI * 1024.0;
    const GI: f64 = MI * 1024.0;
    if b >= GI {
        format!("{:.1}G", b / GI)
    } else if b >= MI {
        format!("{:.1}M", b / MI)
    } else if b >= KI {
        format!("{:.0}K", b / KI)
    } else {
        format!("{b:.0}B")
    }
}

/// Logarithmic bar fraction for network rates: low throughput stays visible
/// while ~100 MiB/s saturates at 1.
pub fn network_fraction(bps: f64) -> f64 {
    if bps <= 0.0 {
        return 0.0;
    }
    ((bps + 1.0).log10() / (100.0_f64 * 1024.0 * 1024.0).log10()).clamp(0.0, 1.0)
}
