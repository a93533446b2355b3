//! Optional GPU utilization probe via NVML.
//!
//! A failed init is remembered so an absent driver isn't re-probed every
//! cycle. Any failure here degrades to `None`; it never aborts a cycle.

use nvml_wrapper::Nvml;
use once_cell::sync::OnceCell;
use tracing::debug;

static NVML: OnceCell<Option<Nvml>> = OnceCell::new();

fn nvml() -> Option<&'static Nvml> {
    NVML.get_or_init(|| match Nvml::init() {
        Ok(n) => Some(n),
        Err(e) => {
            debug!("nvml unavailable: {e}");
            None
        }
    })
    .as_ref()
}

/// Utilization summed across every adapter, capped at 100. Summing can
/// overshoot before the cap on multi-GPU machines; the cap keeps the gauge
/// in range.
pub fn utilization_percent() -> Option<f32> {
    let nvml = nvml()?;
    let count = nvml.device_count().ok()?;
    let mut total = 0.0_f32;
    let mut seen = false;
    for i in 0..count {
        let Ok(device) = nvml.device_by_index(i) else {
            continue;
        };
        if let Ok(rates) = device.utilization_rates() {
            total += rates.gpu as f32;
            seen = true;
        }
    }
    seen.then(|| total.min(100.0))
}
