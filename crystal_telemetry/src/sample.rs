//! One immutable telemetry snapshot, produced once per sampling cycle.

use serde::Serialize;

/// Snapshot of the machine at one instant. Created by the sampler, handed to
/// the channel, read at most once by the renderer, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sample {
    /// Overall CPU load, 0..100.
    pub cpu_pct: f32,
    /// Memory in use, 0..100.
    pub ram_pct: f32,
    pub ram_used_gb: f64,
    pub ram_total_gb: f64,
    /// Monitored disk fill level, 0..100.
    pub disk_pct: f32,
    pub disk_used_gb: f64,
    pub disk_total_gb: f64,
    /// Instantaneous upload rate in bytes per second.
    pub net_up_bps: f64,
    /// Instantaneous download rate in bytes per second.
    pub net_dn_bps: f64,
    /// GPU utilization 0..100, or `None` when no adapter is available.
    pub gpu_pct: Option<f32>,
    /// Machine uptime, drives the footer readout.
    pub uptime_secs: u64,
}
