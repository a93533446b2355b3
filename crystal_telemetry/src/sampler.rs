//! Background sampler: turns raw provider counters into one `Sample` per
//! cycle and publishes it to the channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::warn;

use crate::channel::SampleChannel;
use crate::provider::MetricsProvider;
use crate::sample::Sample;

/// Default time between sampling cycles.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
/// Delay between priming the CPU counters and the first real cycle.
const WARMUP: Duration = Duration::from_millis(500);

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Previous cumulative network counters; private to the sampler.
struct NetCounterState {
    sent: u64,
    recv: u64,
    at: Instant,
}

pub struct MetricsSampler<P> {
    provider: P,
    net_prev: Option<NetCounterState>,
}

impl<P: MetricsProvider> MetricsSampler<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            net_prev: None,
        }
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// One sampling cycle against the wall clock.
    pub fn sample_once(&mut self) -> Result<Sample> {
        self.sample_at(Instant::now())
    }

    /// One sampling cycle at an explicit instant. A failing CPU, memory,
    /// disk, or network read aborts the whole cycle; GPU absence only blanks
    /// that field. The first cycle reports zero network rates since there is
    /// no previous counter state to diff against.
    pub fn sample_at(&mut self, now: Instant) -> Result<Sample> {
        let cpu_pct = self.provider.cpu_percent()?;
        let mem = self.provider.memory()?;
        let disk = self.provider.disk()?;
        let counters = self.provider.network_counters()?;

        let (net_up_bps, net_dn_bps) = match &self.net_prev {
            Some(prev) => {
                // A non-positive dt would mean a clock anomaly; report zero
                // rather than divide by it.
                let dt = now
                    .checked_duration_since(prev.at)
                    .map(|d| d.as_secs_f64())
                    .unwrap_or(0.0);
                if dt > 0.0 {
                    (
                        counters.bytes_sent.saturating_sub(prev.sent) as f64 / dt,
                        counters.bytes_recv.saturating_sub(prev.recv) as f64 / dt,
                    )
                } else {
                    (0.0, 0.0)
                }
            }
            None => (0.0, 0.0),
        };
        self.net_prev = Some(NetCounterState {
            sent: counters.bytes_sent,
            recv: counters.bytes_recv,
            at: now,
        });

        let gpu_pct = self.provider.gpu_percent();
        let uptime_secs = self.provider.uptime_secs();

        Ok(Sample {
            cpu_pct,
            ram_pct: mem.percent,
            ram_used_gb: mem.used_bytes as f64 / GIB,
            ram_total_gb: mem.total_bytes as f64 / GIB,
            disk_pct: disk.percent,
            disk_used_gb: disk.used_bytes as f64 / GIB,
            disk_total_gb: disk.total_bytes as f64 / GIB,
            net_up_bps,
            net_dn_bps,
            gpu_pct,
            uptime_secs,
        })
    }
}

/// Run the sampling loop on a background task until `stop` is set. Cycle
/// failures are logged and skip the publish; the loop itself never exits
/// early. Stopping takes effect at the next iteration boundary, so a hung
/// provider call delays shutdown by at most one cycle plus the sleep.
pub fn spawn_sampler<P>(
    mut sampler: MetricsSampler<P>,
    channel: SampleChannel,
    period: Duration,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()>
where
    P: MetricsProvider + Send + 'static,
{
    tokio::spawn(async move {
        // First CPU read only establishes the measurement baseline.
        let _ = sampler.provider_mut().cpu_percent();
        sleep(WARMUP).await;
        while !stop.load(Ordering::Relaxed) {
            match sampler.sample_once() {
                Ok(sample) => channel.publish(sample),
                Err(e) => warn!("sampling cycle failed: {e:#}"),
            }
            sleep(period).await;
        }
    })
}
