//! Local telemetry sampling pipeline: point-in-time providers, the background
//! sampler loop, and the bounded drop-oldest channel feeding the renderer.
//!
//! Data flows one way: provider -> sampler -> channel. The renderer polls the
//! channel on its own tick and never calls back into this crate.

pub mod channel;
pub mod gpu;
pub mod provider;
pub mod sample;
pub mod sampler;

pub use channel::{SampleChannel, CHANNEL_DEPTH};
pub use provider::{DiskUsage, MemoryUsage, MetricsProvider, NetCounters, SystemProvider};
pub use sample::Sample;
pub use sampler::{spawn_sampler, MetricsSampler, SAMPLE_INTERVAL};
