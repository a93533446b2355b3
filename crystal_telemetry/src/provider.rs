//! Point-in-time OS counters behind a trait so the sampler can run against
//! mocks in tests. The real implementation keeps persistent sysinfo handles
//! so successive reads produce meaningful deltas.

use std::path::PathBuf;

use anyhow::Result;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use thiserror::Error;

use crate::gpu;

#[derive(Debug, Clone, Copy)]
pub struct MemoryUsage {
    pub percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct DiskUsage {
    pub percent: f32,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

/// Cumulative totals since boot/handle creation; the sampler diffs these to
/// get rates.
#[derive(Debug, Clone, Copy)]
pub struct NetCounters {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no disk mounted under {0}")]
    NoDisk(PathBuf),
    #[error("memory totals unavailable")]
    NoMemory,
}

/// CPU/memory/disk/network reads are fatal to a sampling cycle when they
/// fail; the GPU is an optional capability and degrades to `None` instead.
pub trait MetricsProvider {
    fn cpu_percent(&mut self) -> Result<f32>;
    fn memory(&mut self) -> Result<MemoryUsage>;
    fn disk(&mut self) -> Result<DiskUsage>;
    fn network_counters(&mut self) -> Result<NetCounters>;

    fn gpu_percent(&mut self) -> Option<f32> {
        None
    }

    fn uptime_secs(&mut self) -> u64 {
        0
    }
}

/// sysinfo-backed provider observing the local machine.
pub struct SystemProvider {
    sys: System,
    networks: Networks,
    disks: Disks,
    disk_path: PathBuf,
}

impl SystemProvider {
    /// `disk_path` selects which mount to report, e.g. `/` or `/home`.
    pub fn new(disk_path: impl Into<PathBuf>) -> Self {
        let refresh = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());
        Self {
            sys: System::new_with_specifics(refresh),
            networks: Networks::new_with_refreshed_list(),
            disks: Disks::new_with_refreshed_list(),
            disk_path: disk_path.into(),
        }
    }
}

impl MetricsProvider for SystemProvider {
    fn cpu_percent(&mut self) -> Result<f32> {
        self.sys.refresh_cpu_usage();
        Ok(self.sys.global_cpu_usage().clamp(0.0, 100.0))
    }

    fn memory(&mut self) -> Result<MemoryUsage> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(ProviderError::NoMemory.into());
        }
        let used = total.saturating_sub(self.sys.available_memory());
        Ok(MemoryUsage {
            percent: used as f32 / total as f32 * 100.0,
            used_bytes: used,
            total_bytes: total,
        })
    }

    fn disk(&mut self) -> Result<DiskUsage> {
        self.disks.refresh(false);
        // Longest matching mount point wins, same resolution as `df`.
        let disk = self
            .disks
            .iter()
            .filter(|d| self.disk_path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| ProviderError::NoDisk(self.disk_path.clone()))?;
        let total = disk.total_space();
        if total == 0 {
            return Err(ProviderError::NoDisk(self.disk_path.clone()).into());
        }
        let used = total.saturating_sub(disk.available_space());
        Ok(DiskUsage {
            percent: used as f32 / total as f32 * 100.0,
            used_bytes: used,
            total_bytes: total,
        })
    }

    fn network_counters(&mut self) -> Result<NetCounters> {
        self.networks.refresh(false);
        let mut sent: u64 = 0;
        let mut recv: u64 = 0;
        for (_name, data) in self.networks.iter() {
            sent = sent.saturating_add(data.total_transmitted());
            recv = recv.saturating_add(data.total_received());
        }
        Ok(NetCounters {
            bytes_sent: sent,
            bytes_recv: recv,
        })
    }

    fn gpu_percent(&mut self) -> Option<f32> {
        gpu::utilization_percent()
    }

    fn uptime_secs(&mut self) -> u64 {
        System::uptime()
    }
}
