//! @ai:module:intent Describe the machine a benchmark runs on
//! @ai:module:layer infrastructure
//! @ai:module:public_api HostInfo

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// @ai:intent CPU, memory and OS facts logged before a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    pub os: String,
    pub arch: String,
    pub logical_cpus: usize,
    pub physical_cpus: usize,
    pub total_memory_mb: u64,
    pub available_memory_mb: u64,
}

impl HostInfo {
    /// @ai:intent Probe the current host
    /// @ai:effects io
    pub fn detect() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();

        let os = System::long_os_version()
            .or_else(System::os_version)
            .unwrap_or_else(|| std::env::consts::OS.to_string());

        Self {
            os,
            arch: std::env::consts::ARCH.to_string(),
            logical_cpus: num_cpus::get(),
            physical_cpus: num_cpus::get_physical(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            available_memory_mb: sys.available_memory() / 1024 / 1024,
        }
    }

    /// @ai:intent Write the host description to the log
    /// @ai:effects io
    pub fn log(&self) {
        tracing::info!(
            "Host: {} ({}), {} logical / {} physical CPUs",
            self.os,
            self.arch,
            self.logical_cpus,
            self.physical_cpus
        );
        tracing::info!(
            "Memory: {} MB total, {} MB available",
            self.total_memory_mb,
            self.available_memory_mb
        );
    }
}
