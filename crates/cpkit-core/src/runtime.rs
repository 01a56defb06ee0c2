//! Runtime facts this client reports to the control plane.

use serde::Serialize;
use std::env;
use std::thread;

/// Snapshot of process/host facts, serialized into status reports.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeStats {
    pub os: &'static str,
    pub arch: &'static str,
    /// Toolkit version baked in at compile time.
    pub version: &'static str,
    pub cpu_count: usize,
    pub pid: u32,
}

/// Collect the current runtime facts.
pub fn runtime_stats() -> RuntimeStats {
    RuntimeStats {
        os: env::consts::OS,
        arch: env::consts::ARCH,
        version: env!("CARGO_PKG_VERSION"),
        cpu_count: thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
        pid: std::process::id(),
    }
}
