use super::snapshot::UsageSnapshot;

const MB_PER_GB: f64 = 1024.0;

/// Usage accrued between two cumulative snapshots.
///
/// Every component is clamped to zero: a counter that went backwards (reset
/// on the source side) counts as no usage for the period, never as a credit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageDelta {
    pub cpu_seconds: f64,
    pub memory_mb_seconds: f64,
    pub network_egress_mb: f64,
    pub volume_gb_seconds: f64,
}

impl UsageDelta {
    /// Compute the clamped difference `current - previous`.
    pub fn between(current: &UsageSnapshot, previous: &UsageSnapshot) -> Self {
        Self {
            cpu_seconds: (current.cpu_seconds - previous.cpu_seconds).max(0.0),
            memory_mb_seconds: (current.memory_mb_seconds - previous.memory_mb_seconds).max(0.0),
            network_egress_mb: (current.network_egress_mb - previous.network_egress_mb).max(0.0),
            volume_gb_seconds: (current.volume_gb_seconds - previous.volume_gb_seconds).max(0.0),
        }
    }

    /// Memory usage in billed GB-seconds.
    pub fn memory_gb_seconds(&self) -> f64 {
        self.memory_mb_seconds / MB_PER_GB
    }

    /// Network egress in billed GB.
    pub fn network_gb(&self) -> f64 {
        self.network_egress_mb / MB_PER_GB
    }
}
