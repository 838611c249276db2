use serde::{Deserialize, Serialize};

/// Cumulative usage counters as of a point in time.
///
/// Field names match the usage JSON exported from Railway; counters absent
/// from the source default to 0. The counters are monotonically
/// non-decreasing on the source side, and a snapshot is never mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    #[serde(default)]
    pub cpu_seconds: f64,
    #[serde(default, rename = "memoryMBSeconds")]
    pub memory_mb_seconds: f64,
    #[serde(default, rename = "networkEgressMB")]
    pub network_egress_mb: f64,
    #[serde(default, rename = "volumeGBSeconds")]
    pub volume_gb_seconds: f64,
}

impl UsageSnapshot {
    /// The all-zero snapshot, used as the baseline on a first run.
    pub const ZERO: Self = Self {
        cpu_seconds: 0.0,
        memory_mb_seconds: 0.0,
        network_egress_mb: 0.0,
        volume_gb_seconds: 0.0,
    };
}
