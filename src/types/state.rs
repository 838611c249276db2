use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::WebhookMessageId;
use super::snapshot::UsageSnapshot;

/// Accumulated cost per calendar month, keyed by "YYYY-MM".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyLedger(BTreeMap<String, f64>);

impl MonthlyLedger {
    /// Add a period cost to the month's running total (or start it at zero).
    pub fn add(&mut self, period: &str, delta: f64) {
        *self.0.entry(period.to_string()).or_insert(0.0) += delta;
    }

    /// Accumulated cost for a month, 0 when nothing was recorded.
    pub fn get(&self, period: &str) -> f64 {
        self.0.get(period).copied().unwrap_or(0.0)
    }

    /// The ledger key for a point in time, e.g. "2026-08".
    pub fn period_key(at: DateTime<Utc>) -> String {
        at.format("%Y-%m").to_string()
    }
}

/// State carried between runs: the previous counters, when they were taken,
/// the webhook message we may edit, and the monthly cost ledger.
///
/// Written atomically at the end of each successful run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub last_snapshot: UsageSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<WebhookMessageId>,
    #[serde(default)]
    pub monthly_costs: MonthlyLedger,
}
