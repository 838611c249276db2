use chrono::{DateTime, Utc};

use crate::types::{CostBreakdown, MonthlyLedger, UsageDelta, UsageSnapshot};

// Convert a seconds counter to display hours
fn hours(seconds: f64) -> f64 {
    seconds / 3600.0
}

/// Render the Discord-markdown report body.
///
/// All monetary rounding (4 decimal places) happens in `Cost` formatting at
/// this point; nothing upstream rounds.
pub fn render(
    now: DateTime<Utc>,
    delta: &UsageDelta,
    costs: &CostBreakdown,
    current: &UsageSnapshot,
    ledger: &MonthlyLedger,
) -> String {
    let period = MonthlyLedger::period_key(now);

    let mut lines = Vec::with_capacity(9);
    lines.push(format!(
        "📊 **Railway Usage & Cost Update** ({})",
        now.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(format!(
        "💻 CPU: {:.2} h ({})",
        hours(delta.cpu_seconds),
        costs.cpu
    ));
    lines.push(format!(
        "🧠 Memory: {:.2} GB-h ({})",
        hours(delta.memory_gb_seconds()),
        costs.memory
    ));
    lines.push(format!(
        "💾 Volume: {:.2} GB-h ({})",
        hours(delta.volume_gb_seconds),
        costs.volume
    ));
    lines.push(format!(
        "🌐 Network: {:.2} MB ({})",
        delta.network_egress_mb, costs.network
    ));
    lines.push(format!("💰 Estimated cost this period: {}", costs.total));
    lines.push(format!(
        "💰 Month to date ({}): ${:.4}",
        period,
        ledger.get(&period)
    ));
    lines.push(format!(
        "📈 Cumulative: CPU {:.2} h, memory {:.2} GB-h, network {:.2} MB",
        hours(current.cpu_seconds),
        hours(current.memory_mb_seconds / 1024.0),
        current.network_egress_mb
    ));

    lines.join("\n")
}
