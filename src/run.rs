use chrono::Utc;
use tracing::{debug, info};

use crate::error::Result;
use crate::notify::Notifier;
use crate::report;
use crate::source::UsageSource;
use crate::state_store::StateStore;
use crate::types::{CostBreakdown, MonthlyLedger, PersistedState, PriceTable, UsageDelta, UsageSnapshot};

/// Execute one reporting run: load state, fetch the current snapshot, price
/// the delta, publish or edit the report, persist state.
///
/// State is only written after the notification went out; a send failure
/// leaves the previous baseline in place so the next run retries the same
/// interval instead of silently skipping it.
///
/// On a first run (no usable prior state) the baseline is the zero snapshot,
/// so the report prices everything the counters have accrued so far.
pub async fn run(
    source: &dyn UsageSource,
    store: &StateStore,
    notifier: &Notifier,
    prices: &PriceTable,
) -> Result<CostBreakdown> {
    let previous = store.load().await;
    if previous.is_none() {
        debug!("no prior state, treating this as a first run");
    }

    let current = source.fetch().await?;

    let baseline = previous
        .as_ref()
        .map(|state| state.last_snapshot)
        .unwrap_or(UsageSnapshot::ZERO);

    let delta = UsageDelta::between(&current, &baseline);
    let costs = CostBreakdown::from_delta(&delta, prices);

    let now = Utc::now();
    let mut ledger = previous
        .as_ref()
        .map(|state| state.monthly_costs.clone())
        .unwrap_or_default();
    ledger.add(&MonthlyLedger::period_key(now), costs.total.value());

    let body = report::render(now, &delta, &costs, &current, &ledger);

    let previous_id = previous.and_then(|state| state.last_message_id);
    let message_id = notifier.publish(&body, previous_id.as_ref()).await?;

    store
        .save(&PersistedState {
            last_snapshot: current,
            last_run_timestamp: Some(now),
            last_message_id: Some(message_id),
            monthly_costs: ledger,
        })
        .await?;

    info!(total = %costs.total, "run complete");
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReporterError;
    use crate::source::MockUsageSource;
    use crate::types::METERED_PRICES;

    #[tokio::test]
    async fn test_source_failure_aborts_before_any_side_effect() {
        let mut source = MockUsageSource::new();
        source.expect_fetch().times(1).returning(|| {
            Err(ReporterError::UsageFileUnavailable {
                path: "usage.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        });

        let dir = tempfile::tempdir().unwrap();
        let state_path = dir.path().join("state.json");
        let store = StateStore::new(&state_path);
        // Unroutable on purpose: the notifier must never be contacted
        let notifier = Notifier::new("http://127.0.0.1:9/hook");

        let err = run(&source, &store, &notifier, &METERED_PRICES)
            .await
            .unwrap_err();
        assert!(matches!(err, ReporterError::UsageFileUnavailable { .. }));
        assert!(!state_path.exists());
    }
}
