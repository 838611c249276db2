// Module declarations
pub mod config;
pub mod constants;
pub mod error;
pub mod notify;
pub mod report;
pub mod run;
pub mod source;
pub mod state_store;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use error::{ReporterError, Result};
pub use notify::Notifier;
pub use source::{FileSource, HttpSource, UsageSource};
pub use state_store::StateStore;
pub use types::{
    Cost, CostBreakdown, METERED_PRICES, MonthlyLedger, PersistedState, PriceTable, UsageDelta,
    UsageSnapshot, WebhookMessageId,
};
