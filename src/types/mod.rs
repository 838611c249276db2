pub mod cost;
pub mod delta;
pub mod ids;
pub mod pricing;
pub mod snapshot;
pub mod state;

pub use cost::{Cost, CostBreakdown};
pub use delta::UsageDelta;
pub use ids::WebhookMessageId;
pub use pricing::{METERED_PRICES, PriceTable};
pub use snapshot::UsageSnapshot;
pub use state::{MonthlyLedger, PersistedState};
