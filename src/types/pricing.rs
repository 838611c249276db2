/// Per-unit prices in USD for each billed resource.
///
/// Read-only for the lifetime of a run; tests may supply their own table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTable {
    pub cpu_second: f64,
    pub memory_gb_second: f64,
    pub volume_gb_second: f64,
    pub network_gb: f64,
}

/// Railway's published metered rates.
pub const METERED_PRICES: PriceTable = PriceTable {
    cpu_second: 0.00000772,
    memory_gb_second: 0.00000386,
    volume_gb_second: 0.00000006,
    network_gb: 0.05,
};
