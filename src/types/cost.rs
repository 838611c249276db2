use super::delta::UsageDelta;
use super::pricing::PriceTable;
use std::fmt;

/// A newtype wrapper for cost values in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// Create a new Cost from a raw value
    #[inline]
    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    /// Get the raw value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Format as currency rounded to 4 decimal places (e.g., "$0.0278").
    ///
    /// Rounding happens here and only here; the stored value stays unrounded.
    pub fn to_formatted_string(&self) -> String {
        // Handle negative zero case
        let formatted_value = if self.0.abs() < 0.00005 { 0.0 } else { self.0 };
        format!("${:.4}", formatted_value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

/// Cost of one usage period, broken down by resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub cpu: Cost,
    pub memory: Cost,
    pub volume: Cost,
    pub network: Cost,
    pub total: Cost,
}

impl CostBreakdown {
    /// Price a usage delta against the given table.
    pub fn from_delta(delta: &UsageDelta, prices: &PriceTable) -> Self {
        let cpu = delta.cpu_seconds * prices.cpu_second;
        let memory = delta.memory_gb_seconds() * prices.memory_gb_second;
        let volume = delta.volume_gb_seconds * prices.volume_gb_second;
        let network = delta.network_gb() * prices.network_gb;

        Self {
            cpu: Cost::new(cpu),
            memory: Cost::new(memory),
            volume: Cost::new(volume),
            network: Cost::new(network),
            total: Cost::new(cpu + memory + volume + network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pricing::METERED_PRICES;

    #[test]
    fn test_cost_formatting() {
        assert_eq!(Cost::new(0.027792).to_formatted_string(), "$0.0278");
        assert_eq!(Cost::new(0.0).to_formatted_string(), "$0.0000");
        assert_eq!(Cost::new(-0.0).to_formatted_string(), "$0.0000");
        assert_eq!(Cost::new(0.00004).to_formatted_string(), "$0.0000");
        assert_eq!(Cost::new(0.00006).to_formatted_string(), "$0.0001");
        assert_eq!(Cost::new(1.99999).to_formatted_string(), "$2.0000");
    }

    #[test]
    fn test_cost_display() {
        let cost = Cost::new(0.05);
        assert_eq!(format!("{}", cost), "$0.0500");
    }

    #[test]
    fn test_cost_conversions() {
        let cost = Cost::from(3.14);
        assert_eq!(cost.value(), 3.14);

        let value: f64 = cost.into();
        assert_eq!(value, 3.14);
    }

    #[test]
    fn test_breakdown_one_hour_of_everything() {
        // 1h CPU, 128 GB-s of memory, 1 GB egress, 1h of a volume GB
        let delta = UsageDelta {
            cpu_seconds: 3600.0,
            memory_mb_seconds: 131072.0,
            network_egress_mb: 1024.0,
            volume_gb_seconds: 3600.0,
        };

        let costs = CostBreakdown::from_delta(&delta, &METERED_PRICES);
        assert!((costs.cpu.value() - 0.027792).abs() < 1e-12);
        assert!((costs.memory.value() - 0.00049408).abs() < 1e-12);
        assert!((costs.volume.value() - 0.000216).abs() < 1e-12);
        assert!((costs.network.value() - 0.05).abs() < 1e-12);

        assert_eq!(costs.cpu.to_formatted_string(), "$0.0278");
        assert_eq!(costs.memory.to_formatted_string(), "$0.0005");
        assert_eq!(costs.volume.to_formatted_string(), "$0.0002");
        assert_eq!(costs.network.to_formatted_string(), "$0.0500");
        assert_eq!(costs.total.to_formatted_string(), "$0.0785");
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let deltas = [
            UsageDelta {
                cpu_seconds: 0.0,
                memory_mb_seconds: 0.0,
                network_egress_mb: 0.0,
                volume_gb_seconds: 0.0,
            },
            UsageDelta {
                cpu_seconds: 17.3,
                memory_mb_seconds: 9999.9,
                network_egress_mb: 0.001,
                volume_gb_seconds: 86400.0,
            },
            UsageDelta {
                cpu_seconds: 1e9,
                memory_mb_seconds: 1e12,
                network_egress_mb: 1e6,
                volume_gb_seconds: 1e9,
            },
        ];

        for delta in &deltas {
            let costs = CostBreakdown::from_delta(delta, &METERED_PRICES);
            let sum = costs.cpu.value()
                + costs.memory.value()
                + costs.volume.value()
                + costs.network.value();
            assert_eq!(costs.total.value(), sum);
        }
    }

    #[test]
    fn test_zero_delta_costs_nothing() {
        let delta = UsageDelta {
            cpu_seconds: 0.0,
            memory_mb_seconds: 0.0,
            network_egress_mb: 0.0,
            volume_gb_seconds: 0.0,
        };
        let costs = CostBreakdown::from_delta(&delta, &METERED_PRICES);
        assert_eq!(costs.total.value(), 0.0);
    }
}
