//! Cumulative aggregation over a prefix of the forecast

use rust_decimal::Decimal;
use shared::{ForecastDay, RawCounters, RiskCategory};

/// Scans a prefix of the day sequence and produces raw counters
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeAggregator;

impl CumulativeAggregator {
    /// Aggregate the first `n` days in a single pass.
    ///
    /// `n` beyond the series length scans the whole series; `analyzed_days`
    /// reports how many days were actually read.
    pub fn aggregate(days: &[ForecastDay], n: usize) -> RawCounters {
        let mut counters = RawCounters::default();

        for day in days.iter().take(n) {
            // Sums saturate rather than overflow on absurd provider values
            counters.total_gdd = counters.total_gdd.saturating_add(day.gdd);
            counters.total_precipitation =
                counters.total_precipitation.saturating_add(day.precipitation);

            // A category flagged twice on one day is still one stress day
            counters.heat_stress_days += u32::from(day.has_risk(&RiskCategory::HeatStress));
            counters.cold_stress_days += u32::from(day.has_risk(&RiskCategory::ColdStress));
            counters.drought_stress_days +=
                u32::from(day.has_risk(&RiskCategory::DroughtStress));
            counters.waterlog_days += u32::from(day.has_risk(&RiskCategory::Waterlogging));

            if day.irrigation_needed {
                counters.irrigation_days_needed += 1;
            }
            counters.analyzed_days += 1;
        }

        counters.total_risk_days = counters.heat_stress_days
            + counters.cold_stress_days
            + counters.drought_stress_days
            + counters.waterlog_days;
        counters.avg_daily_gdd =
            counters.total_gdd / Decimal::from(counters.analyzed_days.max(1));

        counters
    }
}
