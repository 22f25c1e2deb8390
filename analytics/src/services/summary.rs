//! Summary query: the single entry point composing all analytics for a prefix

use rust_decimal::Decimal;
use shared::{validate_series, CumulativeSummary, ForecastDay};

use super::aggregator::CumulativeAggregator;
use super::harvest::HarvestEstimator;
use super::recommendation::RecommendationGenerator;
use super::yield_estimate::YieldClassifier;
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Composes aggregation, yield, harvest and recommendations for a prefix.
///
/// Holds only the crop target, so the same query can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryQuery {
    harvest: HarvestEstimator,
    validate_input: bool,
}

impl SummaryQuery {
    pub fn new(target_gdd: Decimal) -> Self {
        Self {
            harvest: HarvestEstimator::new(target_gdd),
            validate_input: false,
        }
    }

    /// Query bound to a crop's configured GDD target
    pub fn for_crop(config: &AnalyticsConfig, crop: &str) -> Self {
        Self::new(config.harvest.target_gdd(crop))
    }

    /// Validate the analyzed days before summarizing
    pub fn validated(mut self) -> Self {
        self.validate_input = true;
        self
    }

    pub fn target_gdd(&self) -> Decimal {
        self.harvest.target_gdd()
    }

    /// Summarize the first `n` days.
    ///
    /// Returns `None` for an empty series or `n < 1`. A prefix longer than
    /// the series is clamped to the full series.
    pub fn summarize(&self, days: &[ForecastDay], n: usize) -> Option<CumulativeSummary> {
        if days.is_empty() || n < 1 {
            return None;
        }

        let clamped = n.min(days.len());
        if clamped != n {
            tracing::debug!(requested = n, available = days.len(), "Clamping summary prefix");
        }

        let prefix = &days[..clamped];
        if self.validate_input {
            if let Err((day_index, message)) = validate_series(prefix) {
                tracing::warn!(day_index, reason = message, "Skipping summary of invalid forecast");
                return None;
            }
        }

        self.compose(prefix)
    }

    /// Summarize the first `n` days, rejecting out-of-range prefixes
    pub fn try_summarize(
        &self,
        days: &[ForecastDay],
        n: usize,
    ) -> AnalyticsResult<CumulativeSummary> {
        if days.is_empty() {
            return Err(AnalyticsError::EmptySeries);
        }
        if n < 1 || n > days.len() {
            return Err(AnalyticsError::PrefixOutOfRange {
                requested: n,
                available: days.len(),
            });
        }

        let prefix = &days[..n];
        if self.validate_input {
            validate_series(prefix).map_err(|(day_index, message)| {
                AnalyticsError::InvalidDay {
                    day_index,
                    message: message.to_string(),
                }
            })?;
        }

        self.compose(prefix).ok_or(AnalyticsError::EmptySeries)
    }

    /// Summaries for every prefix `1..=len`, the whole time-travel horizon.
    ///
    /// Entry `i` always belongs to prefix `i + 1`; a prefix rejected by
    /// validation keeps its slot as `None`.
    pub fn timeline(&self, days: &[ForecastDay]) -> Vec<Option<CumulativeSummary>> {
        (1..=days.len()).map(|n| self.summarize(days, n)).collect()
    }

    fn compose(&self, prefix: &[ForecastDay]) -> Option<CumulativeSummary> {
        let last = prefix.last()?;
        let n = prefix.len();

        let counters = CumulativeAggregator::aggregate(prefix, n);
        let yield_estimate = YieldClassifier::classify(counters.total_risk_days, n);
        let harvest =
            self.harvest
                .estimate(counters.total_gdd, n, counters.irrigation_days_needed);
        let recommendations = RecommendationGenerator::generate(&counters, n);

        Some(CumulativeSummary {
            counters,
            current_stage: last.crop_stage.clone(),
            stage_progress: last.stage_progress,
            yield_estimate,
            harvest,
            recommendations,
        })
    }
}
