//! Farm Analytics Engine
//!
//! Cumulative agronomic analytics over a forecast horizon: accumulated GDD,
//! precipitation and stress-day counts, yield and harvest-readiness
//! classification, and advisory text, recomputable for any prefix of the
//! forecast.

pub mod config;
pub mod error;
pub mod services;

pub use config::{AnalyticsConfig, CacheConfig, HarvestConfig};
pub use error::{AnalyticsError, AnalyticsResult};
pub use services::{
    CachedSummaryQuery, CumulativeAggregator, HarvestEstimator, RecommendationGenerator,
    SummaryQuery, YieldClassifier,
};

use shared::{CumulativeSummary, ForecastDay};

/// Summarize the first `n` days with the default crop target
pub fn summarize(days: &[ForecastDay], n: usize) -> Option<CumulativeSummary> {
    SummaryQuery::default().summarize(days, n)
}
