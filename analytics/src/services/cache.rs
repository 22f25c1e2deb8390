//! Summary cache: Moka in-memory memoization of prefix summaries.
//! Keyed by (series version, clamped prefix length), so a new forecast
//! snapshot never reads another snapshot's summaries.

use moka::sync::Cache;
use shared::{CumulativeSummary, ForecastSeries};

use super::summary::SummaryQuery;
use crate::config::{AnalyticsConfig, DEFAULT_CACHE_CAPACITY};

type CacheKey = (u64, usize);

/// Memoizing wrapper around [`SummaryQuery`]
pub struct CachedSummaryQuery {
    query: SummaryQuery,
    inner: Cache<CacheKey, CumulativeSummary>,
}

impl CachedSummaryQuery {
    /// Create a cached query with the given capacity
    pub fn new(query: SummaryQuery, capacity: u64) -> Self {
        Self {
            query,
            inner: Cache::new(capacity),
        }
    }

    /// Cached query for a crop, sized from configuration
    pub fn from_config(config: &AnalyticsConfig, crop: &str) -> Self {
        Self::new(SummaryQuery::for_crop(config, crop), config.cache.capacity)
    }

    pub fn query(&self) -> &SummaryQuery {
        &self.query
    }

    /// Summarize the first `n` days of the series, reusing earlier results
    pub fn summarize(&self, series: &ForecastSeries, n: usize) -> Option<CumulativeSummary> {
        if series.is_empty() || n < 1 {
            return None;
        }

        let key = (series.version(), n.min(series.len()));
        if let Some(summary) = self.inner.get(&key) {
            tracing::debug!(version = key.0, prefix = key.1, "Summary cache hit");
            return Some(summary);
        }

        tracing::debug!(version = key.0, prefix = key.1, "Summary cache miss");
        let summary = self.query.summarize(series.days(), n)?;
        self.inner.insert(key, summary.clone());
        Some(summary)
    }

    /// Whether a summary for this prefix is cached
    pub fn contains(&self, series: &ForecastSeries, n: usize) -> bool {
        self.inner
            .contains_key(&(series.version(), n.min(series.len())))
    }

    /// Drop every cached prefix of a series
    pub fn invalidate_series(&self, series: &ForecastSeries) {
        for n in 1..=series.len() {
            self.inner.invalidate(&(series.version(), n));
        }
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Returns the number of entries in the cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for CachedSummaryQuery {
    fn default() -> Self {
        Self::new(SummaryQuery::default(), DEFAULT_CACHE_CAPACITY)
    }
}
