//! Analytics services for the farm dashboard

pub mod aggregator;
pub mod cache;
pub mod harvest;
pub mod recommendation;
pub mod summary;
pub mod yield_estimate;

pub use aggregator::CumulativeAggregator;
pub use cache::CachedSummaryQuery;
pub use harvest::HarvestEstimator;
pub use recommendation::RecommendationGenerator;
pub use summary::SummaryQuery;
pub use yield_estimate::YieldClassifier;
