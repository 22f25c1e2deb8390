//! Cumulative summary models
//!
//! Derived, ephemeral results. A summary is rebuilt for every prefix query
//! and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw cumulative counters over a prefix of the forecast
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawCounters {
    pub total_gdd: Decimal,
    pub avg_daily_gdd: Decimal,
    pub total_precipitation: Decimal,
    pub heat_stress_days: u32,
    pub cold_stress_days: u32,
    pub drought_stress_days: u32,
    pub waterlog_days: u32,
    pub irrigation_days_needed: u32,
    /// Sum of the four stress counters
    pub total_risk_days: u32,
    pub analyzed_days: u32,
}

/// Full summary for one prefix of the forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeSummary {
    #[serde(flatten)]
    pub counters: RawCounters,
    /// Stage reported on the last analyzed day
    pub current_stage: String,
    pub stage_progress: Decimal,
    pub yield_estimate: YieldEstimate,
    pub harvest: HarvestEstimate,
    pub recommendations: Vec<String>,
}

/// Expected yield bucket with its nominal percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YieldEstimate {
    pub classification: YieldClassification,
    pub percentage: u8,
}

/// Yield classification by share of stress days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YieldClassification {
    /// Stress ratio below 0.10
    Excellent,
    /// Stress ratio below 0.20
    Good,
    /// Stress ratio below 0.35
    Moderate,
    /// Stress ratio 0.35 and above
    AtRisk,
}

impl YieldClassification {
    /// Nominal expected yield percentage for the bucket
    pub fn percentage(&self) -> u8 {
        match self {
            YieldClassification::Excellent => 95,
            YieldClassification::Good => 85,
            YieldClassification::Moderate => 70,
            YieldClassification::AtRisk => 55,
        }
    }
}

impl std::fmt::Display for YieldClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YieldClassification::Excellent => write!(f, "Excellent"),
            YieldClassification::Good => write!(f, "Good"),
            YieldClassification::Moderate => write!(f, "Moderate"),
            YieldClassification::AtRisk => write!(f, "At Risk"),
        }
    }
}

/// Classify yield from the stress ratio. Upper bounds are exclusive.
pub fn classify_stress_ratio(stress_ratio: Decimal) -> YieldEstimate {
    let classification = if stress_ratio < Decimal::new(10, 2) {
        YieldClassification::Excellent
    } else if stress_ratio < Decimal::new(20, 2) {
        YieldClassification::Good
    } else if stress_ratio < Decimal::new(35, 2) {
        YieldClassification::Moderate
    } else {
        YieldClassification::AtRisk
    };

    YieldEstimate {
        classification,
        percentage: classification.percentage(),
    }
}

/// Harvest readiness estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HarvestEstimate {
    pub days_remaining: DaysRemaining,
    /// Share of the target GDD reached, capped at 100
    pub readiness_percent: Decimal,
    pub harvest_window: HarvestWindow,
    pub rain_risk: RainRisk,
}

/// Days until the GDD target is reached.
///
/// Serializes as a bare integer; `999` means the estimate is unknown and
/// must not be shown as a day count. Computed estimates stop at `998`, so
/// a real countdown never reads as unknown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DaysRemaining(pub u32);

impl DaysRemaining {
    pub const UNKNOWN: DaysRemaining = DaysRemaining(999);
    /// Longest countdown an estimate reports
    pub const MAX_ESTIMATE: DaysRemaining = DaysRemaining(998);

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Day count, or `None` when unknown
    pub fn days(&self) -> Option<u32> {
        if self.is_unknown() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl std::fmt::Display for DaysRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.days() {
            Some(days) => write!(f, "{}", days),
            None => write!(f, "Unknown"),
        }
    }
}

/// Coarse position in the season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HarvestWindow {
    #[serde(rename = "Near")]
    Near,
    #[serde(rename = "Mid-Season")]
    MidSeason,
    #[serde(rename = "Early Season")]
    EarlySeason,
}

impl std::fmt::Display for HarvestWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarvestWindow::Near => write!(f, "Near"),
            HarvestWindow::MidSeason => write!(f, "Mid-Season"),
            HarvestWindow::EarlySeason => write!(f, "Early Season"),
        }
    }
}

/// Classify the harvest window from readiness percent
pub fn classify_harvest_window(readiness_percent: Decimal) -> HarvestWindow {
    if readiness_percent > Decimal::from(80) {
        HarvestWindow::Near
    } else if readiness_percent > Decimal::from(50) {
        HarvestWindow::MidSeason
    } else {
        HarvestWindow::EarlySeason
    }
}

/// Heuristic rain exposure during harvest. Not a probability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RainRisk {
    Low,
    Moderate,
}

impl std::fmt::Display for RainRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainRisk::Low => write!(f, "Low"),
            RainRisk::Moderate => write!(f, "Moderate"),
        }
    }
}

/// Rain risk is low while fewer than half the analyzed days need irrigation
pub fn classify_rain_risk(irrigation_days_needed: u32, analyzed_days: usize) -> RainRisk {
    // irrigation < n / 2, kept in integers so odd n stays exact
    if (irrigation_days_needed as usize) * 2 < analyzed_days {
        RainRisk::Low
    } else {
        RainRisk::Moderate
    }
}
