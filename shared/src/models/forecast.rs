//! Forecast day models
//!
//! One record per simulated day, as produced by the weather/agronomy
//! provider. The engine only reads these; nothing here is mutated after
//! deserialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{DateRange, SensorField, SensorStatus};

/// Weather and crop-growth measurements for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day_index: u32,
    pub date: NaiveDate,
    /// Growing-degree-days accrued on this day
    #[serde(default)]
    pub gdd: Decimal,
    /// Running total as reported by the provider
    #[serde(default)]
    pub accumulated_gdd: Decimal,
    #[serde(default)]
    pub crop_stage: String,
    /// Progress through the current stage (0-100)
    #[serde(default)]
    pub stage_progress: Decimal,
    #[serde(default)]
    pub days_to_next_stage: u32,
    pub t_max: Decimal,
    pub t_min: Decimal,
    /// Precipitation in mm
    #[serde(default)]
    pub precipitation: Decimal,
    /// Reference evapotranspiration in mm
    #[serde(default)]
    pub et0: Decimal,
    #[serde(default)]
    pub water_balance: WaterBalance,
    #[serde(default)]
    pub irrigation_needed: bool,
    #[serde(default)]
    pub risks: Vec<RiskEntry>,
    #[serde(default)]
    pub disease_risk: DiseaseRisk,
    // Optional sensor channels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpd: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_temperature: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiation: Option<Decimal>,
}

impl ForecastDay {
    fn reading(&self, field: SensorField) -> Option<Decimal> {
        match field {
            SensorField::Vpd => self.vpd,
            SensorField::Humidity => self.humidity,
            SensorField::WindSpeed => self.wind_speed,
            SensorField::SoilMoisture => self.soil_moisture,
            SensorField::SoilTemperature => self.soil_temperature,
            SensorField::Radiation => self.radiation,
        }
    }

    /// Sensor value for arithmetic, zero when the provider omitted it
    pub fn sensor(&self, field: SensorField) -> Decimal {
        self.reading(field).unwrap_or(Decimal::ZERO)
    }

    /// Sensor status for display, `N/A` when the provider omitted it
    pub fn sensor_status(&self, field: SensorField) -> SensorStatus {
        SensorStatus::from(self.reading(field))
    }

    /// One display line per sensor channel, `N/A` for omitted readings
    pub fn sensor_readout(&self) -> Vec<String> {
        SensorField::ALL
            .iter()
            .map(|field| field.describe(self.sensor_status(*field)))
            .collect()
    }

    /// Whether any risk on this day falls in the given category
    pub fn has_risk(&self, category: &RiskCategory) -> bool {
        self.risks.iter().any(|r| &r.risk_type == category)
    }
}

/// Daily soil water balance
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterBalance {
    /// Signed balance in mm; negative is a deficit
    pub balance_mm: Decimal,
}

/// Disease pressure estimate for a day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRisk {
    pub level: String,
    /// Score in 0-100
    pub risk_score: Decimal,
}

/// A flagged adverse condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskEntry {
    #[serde(rename = "type")]
    pub risk_type: RiskCategory,
    pub severity: String,
    pub desc: String,
}

/// Stress categories counted by the aggregator.
///
/// The provider's vocabulary is open; labels outside the four counted
/// categories are kept verbatim in `Other` and never counted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum RiskCategory {
    HeatStress,
    ColdStress,
    DroughtStress,
    Waterlogging,
    Other(String),
}

impl RiskCategory {
    pub fn label(&self) -> &str {
        match self {
            RiskCategory::HeatStress => "Heat Stress",
            RiskCategory::ColdStress => "Cold Stress",
            RiskCategory::DroughtStress => "Drought Stress",
            RiskCategory::Waterlogging => "Waterlogging",
            RiskCategory::Other(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, RiskCategory::Other(_))
    }
}

impl From<&str> for RiskCategory {
    fn from(label: &str) -> Self {
        match label.trim() {
            "Heat Stress" => RiskCategory::HeatStress,
            "Cold Stress" => RiskCategory::ColdStress,
            "Drought Stress" => RiskCategory::DroughtStress,
            "Waterlogging" => RiskCategory::Waterlogging,
            _ => RiskCategory::Other(label.to_string()),
        }
    }
}

impl From<String> for RiskCategory {
    fn from(label: String) -> Self {
        match RiskCategory::from(label.as_str()) {
            RiskCategory::Other(_) => RiskCategory::Other(label),
            known => known,
        }
    }
}

impl From<RiskCategory> for String {
    fn from(category: RiskCategory) -> Self {
        match category {
            RiskCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable forecast snapshot with a version used as cache identity
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    version: u64,
    days: Vec<ForecastDay>,
}

impl ForecastSeries {
    /// Create a series whose version is a fingerprint of its contents
    pub fn new(days: Vec<ForecastDay>) -> Self {
        let version = fingerprint(&days);
        Self { version, days }
    }

    /// Create a series with a provider-assigned version
    pub fn with_version(version: u64, days: Vec<ForecastDay>) -> Self {
        Self { version, days }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Leading `n` days, clamped to the series length
    pub fn prefix(&self, n: usize) -> &[ForecastDay] {
        &self.days[..n.min(self.days.len())]
    }

    pub fn date_range(&self) -> Option<DateRange> {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: first.date,
                end: last.date,
            }),
            _ => None,
        }
    }
}

impl From<Vec<ForecastDay>> for ForecastSeries {
    fn from(days: Vec<ForecastDay>) -> Self {
        Self::new(days)
    }
}

impl AsRef<[ForecastDay]> for ForecastSeries {
    fn as_ref(&self) -> &[ForecastDay] {
        &self.days
    }
}

fn fingerprint(days: &[ForecastDay]) -> u64 {
    let mut hasher = Sha256::new();
    // Writing into a hasher never fails for these plain data types
    let _ = serde_json::to_writer(&mut hasher, days);
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
