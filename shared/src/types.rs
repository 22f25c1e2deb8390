//! Common types used across the engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display text for a reading the provider did not supply
pub const NOT_AVAILABLE: &str = "N/A";

/// Optional sensor channels carried on a forecast day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SensorField {
    Vpd,
    Humidity,
    WindSpeed,
    SoilMoisture,
    SoilTemperature,
    Radiation,
}

impl SensorField {
    pub const ALL: [SensorField; 6] = [
        SensorField::Vpd,
        SensorField::Humidity,
        SensorField::WindSpeed,
        SensorField::SoilMoisture,
        SensorField::SoilTemperature,
        SensorField::Radiation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorField::Vpd => "VPD",
            SensorField::Humidity => "Humidity",
            SensorField::WindSpeed => "Wind Speed",
            SensorField::SoilMoisture => "Soil Moisture",
            SensorField::SoilTemperature => "Soil Temperature",
            SensorField::Radiation => "Radiation",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorField::Vpd => "kPa",
            SensorField::Humidity => "%",
            SensorField::WindSpeed => "m/s",
            SensorField::SoilMoisture => "m³/m³",
            SensorField::SoilTemperature => "°C",
            SensorField::Radiation => "W/m²",
        }
    }

    /// Labelled reading with its unit, e.g. `Humidity: 78 %`
    pub fn describe(&self, status: SensorStatus) -> String {
        match status {
            SensorStatus::Available(_) => format!("{}: {} {}", self.label(), status, self.unit()),
            SensorStatus::NotAvailable => format!("{}: {}", self.label(), status),
        }
    }
}

/// Display-facing status of an optional sensor reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SensorStatus {
    Available(Decimal),
    NotAvailable,
}

impl SensorStatus {
    /// Value for arithmetic; absent readings count as zero
    pub fn value_or_zero(&self) -> Decimal {
        match self {
            SensorStatus::Available(value) => *value,
            SensorStatus::NotAvailable => Decimal::ZERO,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SensorStatus::Available(_))
    }
}

impl From<Option<Decimal>> for SensorStatus {
    fn from(reading: Option<Decimal>) -> Self {
        match reading {
            Some(value) => SensorStatus::Available(value),
            None => SensorStatus::NotAvailable,
        }
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorStatus::Available(value) => write!(f, "{}", value.normalize()),
            SensorStatus::NotAvailable => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

/// Date range covered by a forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reading_displays_not_available() {
        let status = SensorStatus::from(None);
        assert_eq!(status.to_string(), "N/A");
        assert_eq!(status.value_or_zero(), Decimal::ZERO);
        assert!(!status.is_available());
    }

    #[test]
    fn describe_adds_label_and_unit() {
        let reading = SensorStatus::from(Some(Decimal::new(12, 1)));
        assert_eq!(SensorField::Vpd.describe(reading), "VPD: 1.2 kPa");
        assert_eq!(
            SensorField::WindSpeed.describe(SensorStatus::NotAvailable),
            "Wind Speed: N/A"
        );
    }

    #[test]
    fn present_reading_displays_value() {
        let status = SensorStatus::from(Some(Decimal::new(125, 2)));
        assert_eq!(status.to_string(), "1.25");
        assert_eq!(status.value_or_zero(), Decimal::new(125, 2));
    }
}
