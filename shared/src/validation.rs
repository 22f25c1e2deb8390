//! Validation utilities for forecast input
//!
//! The engine itself never rejects input; these checks are for callers
//! that want to refuse malformed provider data before summarizing.

use rust_decimal::Decimal;

use crate::models::ForecastDay;

// ============================================================================
// Day Validations
// ============================================================================

/// Validate a percentage-style field is within 0-100
pub fn validate_percent(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a single forecast day
pub fn validate_forecast_day(day: &ForecastDay) -> Result<(), &'static str> {
    if day.gdd < Decimal::ZERO {
        return Err("Daily GDD cannot be negative");
    }
    if day.accumulated_gdd < Decimal::ZERO {
        return Err("Accumulated GDD cannot be negative");
    }
    if day.precipitation < Decimal::ZERO {
        return Err("Precipitation cannot be negative");
    }
    if day.et0 < Decimal::ZERO {
        return Err("ET0 cannot be negative");
    }
    validate_percent(day.stage_progress).map_err(|_| "Stage progress must be between 0 and 100")?;
    validate_percent(day.disease_risk.risk_score)
        .map_err(|_| "Disease risk score must be between 0 and 100")?;
    Ok(())
}

// ============================================================================
// Series Validations
// ============================================================================

/// Validate every day and the ordering of day indices.
///
/// On failure returns the offending day index with the reason.
pub fn validate_series(days: &[ForecastDay]) -> Result<(), (u32, &'static str)> {
    let mut previous: Option<u32> = None;

    for day in days {
        validate_forecast_day(day).map_err(|msg| (day.day_index, msg))?;

        if let Some(prev) = previous {
            if day.day_index <= prev {
                return Err((day.day_index, "Day indices must be strictly increasing"));
            }
        }
        previous = Some(day.day_index);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiseaseRisk, WaterBalance};
    use chrono::NaiveDate;

    fn day(index: u32) -> ForecastDay {
        ForecastDay {
            day_index: index,
            date: NaiveDate::from_ymd_opt(2026, 6, 1 + index).unwrap(),
            gdd: Decimal::from(10),
            accumulated_gdd: Decimal::from(10 * (index + 1)),
            crop_stage: "Vegetative".to_string(),
            stage_progress: Decimal::from(40),
            days_to_next_stage: 12,
            t_max: Decimal::from(31),
            t_min: Decimal::from(21),
            precipitation: Decimal::ZERO,
            et0: Decimal::new(45, 1),
            water_balance: WaterBalance::default(),
            irrigation_needed: false,
            risks: Vec::new(),
            disease_risk: DiseaseRisk::default(),
            vpd: None,
            humidity: None,
            wind_speed: None,
            soil_moisture: None,
            soil_temperature: None,
            radiation: None,
        }
    }

    #[test]
    fn valid_series_passes() {
        let days = vec![day(0), day(1), day(2)];
        assert!(validate_series(&days).is_ok());
    }

    #[test]
    fn stage_progress_out_of_range() {
        let mut bad = day(0);
        bad.stage_progress = Decimal::from(101);
        assert_eq!(
            validate_forecast_day(&bad),
            Err("Stage progress must be between 0 and 100")
        );
    }

    #[test]
    fn negative_precipitation_rejected() {
        let mut bad = day(0);
        bad.precipitation = Decimal::from(-1);
        assert!(validate_forecast_day(&bad).is_err());
    }

    #[test]
    fn out_of_order_days_rejected() {
        let days = vec![day(0), day(2), day(1)];
        assert_eq!(
            validate_series(&days),
            Err((1, "Day indices must be strictly increasing"))
        );
    }
}
