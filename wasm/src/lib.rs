//! WebAssembly module for the farm dashboard
//!
//! Provides client-side computation for:
//! - Prefix summaries for the forecast time-travel slider
//! - Yield classification
//! - Harvest countdown
//! - Sensor display text and per-day sensor readouts

use farm_analytics::{AnalyticsResult, HarvestEstimator, SummaryQuery, YieldClassifier};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn parse_days(days_json: &str) -> AnalyticsResult<Vec<ForecastDay>> {
    Ok(serde_json::from_str(days_json)?)
}

/// Summary JSON for the first `day_count` days, or `null` when there is none
pub fn summarize_json(days_json: &str, day_count: usize) -> AnalyticsResult<String> {
    let days = parse_days(days_json)?;
    let summary = SummaryQuery::default().summarize(&days, day_count);
    Ok(serde_json::to_string(&summary)?)
}

fn to_js_error(err: farm_analytics::AnalyticsError) -> JsValue {
    let message = format!("{}: {}", err.code(), err);
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Summarize a forecast prefix
#[wasm_bindgen]
pub fn summarize_forecast(days_json: &str, day_count: usize) -> Result<String, JsValue> {
    summarize_json(days_json, day_count).map_err(to_js_error)
}

/// Summaries for every prefix, one JSON string (or `null`) per slider position
#[wasm_bindgen]
pub fn summarize_timeline(days_json: &str) -> Result<js_sys::Array, JsValue> {
    let days = parse_days(days_json).map_err(to_js_error)?;
    let timeline = js_sys::Array::new();

    for summary in SummaryQuery::default().timeline(&days) {
        let json = serde_json::to_string(&summary)
            .map_err(|e| to_js_error(e.into()))?;
        timeline.push(&JsValue::from_str(&json));
    }

    Ok(timeline)
}

/// Classify expected yield from stress days over analyzed days
#[wasm_bindgen]
pub fn classify_yield_by_stress(total_risk_days: u32, day_count: usize) -> String {
    YieldClassifier::classify(total_risk_days, day_count)
        .classification
        .to_string()
}

/// Days until harvest at the current pace; 999 when unknown
#[wasm_bindgen]
pub fn estimate_days_to_harvest(total_gdd: f64, day_count: usize, target_gdd: f64) -> u32 {
    let total = Decimal::try_from(total_gdd).unwrap_or(Decimal::ZERO);
    let target = Decimal::try_from(target_gdd).unwrap_or(Decimal::ZERO);
    HarvestEstimator::new(target)
        .days_remaining(total, day_count)
        .0
}

/// Harvest readiness percentage (0-100)
#[wasm_bindgen]
pub fn harvest_readiness_percent(total_gdd: f64, target_gdd: f64) -> f64 {
    let total = Decimal::try_from(total_gdd).unwrap_or(Decimal::ZERO);
    let target = Decimal::try_from(target_gdd).unwrap_or(Decimal::ZERO);
    HarvestEstimator::new(target)
        .readiness_percent(total)
        .to_f64()
        .unwrap_or(0.0)
}

/// Display text for an optional sensor reading
#[wasm_bindgen]
pub fn sensor_display(value: Option<f64>) -> String {
    let reading = value.and_then(|v| Decimal::try_from(v).ok());
    SensorStatus::from(reading).to_string()
}

/// Labelled sensor lines for one forecast day, as a JSON array
pub fn sensor_readout_json(day_json: &str) -> AnalyticsResult<String> {
    let day: ForecastDay = serde_json::from_str(day_json)?;
    Ok(serde_json::to_string(&day.sensor_readout())?)
}

/// Sensor panel text for one forecast day
#[wasm_bindgen]
pub fn sensor_readout(day_json: &str) -> Result<String, JsValue> {
    sensor_readout_json(day_json).map_err(to_js_error)
}
