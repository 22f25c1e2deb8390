//! Advisory text generation from cumulative counters
//!
//! Rules are evaluated in a fixed order and each fires independently, so the
//! output order is part of the contract.

use shared::RawCounters;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Generate advisories for `n` analyzed days
    pub fn generate(counters: &RawCounters, n: usize) -> Vec<String> {
        let mut recommendations = Vec::new();

        // Irrigation
        if counters.irrigation_days_needed > 0 {
            recommendations.push(format!(
                "Prepare irrigation: {} of {} days need supplemental water.",
                counters.irrigation_days_needed, n
            ));
        } else {
            recommendations
                .push("Rainfall is sufficient; no irrigation needed in this period.".to_string());
        }

        // Heat
        if counters.heat_stress_days > 0 {
            recommendations.push(format!(
                "Heat stress expected on {}. Irrigate early in the morning and shade sensitive plants.",
                days_phrase(counters.heat_stress_days)
            ));
        }

        // Drought
        if counters.drought_stress_days > 0 {
            recommendations.push(format!(
                "Drought stress flagged on {}. Conserve soil moisture with mulching.",
                days_phrase(counters.drought_stress_days)
            ));
        }

        // Overall
        if counters.total_risk_days > 3 {
            recommendations.push(format!(
                "{} stress days detected. Expect yield impact; monitor the crop closely.",
                counters.total_risk_days
            ));
        } else if counters.total_risk_days == 0 {
            recommendations.push(
                "Excellent growing conditions. No stress events detected in this period."
                    .to_string(),
            );
        }

        recommendations
    }
}

fn days_phrase(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}
