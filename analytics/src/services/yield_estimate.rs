//! Yield classification from the share of stress days

use rust_decimal::Decimal;
use shared::{classify_stress_ratio, YieldEstimate};

#[derive(Debug, Clone, Copy, Default)]
pub struct YieldClassifier;

impl YieldClassifier {
    /// Classify expected yield for `total_risk_days` over `n` analyzed days
    pub fn classify(total_risk_days: u32, n: usize) -> YieldEstimate {
        classify_stress_ratio(Self::stress_ratio(total_risk_days, n))
    }

    /// Stress days per analyzed day; may exceed 1 when days carry several risks
    pub fn stress_ratio(total_risk_days: u32, n: usize) -> Decimal {
        Decimal::from(total_risk_days) / Decimal::from(n.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::YieldClassification;

    #[test]
    fn one_in_ten_is_good_not_excellent() {
        assert_eq!(
            YieldClassifier::classify(1, 10).classification,
            YieldClassification::Good
        );
        assert_eq!(
            YieldClassifier::classify(0, 10).classification,
            YieldClassification::Excellent
        );
    }

    #[test]
    fn zero_days_is_guarded() {
        assert_eq!(YieldClassifier::stress_ratio(0, 0), Decimal::ZERO);
        assert_eq!(
            YieldClassifier::classify(2, 0).classification,
            YieldClassification::AtRisk
        );
    }

    #[test]
    fn one_third_is_moderate() {
        // 1/3 < 0.35
        let estimate = YieldClassifier::classify(1, 3);
        assert_eq!(estimate.classification, YieldClassification::Moderate);
        assert_eq!(estimate.percentage, 70);
    }
}
