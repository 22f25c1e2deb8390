//! Harvest readiness estimation from accumulated GDD

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{
    classify_harvest_window, classify_rain_risk, DaysRemaining, HarvestEstimate,
};

use crate::config::DEFAULT_TARGET_GDD;

/// Maps accumulated GDD to a harvest-readiness estimate for one crop target
#[derive(Debug, Clone, Copy)]
pub struct HarvestEstimator {
    target_gdd: Decimal,
}

impl HarvestEstimator {
    pub fn new(target_gdd: Decimal) -> Self {
        Self { target_gdd }
    }

    pub fn target_gdd(&self) -> Decimal {
        self.target_gdd
    }

    /// Estimate readiness after `n` analyzed days
    pub fn estimate(
        &self,
        total_gdd: Decimal,
        n: usize,
        irrigation_days_needed: u32,
    ) -> HarvestEstimate {
        let readiness_percent = self.readiness_percent(total_gdd);

        HarvestEstimate {
            days_remaining: self.days_remaining(total_gdd, n),
            readiness_percent,
            harvest_window: classify_harvest_window(readiness_percent),
            rain_risk: classify_rain_risk(irrigation_days_needed, n),
        }
    }

    /// Share of the target reached, capped at 100
    pub fn readiness_percent(&self, total_gdd: Decimal) -> Decimal {
        let hundred = Decimal::ONE_HUNDRED;
        if self.target_gdd <= Decimal::ZERO {
            return hundred;
        }
        match total_gdd
            .checked_div(self.target_gdd)
            .and_then(|share| share.checked_mul(hundred))
        {
            Some(percent) => percent.min(hundred),
            // Only a vastly exceeded target overflows
            None if total_gdd.is_sign_positive() => hundred,
            None => Decimal::ZERO,
        }
    }

    /// Days at the current average pace until the target is reached.
    ///
    /// Returns [`DaysRemaining::UNKNOWN`] when no GDD has accrued. Computed
    /// estimates are capped at [`DaysRemaining::MAX_ESTIMATE`] so they never
    /// read as unknown.
    pub fn days_remaining(&self, total_gdd: Decimal, n: usize) -> DaysRemaining {
        let avg_daily_gdd = total_gdd / Decimal::from(n.max(1));
        if avg_daily_gdd <= Decimal::ZERO {
            return DaysRemaining::UNKNOWN;
        }

        // Overflow here means a hugely negative target, already passed
        let remaining_gdd = match self.target_gdd.checked_sub(total_gdd) {
            Some(remaining) if remaining > Decimal::ZERO => remaining,
            _ => return DaysRemaining(0),
        };

        remaining_gdd
            .checked_div(avg_daily_gdd)
            .and_then(|days| days.ceil().to_u32())
            .map_or(DaysRemaining::MAX_ESTIMATE, |days| {
                DaysRemaining(days).min(DaysRemaining::MAX_ESTIMATE)
            })
    }
}

impl Default for HarvestEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_GDD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{HarvestWindow, RainRisk};

    #[test]
    fn early_season_from_small_accumulation() {
        let estimator = HarvestEstimator::default();
        let estimate = estimator.estimate(Decimal::from(30), 3, 2);

        assert_eq!(estimate.days_remaining, DaysRemaining(137));
        assert_eq!(estimate.harvest_window, HarvestWindow::EarlySeason);
        assert_eq!(estimate.rain_risk, RainRisk::Moderate);
    }

    #[test]
    fn no_accumulation_is_unknown() {
        let estimator = HarvestEstimator::default();
        assert!(estimator.days_remaining(Decimal::ZERO, 5).is_unknown());
        assert!(estimator.days_remaining(Decimal::ZERO, 0).is_unknown());
    }

    #[test]
    fn readiness_is_capped() {
        let estimator = HarvestEstimator::new(Decimal::from(100));
        assert_eq!(estimator.readiness_percent(Decimal::from(250)), Decimal::from(100));
        assert_eq!(estimator.days_remaining(Decimal::from(250), 5), DaysRemaining(0));
        assert_eq!(
            estimator.estimate(Decimal::from(90), 9, 0).harvest_window,
            HarvestWindow::Near
        );
    }

    #[test]
    fn partial_day_rounds_up() {
        let estimator = HarvestEstimator::new(Decimal::from(100));
        // 70 remaining at 7.5/day
        assert_eq!(estimator.days_remaining(Decimal::from(30), 4), DaysRemaining(10));
    }

    #[test]
    fn long_estimates_never_collide_with_unknown() {
        let estimator = HarvestEstimator::new(Decimal::from(1400));

        // 1398.6 remaining at 1.4/day is exactly 999 days
        let estimate = estimator.days_remaining(Decimal::new(14, 1), 1);
        assert_eq!(estimate, DaysRemaining::MAX_ESTIMATE);
        assert!(!estimate.is_unknown());

        let tiny_pace = estimator.days_remaining(Decimal::new(1, 20), 1);
        assert_eq!(tiny_pace, DaysRemaining(998));
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let tiny_target = HarvestEstimator::new(Decimal::new(1, 28));
        assert_eq!(tiny_target.readiness_percent(Decimal::MAX), Decimal::ONE_HUNDRED);
        assert_eq!(tiny_target.readiness_percent(Decimal::MIN), Decimal::ZERO);

        let negative_target = HarvestEstimator::new(Decimal::MIN);
        assert_eq!(negative_target.days_remaining(Decimal::MAX, 1), DaysRemaining(0));
    }
}
