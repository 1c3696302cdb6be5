use serde::Serialize;

use crate::error::{PricingError, Result};
use crate::models::{CostInputs, DerivedResults, PricingInputs};
use crate::pricing::constants::*;
use crate::pricing::engine::compute;

/// Margin range to evaluate, in percent.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_SWEEP_START,
            end: DEFAULT_SWEEP_END,
            step: DEFAULT_SWEEP_STEP,
        }
    }
}

impl SweepConfig {
    /// Reject bounds no margin can be compared against.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "sweep bounds must be finite numbers (start {}, end {})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Margins visited by the sweep, inclusive of `end` when a step lands on it.
    ///
    /// A non-positive step or an inverted range yields only `start`.
    pub fn margins(&self) -> Vec<f64> {
        if !self.step.is_finite() || self.step <= 0.0 || self.start > self.end {
            return vec![self.start];
        }

        // Multiply instead of accumulating so long sweeps don't drift.
        let tolerance = self.step * 1e-9;
        (0..MAX_SWEEP_STEPS)
            .map(|i| self.start + i as f64 * self.step)
            .take_while(|m| *m <= self.end + tolerance)
            .collect()
    }
}

/// Results for one margin of a sweep.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub margin_percent: f64,
    #[serde(flatten)]
    pub results: DerivedResults,
}

/// Evaluate the engine across a range of margins, holding costs and goal fixed.
pub fn margin_sweep(
    costs: &CostInputs,
    pricing: &PricingInputs,
    config: &SweepConfig,
) -> Vec<SweepRow> {
    config
        .margins()
        .into_iter()
        .map(|margin| {
            let pricing = pricing.with_desired_margin_percent(margin);
            SweepRow {
                margin_percent: margin,
                results: compute(costs, &pricing),
            }
        })
        .collect()
}

/// First row (lowest margin) whose goal is reachable selling at most `max_units`.
///
/// Rows that can't reach the goal at all (zero units needed) are skipped.
pub fn lowest_margin_within_capacity(rows: &[SweepRow], max_units: u64) -> Option<&SweepRow> {
    rows.iter().find(|row| {
        let units = row.results.units_needed_for_goal;
        units > 0 && units <= max_units
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_inclusive() {
        let config = SweepConfig {
            start: 0.0,
            end: 100.0,
            step: 25.0,
        };
        assert_eq!(config.margins(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_margins_fractional_step_reaches_end() {
        let config = SweepConfig {
            start: 0.0,
            end: 1.0,
            step: 0.1,
        };
        let margins = config.margins();
        assert_eq!(margins.len(), 11);
        assert!((margins[10] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_configs() {
        let zero_step = SweepConfig {
            start: 50.0,
            end: 100.0,
            step: 0.0,
        };
        assert_eq!(zero_step.margins(), vec![50.0]);

        let inverted = SweepConfig {
            start: 100.0,
            end: 50.0,
            step: 10.0,
        };
        assert_eq!(inverted.margins(), vec![100.0]);

        let nan_step = SweepConfig {
            start: 0.0,
            end: 10.0,
            step: f64::NAN,
        };
        assert_eq!(nan_step.margins(), vec![0.0]);
    }

    #[test]
    fn test_validate() {
        assert!(SweepConfig::default().validate().is_ok());

        let nan_start = SweepConfig {
            start: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(nan_start.validate(), Err(PricingError::InvalidInput(_))));

        let infinite_end = SweepConfig {
            end: f64::INFINITY,
            ..Default::default()
        };
        assert!(infinite_end.validate().is_err());
    }

    #[test]
    fn test_margins_capped() {
        let config = SweepConfig {
            start: 0.0,
            end: 1e9,
            step: 1.0,
        };
        assert_eq!(config.margins().len(), MAX_SWEEP_STEPS);
    }

    #[test]
    fn test_sweep_holds_costs_fixed() {
        let costs = CostInputs {
            chocolate_spend: 20.0,
            filling_spend: 10.0,
            packaging_spend: 5.0,
            batch_size: 50,
            ..Default::default()
        };
        let pricing = PricingInputs::default().with_monthly_profit_goal(500.0);

        let rows = margin_sweep(&costs, &pricing, &SweepConfig::default());
        assert_eq!(rows.len(), 21);
        assert!(rows.iter().all(|r| r.results.unit_cost == rows[0].results.unit_cost));
        assert_eq!(rows[0].results.units_needed_for_goal, 0);
        assert_eq!(rows[10].margin_percent, 100.0);
        assert_eq!(rows[10].results.units_needed_for_goal, 715);
    }

    #[test]
    fn test_lowest_margin_within_capacity() {
        let costs = CostInputs {
            chocolate_spend: 20.0,
            filling_spend: 10.0,
            packaging_spend: 5.0,
            batch_size: 50,
            ..Default::default()
        };
        let pricing = PricingInputs::default().with_monthly_profit_goal(500.0);
        let rows = margin_sweep(&costs, &pricing, &SweepConfig::default());

        // 100% needs 715 units, 90% needs ceil(500 / 0.63) = 794
        let row = lowest_margin_within_capacity(&rows, 750).unwrap();
        assert_eq!(row.margin_percent, 100.0);

        assert!(lowest_margin_within_capacity(&rows, 10).is_none());
    }
}
