use serde::{Deserialize, Serialize};

use crate::pricing::constants::DEFAULT_MARGIN_PERCENT;

/// Raw costs of one production batch.
///
/// Weights and packaging units are captured alongside the spends but no
/// derived figure depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostInputs {
    pub chocolate_spend: f64,
    pub chocolate_weight: f64,
    pub filling_spend: f64,
    pub filling_weight: f64,
    pub packaging_spend: f64,
    pub packaging_units: f64,
    /// Finished units produced by the batch.
    pub batch_size: u32,
}

impl CostInputs {
    pub fn with_chocolate_spend(self, chocolate_spend: f64) -> Self {
        Self {
            chocolate_spend,
            ..self
        }
    }

    pub fn with_chocolate_weight(self, chocolate_weight: f64) -> Self {
        Self {
            chocolate_weight,
            ..self
        }
    }

    pub fn with_filling_spend(self, filling_spend: f64) -> Self {
        Self {
            filling_spend,
            ..self
        }
    }

    pub fn with_filling_weight(self, filling_weight: f64) -> Self {
        Self {
            filling_weight,
            ..self
        }
    }

    pub fn with_packaging_spend(self, packaging_spend: f64) -> Self {
        Self {
            packaging_spend,
            ..self
        }
    }

    pub fn with_packaging_units(self, packaging_units: f64) -> Self {
        Self {
            packaging_units,
            ..self
        }
    }

    pub fn with_batch_size(self, batch_size: u32) -> Self {
        Self { batch_size, ..self }
    }

    /// Sum of the three spend fields.
    #[inline]
    pub fn total_spend(&self) -> f64 {
        self.chocolate_spend + self.filling_spend + self.packaging_spend
    }
}

/// Margin and monthly goal chosen by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingInputs {
    /// Markup over unit cost in percent (100 doubles the cost).
    pub desired_margin_percent: f64,

    /// Net profit wanted for the month.
    pub monthly_profit_goal: f64,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            desired_margin_percent: DEFAULT_MARGIN_PERCENT,
            monthly_profit_goal: 0.0,
        }
    }
}

impl PricingInputs {
    pub fn with_desired_margin_percent(self, desired_margin_percent: f64) -> Self {
        Self {
            desired_margin_percent,
            ..self
        }
    }

    pub fn with_monthly_profit_goal(self, monthly_profit_goal: f64) -> Self {
        Self {
            monthly_profit_goal,
            ..self
        }
    }
}
