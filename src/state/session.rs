use tracing::debug;

use crate::interface::coerce_numeric;
use crate::models::{CostInputs, DerivedResults, InputField, PricingInputs};
use crate::pricing::compute;

/// Holds the form's current inputs and the figures derived from them.
///
/// Every edit swaps in a new copy of the affected record and recomputes.
#[derive(Debug, Clone)]
pub struct PricingSession {
    costs: CostInputs,
    pricing: PricingInputs,
    results: DerivedResults,
}

impl Default for PricingSession {
    fn default() -> Self {
        Self::new(CostInputs::default(), PricingInputs::default())
    }
}

impl PricingSession {
    /// Start a session from existing inputs.
    pub fn new(costs: CostInputs, pricing: PricingInputs) -> Self {
        let results = compute(&costs, &pricing);
        Self {
            costs,
            pricing,
            results,
        }
    }

    pub fn costs(&self) -> &CostInputs {
        &self.costs
    }

    pub fn pricing(&self) -> &PricingInputs {
        &self.pricing
    }

    /// Figures for the current inputs.
    pub fn results(&self) -> &DerivedResults {
        &self.results
    }

    /// Current value of a single field.
    pub fn value(&self, field: InputField) -> f64 {
        field.value(&self.costs, &self.pricing)
    }

    /// Set one field and recompute.
    pub fn set(&mut self, field: InputField, value: f64) -> &DerivedResults {
        let (costs, pricing) = field.apply(self.costs, self.pricing, value);
        self.costs = costs;
        self.pricing = pricing;
        self.results = compute(&self.costs, &self.pricing);

        debug!(
            field = field.key(),
            record = if field.is_pricing() { "pricing" } else { "costs" },
            value,
            unit_cost = self.results.unit_cost,
            units_needed = self.results.units_needed_for_goal,
            "recomputed after edit"
        );
        &self.results
    }

    /// Set one field from raw text; malformed text counts as 0.
    pub fn set_text(&mut self, field: InputField, text: &str) -> &DerivedResults {
        self.set(field, coerce_numeric(text))
    }

    /// Back to the initial form: zeros everywhere, margin at its default.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("session reset");
    }
}
