use crate::models::{CostInputs, DerivedResults, PricingInputs};
use crate::pricing::constants::PERCENT_SCALE;

/// Cost of one unit: batch cost spread over the batch.
///
/// Returns 0 for an empty batch.
pub fn unit_cost(total_cost: f64, batch_size: u32) -> f64 {
    if batch_size > 0 {
        total_cost / f64::from(batch_size)
    } else {
        0.0
    }
}

/// Sale price after applying a percentage markup over `unit_cost`.
pub fn sales_price(unit_cost: f64, margin_percent: f64) -> f64 {
    unit_cost * (1.0 + margin_percent / PERCENT_SCALE)
}

/// Whole units needed so that `units * unit_profit >= goal`.
///
/// Partial units cannot be sold, so the quotient is rounded up. Returns 0
/// unless both the profit per unit and the goal are strictly positive.
pub fn units_needed_for_goal(unit_profit: f64, goal: f64) -> u64 {
    if unit_profit > 0.0 && goal > 0.0 {
        // saturating cast: an absurd goal caps at u64::MAX instead of wrapping
        (goal / unit_profit).ceil() as u64
    } else {
        0
    }
}

/// Derive every output figure from the two input records.
///
/// Pure and total: degenerate inputs (empty batch, zero or negative margin,
/// zero goal) produce zeros instead of infinities or errors.
pub fn compute(costs: &CostInputs, pricing: &PricingInputs) -> DerivedResults {
    let total_cost = costs.total_spend();
    let unit_cost = unit_cost(total_cost, costs.batch_size);

    let sales_price = sales_price(unit_cost, pricing.desired_margin_percent);
    let unit_profit = sales_price - unit_cost;

    let units = units_needed_for_goal(unit_profit, pricing.monthly_profit_goal);

    DerivedResults {
        total_cost,
        unit_cost,
        sales_price,
        unit_profit,
        units_needed_for_goal: units,
        total_monthly_revenue: units as f64 * sales_price,
        total_monthly_profit: units as f64 * unit_profit,
    }
}
