use serde::Serialize;

/// Figures derived from one pair of input records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedResults {
    /// Total spend of the batch.
    pub total_cost: f64,

    /// Batch cost spread over every finished unit.
    pub unit_cost: f64,

    /// Recommended sale price per unit.
    pub sales_price: f64,

    /// Sale price minus unit cost.
    pub unit_profit: f64,

    /// Whole units to sell to reach the monthly goal.
    pub units_needed_for_goal: u64,

    pub total_monthly_revenue: f64,

    pub total_monthly_profit: f64,
}
