use std::fmt;

use crate::models::{CostInputs, PricingInputs};

/// How a field's value is shown next to its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUnit {
    Currency,
    Grams,
    Percent,
    Count,
}

/// One editable entry of the pricing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    ChocolateSpend,
    ChocolateWeight,
    FillingSpend,
    FillingWeight,
    PackagingSpend,
    PackagingUnits,
    BatchSize,
    DesiredMargin,
    MonthlyGoal,
}

impl InputField {
    /// Form order.
    pub const ALL: [InputField; 9] = [
        InputField::ChocolateSpend,
        InputField::ChocolateWeight,
        InputField::FillingSpend,
        InputField::FillingWeight,
        InputField::PackagingSpend,
        InputField::PackagingUnits,
        InputField::BatchSize,
        InputField::DesiredMargin,
        InputField::MonthlyGoal,
    ];

    /// Short name used when picking a field by typing.
    pub fn key(self) -> &'static str {
        match self {
            InputField::ChocolateSpend => "chocolate-spend",
            InputField::ChocolateWeight => "chocolate-weight",
            InputField::FillingSpend => "filling-spend",
            InputField::FillingWeight => "filling-weight",
            InputField::PackagingSpend => "packaging-spend",
            InputField::PackagingUnits => "packaging-units",
            InputField::BatchSize => "batch-size",
            InputField::DesiredMargin => "margin",
            InputField::MonthlyGoal => "goal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::ChocolateSpend => "Chocolate: amount spent",
            InputField::ChocolateWeight => "Chocolate: weight",
            InputField::FillingSpend => "Filling: amount spent",
            InputField::FillingWeight => "Filling: weight",
            InputField::PackagingSpend => "Packaging: amount spent",
            InputField::PackagingUnits => "Packaging: units bought",
            InputField::BatchSize => "Truffles produced in the batch",
            InputField::DesiredMargin => "Desired profit margin",
            InputField::MonthlyGoal => "How much do you want to earn (net) per month?",
        }
    }

    pub fn unit(self) -> FieldUnit {
        match self {
            InputField::ChocolateSpend
            | InputField::FillingSpend
            | InputField::PackagingSpend
            | InputField::MonthlyGoal => FieldUnit::Currency,
            InputField::ChocolateWeight | InputField::FillingWeight => FieldUnit::Grams,
            InputField::DesiredMargin => FieldUnit::Percent,
            InputField::PackagingUnits | InputField::BatchSize => FieldUnit::Count,
        }
    }

    /// Whether the field lives in [`PricingInputs`] rather than [`CostInputs`].
    pub fn is_pricing(self) -> bool {
        matches!(self, InputField::DesiredMargin | InputField::MonthlyGoal)
    }

    /// Current value of the field.
    pub fn value(self, costs: &CostInputs, pricing: &PricingInputs) -> f64 {
        match self {
            InputField::ChocolateSpend => costs.chocolate_spend,
            InputField::ChocolateWeight => costs.chocolate_weight,
            InputField::FillingSpend => costs.filling_spend,
            InputField::FillingWeight => costs.filling_weight,
            InputField::PackagingSpend => costs.packaging_spend,
            InputField::PackagingUnits => costs.packaging_units,
            InputField::BatchSize => f64::from(costs.batch_size),
            InputField::DesiredMargin => pricing.desired_margin_percent,
            InputField::MonthlyGoal => pricing.monthly_profit_goal,
        }
    }

    /// Write `value` into a copy of the record that owns this field.
    pub fn apply(
        self,
        costs: CostInputs,
        pricing: PricingInputs,
        value: f64,
    ) -> (CostInputs, PricingInputs) {
        match self {
            InputField::ChocolateSpend => (costs.with_chocolate_spend(value), pricing),
            InputField::ChocolateWeight => (costs.with_chocolate_weight(value), pricing),
            InputField::FillingSpend => (costs.with_filling_spend(value), pricing),
            InputField::FillingWeight => (costs.with_filling_weight(value), pricing),
            InputField::PackagingSpend => (costs.with_packaging_spend(value), pricing),
            InputField::PackagingUnits => (costs.with_packaging_units(value), pricing),
            InputField::BatchSize => (costs.with_batch_size(to_batch_size(value)), pricing),
            InputField::DesiredMargin => (costs, pricing.with_desired_margin_percent(value)),
            InputField::MonthlyGoal => (costs, pricing.with_monthly_profit_goal(value)),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole units from a coerced number: truncated, negatives and non-finite become 0.
pub fn to_batch_size(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    value.trunc() as u32
}
