use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::interface::{coerce_numeric, CurrencyFormat};
use crate::models::{to_batch_size, CostInputs, PricingInputs};

/// Truffle pricing: work out unit cost, sale price, and how many truffles hit your monthly goal.
#[derive(Parser, Debug)]
#[command(name = "truffle_pricing")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Currency style for money figures.
    #[arg(short, long, value_enum, default_value_t = CurrencyFormat::Brl, global = true)]
    pub currency: CurrencyFormat,

    /// JSON file pre-filling the form.
    #[arg(short, long, global = true)]
    pub scenario: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the pricing form interactively and tweak it field by field.
    Interactive,

    /// Calculate once from command-line values.
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Also write inputs and results to this JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

/// Form values given as flags. Unset flags keep the scenario (or default) value.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Amount spent on chocolate.
    #[arg(long, value_parser = parse_number)]
    pub chocolate_spend: Option<f64>,

    /// Chocolate weight in grams.
    #[arg(long, value_parser = parse_number)]
    pub chocolate_weight: Option<f64>,

    /// Amount spent on filling.
    #[arg(long, value_parser = parse_number)]
    pub filling_spend: Option<f64>,

    /// Filling weight in grams.
    #[arg(long, value_parser = parse_number)]
    pub filling_weight: Option<f64>,

    /// Amount spent on packaging.
    #[arg(long, value_parser = parse_number)]
    pub packaging_spend: Option<f64>,

    /// Packaging units bought.
    #[arg(long, value_parser = parse_number)]
    pub packaging_units: Option<f64>,

    /// Truffles produced by the batch.
    #[arg(short, long, value_parser = parse_batch_size)]
    pub batch_size: Option<u32>,

    /// Desired margin over unit cost, in percent.
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_number)]
    pub margin: Option<f64>,

    /// Monthly net profit goal.
    #[arg(short, long, value_parser = parse_number)]
    pub goal: Option<f64>,
}

/// Flag values go through the same coercion as the interactive form:
/// malformed or non-finite text becomes 0 instead of a parse error.
fn parse_number(s: &str) -> Result<f64, std::convert::Infallible> {
    Ok(coerce_numeric(s))
}

fn parse_batch_size(s: &str) -> Result<u32, std::convert::Infallible> {
    Ok(to_batch_size(coerce_numeric(s)))
}

impl InputArgs {
    /// Overlay the given flags on top of `costs` and `pricing`.
    pub fn apply(&self, costs: CostInputs, pricing: PricingInputs) -> (CostInputs, PricingInputs) {
        let costs = CostInputs {
            chocolate_spend: self.chocolate_spend.unwrap_or(costs.chocolate_spend),
            chocolate_weight: self.chocolate_weight.unwrap_or(costs.chocolate_weight),
            filling_spend: self.filling_spend.unwrap_or(costs.filling_spend),
            filling_weight: self.filling_weight.unwrap_or(costs.filling_weight),
            packaging_spend: self.packaging_spend.unwrap_or(costs.packaging_spend),
            packaging_units: self.packaging_units.unwrap_or(costs.packaging_units),
            batch_size: self.batch_size.unwrap_or(costs.batch_size),
        };
        let pricing = PricingInputs {
            desired_margin_percent: self.margin.unwrap_or(pricing.desired_margin_percent),
            monthly_profit_goal: self.goal.unwrap_or(pricing.monthly_profit_goal),
        };
        (costs, pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::parse_from(["truffle_pricing"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.currency, CurrencyFormat::Brl);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
    }

    #[test]
    fn test_calc_flags() {
        let cli = Cli::parse_from([
            "truffle_pricing",
            "calc",
            "--chocolate-spend",
            "20",
            "--batch-size",
            "50",
            "--margin",
            "-10",
            "--currency",
            "usd",
        ]);
        assert_eq!(cli.currency, CurrencyFormat::Usd);

        let Some(Command::Calc { inputs, json }) = cli.command else {
            panic!("expected calc");
        };
        assert!(json.is_none());

        let (costs, pricing) = inputs.apply(CostInputs::default(), PricingInputs::default());
        assert_eq!(costs.chocolate_spend, 20.0);
        assert_eq!(costs.batch_size, 50);
        assert_eq!(pricing.desired_margin_percent, -10.0);
        assert_eq!(pricing.monthly_profit_goal, 0.0);
    }

    #[test]
    fn test_calc_flags_non_finite_become_zero() {
        let cli = Cli::parse_from([
            "truffle_pricing",
            "calc",
            "--chocolate-spend",
            "NaN",
            "--filling-spend",
            "1e400",
            "--batch-size",
            "50",
            "--goal",
            "inf",
        ]);
        let Some(Command::Calc { inputs, .. }) = cli.command else {
            panic!("expected calc");
        };

        let (costs, pricing) = inputs.apply(CostInputs::default(), PricingInputs::default());
        assert_eq!(costs.chocolate_spend, 0.0);
        assert_eq!(costs.filling_spend, 0.0);
        assert_eq!(pricing.monthly_profit_goal, 0.0);

        let results = crate::pricing::compute(&costs, &pricing);
        assert_eq!(results.total_cost, 0.0);
        assert_eq!(results.units_needed_for_goal, 0);
        assert_eq!(results.total_monthly_revenue, 0.0);
    }

    #[test]
    fn test_calc_flags_finite_spend_with_infinite_goal() {
        let cli = Cli::parse_from([
            "truffle_pricing",
            "calc",
            "--chocolate-spend",
            "10",
            "--batch-size",
            "1",
            "--goal",
            "inf",
        ]);
        let Some(Command::Calc { inputs, .. }) = cli.command else {
            panic!("expected calc");
        };

        let (costs, pricing) = inputs.apply(CostInputs::default(), PricingInputs::default());
        let results = crate::pricing::compute(&costs, &pricing);
        assert_eq!(results.unit_profit, 10.0);
        assert_eq!(results.units_needed_for_goal, 0);
        assert_eq!(results.total_monthly_profit, 0.0);
    }

    #[test]
    fn test_calc_flags_coerce_like_the_form() {
        let cli = Cli::parse_from([
            "truffle_pricing",
            "calc",
            "--packaging-spend",
            "5,50",
            "--batch-size",
            "NaN",
            "--margin",
            "abc",
        ]);
        let Some(Command::Calc { inputs, .. }) = cli.command else {
            panic!("expected calc");
        };

        assert_eq!(inputs.packaging_spend, Some(5.5));
        assert_eq!(inputs.batch_size, Some(0));
        assert_eq!(inputs.margin, Some(0.0));
    }

    #[test]
    fn test_unset_flags_keep_base_values() {
        let base_costs = CostInputs::default().with_filling_spend(10.0);
        let base_pricing = PricingInputs::default().with_monthly_profit_goal(300.0);

        let (costs, pricing) = InputArgs::default().apply(base_costs, base_pricing);
        assert_eq!(costs, base_costs);
        assert_eq!(pricing, base_pricing);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["truffle_pricing", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
