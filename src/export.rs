use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{CostInputs, DerivedResults, PricingInputs};
use crate::pricing::SweepRow;

#[derive(Serialize)]
struct ResultsReport<'a> {
    costs: &'a CostInputs,
    pricing: &'a PricingInputs,
    results: &'a DerivedResults,
}

/// Write inputs and derived figures to a JSON file.
pub fn write_results_json(
    costs: &CostInputs,
    pricing: &PricingInputs,
    results: &DerivedResults,
    path: &Path,
) -> Result<()> {
    let report = ResultsReport {
        costs,
        pricing,
        results,
    };
    fs::write(path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

/// Write every sweep row to a JSON array.
pub fn write_sweep_json(rows: &[SweepRow], path: &Path) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(rows)?)?;
    Ok(())
}

/// Write a margin sweep to a CSV file, one row per margin.
pub fn write_sweep_csv(rows: &[SweepRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "margin_percent",
        "total_cost",
        "unit_cost",
        "sales_price",
        "unit_profit",
        "units_needed_for_goal",
        "total_monthly_revenue",
        "total_monthly_profit",
    ])?;

    // Money columns at two decimals
    for row in rows {
        let r = &row.results;
        wtr.write_record([
            row.margin_percent.to_string(),
            format!("{:.2}", r.total_cost),
            format!("{:.2}", r.unit_cost),
            format!("{:.2}", r.sales_price),
            format!("{:.2}", r.unit_profit),
            r.units_needed_for_goal.to_string(),
            format!("{:.2}", r.total_monthly_revenue),
            format!("{:.2}", r.total_monthly_profit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
