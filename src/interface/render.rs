use crate::interface::currency::CurrencyFormat;
use crate::models::{CostInputs, DerivedResults, FieldUnit, InputField, PricingInputs};
use crate::pricing::SweepRow;

/// Render a field value the way the form labels it.
pub fn format_field_value(field: InputField, value: f64, currency: CurrencyFormat) -> String {
    match field.unit() {
        FieldUnit::Currency => currency.format(value),
        FieldUnit::Grams => format!("{} g", value),
        FieldUnit::Percent => format!("{}%", value),
        FieldUnit::Count => format!("{}", value),
    }
}

/// Display every input of the form.
pub fn display_inputs(costs: &CostInputs, pricing: &PricingInputs, currency: CurrencyFormat) {
    println!();
    println!("=== Inputs ===");
    println!();

    let width = InputField::ALL
        .iter()
        .map(|f| f.key().len())
        .max()
        .unwrap_or(10);

    for field in InputField::ALL {
        println!(
            "  {:<width$}  {}",
            field.key(),
            format_field_value(field, field.value(costs, pricing), currency),
            width = width
        );
    }

    println!();
}

/// Display the derived figures, grouped like the pricing form.
pub fn display_results(results: &DerivedResults, currency: CurrencyFormat) {
    println!();
    println!("=== Cost per Unit ===");
    println!("Each truffle costs you: {}", currency.format(results.unit_cost));
    println!("Total batch cost: {}", currency.format(results.total_cost));

    println!();
    println!("=== Pricing ===");
    println!("Ideal sale price: {}", currency.format(results.sales_price));
    println!("Profit per unit: +{}", currency.format(results.unit_profit));

    println!();
    println!("=== Monthly Goal ===");
    println!("Truffles you need to sell: {}", results.units_needed_for_goal);
    println!("Revenue: {}", currency.format(results.total_monthly_revenue));
    println!("Real profit: {}", currency.format(results.total_monthly_profit));
    println!();
}

/// Display a margin sweep as a table.
pub fn display_sweep(rows: &[SweepRow], currency: CurrencyFormat) {
    if rows.is_empty() {
        println!("No margins to evaluate.");
        return;
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                format!("{}%", row.margin_percent),
                currency.format(row.results.sales_price),
                currency.format(row.results.unit_profit),
                row.results.units_needed_for_goal.to_string(),
                currency.format(row.results.total_monthly_revenue),
            ]
        })
        .collect();

    let headers = ["Margin", "Price", "Profit/unit", "Units", "Revenue"];
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!();
    println!("=== Margin Sweep ({} rows) ===", rows.len());
    println!();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>w$}", h, w = *w))
        .collect();
    println!("{}", header_line.join("  "));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>w$}", c, w = *w))
            .collect();
        println!("{}", line.join("  "));
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_value() {
        let brl = CurrencyFormat::Brl;
        assert_eq!(format_field_value(InputField::ChocolateSpend, 20.0, brl), "R$ 20,00");
        assert_eq!(format_field_value(InputField::FillingWeight, 250.0, brl), "250 g");
        assert_eq!(format_field_value(InputField::DesiredMargin, 100.0, brl), "100%");
        assert_eq!(format_field_value(InputField::BatchSize, 50.0, brl), "50");
    }
}
