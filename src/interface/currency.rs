use clap::ValueEnum;

/// Currency display style for money figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CurrencyFormat {
    /// Brazilian real: `R$ 1.234,56`.
    #[default]
    Brl,
    /// US dollar: `$1,234.56`.
    Usd,
}

impl CurrencyFormat {
    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyFormat::Brl => "R$",
            CurrencyFormat::Usd => "$",
        }
    }

    fn separators(self) -> (char, char) {
        // (thousands, decimal)
        match self {
            CurrencyFormat::Brl => ('.', ','),
            CurrencyFormat::Usd => (',', '.'),
        }
    }

    fn symbol_spacing(self) -> &'static str {
        match self {
            CurrencyFormat::Brl => " ",
            CurrencyFormat::Usd => "",
        }
    }

    /// Format an amount with two decimals and grouped thousands.
    ///
    /// Non-finite amounts render as zero.
    pub fn format(self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let cents = (value.abs() * 100.0).round() as u64;
        let (thousands, decimal) = self.separators();

        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{}{}{}{}{}{:02}",
            sign,
            self.symbol(),
            self.symbol_spacing(),
            group_thousands(cents / 100, thousands),
            decimal,
            cents % 100
        )
    }
}

/// Format an amount in the given style.
pub fn format_currency(value: f64, currency: CurrencyFormat) -> String {
    currency.format(value)
}

fn group_thousands(whole: u64, separator: char) -> String {
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brl() {
        assert_eq!(format_currency(0.0, CurrencyFormat::Brl), "R$ 0,00");
        assert_eq!(format_currency(0.7, CurrencyFormat::Brl), "R$ 0,70");
        assert_eq!(format_currency(1001.0, CurrencyFormat::Brl), "R$ 1.001,00");
        assert_eq!(format_currency(1234567.891, CurrencyFormat::Brl), "R$ 1.234.567,89");
    }

    #[test]
    fn test_usd() {
        assert_eq!(format_currency(500.5, CurrencyFormat::Usd), "$500.50");
        assert_eq!(format_currency(1001.0, CurrencyFormat::Usd), "$1,001.00");
    }

    #[test]
    fn test_negative_and_degenerate() {
        assert_eq!(format_currency(-0.35, CurrencyFormat::Brl), "-R$ 0,35");
        assert_eq!(format_currency(-0.001, CurrencyFormat::Usd), "$0.00");
        assert_eq!(format_currency(f64::NAN, CurrencyFormat::Usd), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, CurrencyFormat::Brl), "R$ 0,00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(100000, '.'), "100.000");
    }
}
