/// Turn whatever the user typed into a number.
///
/// Accepts a comma as the decimal separator and a numeric prefix followed by
/// junk ("12abc" is 12). Empty, malformed, or non-finite text is 0, so the
/// engine always receives a usable value.
pub fn coerce_numeric(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let parsed = normalized
        .parse::<f64>()
        .or_else(|_| numeric_prefix(&normalized).parse::<f64>())
        .unwrap_or(0.0);

    if parsed.is_finite() { parsed } else { 0.0 }
}

/// Leading `[+-]digits[.digits][e[+-]digits]` run of `s`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_dot = false;
    let mut seen_digit = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    // Exponent only counts when it has a mantissa and at least one digit.
    if seen_digit && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(coerce_numeric("20"), 20.0);
        assert_eq!(coerce_numeric(" 0.7 "), 0.7);
        assert_eq!(coerce_numeric("-15"), -15.0);
        assert_eq!(coerce_numeric("1e3"), 1000.0);
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(coerce_numeric("12,50"), 12.5);
        // both separators: ambiguous grouping, keep the leading number
        assert_eq!(coerce_numeric("1,234.5"), 1.0);
    }

    #[test]
    fn test_junk_is_zero() {
        assert_eq!(coerce_numeric(""), 0.0);
        assert_eq!(coerce_numeric("   "), 0.0);
        assert_eq!(coerce_numeric("abc"), 0.0);
        assert_eq!(coerce_numeric("-"), 0.0);
        assert_eq!(coerce_numeric("."), 0.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(coerce_numeric("12abc"), 12.0);
        assert_eq!(coerce_numeric("3.5 kg"), 3.5);
        assert_eq!(coerce_numeric("1.2.3"), 1.2);
    }

    #[test]
    fn test_numeric_prefix_with_exponent() {
        assert_eq!(coerce_numeric("1e3abc"), 1000.0);
        assert_eq!(coerce_numeric("2.5E-1 kg"), 0.25);
        assert_eq!(coerce_numeric("4e+2x"), 400.0);
        // dangling exponent marker stays out of the number
        assert_eq!(coerce_numeric("7e"), 7.0);
        assert_eq!(coerce_numeric("7e-x"), 7.0);
        assert_eq!(coerce_numeric("e5"), 0.0);
        assert_eq!(coerce_numeric("1e999abc"), 0.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(coerce_numeric("inf"), 0.0);
        assert_eq!(coerce_numeric("-infinity"), 0.0);
        assert_eq!(coerce_numeric("NaN"), 0.0);
        assert_eq!(coerce_numeric("1e400"), 0.0);
    }
}
