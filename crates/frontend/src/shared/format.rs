/// Formats an integer with dots as thousands separators
///
/// ```
/// use frontend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(-4200), "-4.200");
/// ```
pub fn format_number(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Inserts a dot every three digits, counting from the right
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Shown in place of amounts that are not numbers
pub const INVALID_AMOUNT: &str = "-";

fn currency_symbol(code: &str) -> &str {
    match code {
        "CLP" | "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}

fn currency_decimals(code: &str) -> usize {
    match code {
        "CLP" => 0,
        _ => 2,
    }
}

/// Amount with the currency symbol, dot thousands and comma decimals.
/// Pesos carry no decimals. NaN and infinities render as [`INVALID_AMOUNT`].
pub fn format_currency(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        log::warn!("cannot format amount {}", amount);
        return INVALID_AMOUNT.to_string();
    }
    let code = code.trim().to_uppercase();
    let decimals = currency_decimals(&code);
    let symbol = currency_symbol(&code);

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    let mut out = format!("{}{}{}", sign, symbol, group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
        assert_eq!(format_number(-1000), "-1.000");
    }

    #[test]
    fn test_format_currency_pesos() {
        assert_eq!(format_currency(150000.0, "CLP"), "$150.000");
        assert_eq!(format_currency(1999.6, "clp"), "$2.000");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        assert_eq!(format_currency(1234.5, "USD"), "$1.234,50");
        assert_eq!(format_currency(99.0, "EUR"), "€99,00");
        assert_eq!(format_currency(10.0, "UF"), "UF10,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-2500.0, "CLP"), "-$2.500");
        assert_eq!(format_currency(-0.001, "USD"), "$0,00");
    }

    #[test]
    fn test_format_currency_beyond_i64() {
        assert_eq!(
            format_currency(1e20, "CLP"),
            "$100.000.000.000.000.000.000"
        );
        assert_eq!(format_currency(-1e19, "USD"), "-$10.000.000.000.000.000.000,00");
    }

    #[test]
    fn test_format_currency_not_a_number() {
        assert_eq!(format_currency(f64::NAN, "CLP"), INVALID_AMOUNT);
        assert_eq!(format_currency(f64::INFINITY, "USD"), INVALID_AMOUNT);
        assert_eq!(format_currency(f64::NEG_INFINITY, "EUR"), INVALID_AMOUNT);
    }
}
