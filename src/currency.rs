//! Display formatting for Brazilian Real amounts

/// Format a value as Brazilian Real, e.g. `R$ 1.234,56`.
///
/// Non-finite values have no meaningful price and render as a dash;
/// callers surface those as configuration errors before display.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let reais = total_cents / 100;
    let cents = total_cents % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents)
}

/// Format a fraction as a percentage with one decimal, e.g. `28,7%`
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "-".to_string();
    }
    format!("{:.1}%", fraction * 100.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_pt_br_separators() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(287.9), "R$ 287,90");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_234_567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_brl(205.293), "R$ 205,29");
        assert_eq!(format_brl(205.296), "R$ 205,30");
        assert_eq!(format_brl(0.999), "R$ 1,00");
    }

    #[test]
    fn negative_amounts_carry_the_sign() {
        assert_eq!(format_brl(-42.5), "-R$ 42,50");
    }

    #[test]
    fn non_finite_renders_as_dash() {
        assert_eq!(format_brl(f64::INFINITY), "-");
        assert_eq!(format_brl(f64::NAN), "-");
        assert_eq!(format_percent(f64::NAN), "-");
    }

    #[test]
    fn percent_uses_decimal_comma() {
        assert_eq!(format_percent(0.287), "28,7%");
        assert_eq!(format_percent(0.4), "40,0%");
        assert_eq!(format_percent(0.0), "0,0%");
    }
}
