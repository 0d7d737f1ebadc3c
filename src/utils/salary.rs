use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Currency markers stripped from the raw text, wherever they appear.
const CURRENCY_MARKERS: &[&str] = &["€", "$", "USD", "EUR"];

/// Outcome of normalizing a raw salary string. Absent (nothing entered) and
/// Invalid (entered but unusable) are distinct; the validation chain treats
/// both as blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryInput {
    Absent,
    Invalid,
    Amount(Decimal),
}

impl SalaryInput {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            SalaryInput::Amount(value) => Some(*value),
            _ => None,
        }
    }
}

/// Normalize a free-text salary into a non-negative decimal with exactly two
/// fractional digits.
///
/// This is a naive single-separator normalizer: every comma becomes a period
/// before parsing, so `"35000,50"` reads as 35000.50 while `"35.000,50"`
/// turns into `"35.000.50"` and is rejected. `"35,000"` with a
/// thousands-separator comma reads as 35.0. Adding locale-aware grouping
/// would change which real inputs are accepted; keep the naive behavior.
pub fn parse_salary(raw: Option<&str>) -> SalaryInput {
    let raw = match raw {
        Some(value) => value.trim(),
        None => return SalaryInput::Absent,
    };
    if raw.is_empty() {
        return SalaryInput::Absent;
    }

    let mut normalized = raw.replace(' ', "").replace(',', ".");
    for marker in CURRENCY_MARKERS {
        normalized = normalized.replace(marker, "");
    }

    match Decimal::from_str(&normalized) {
        Ok(value) if value.is_sign_negative() && !value.is_zero() => SalaryInput::Invalid,
        Ok(value) => {
            // Banker's rounding, then a rescale so the canonical form
            // always carries two fractional digits even when the input
            // had none.
            let mut canonical =
                value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
            canonical.rescale(2);
            SalaryInput::Amount(canonical)
        }
        Err(_) => SalaryInput::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn plain_integer_gets_two_decimals() {
        assert_eq!(parse_salary(Some("35000")), SalaryInput::Amount(dec("35000.00")));
    }

    #[test]
    fn comma_is_a_decimal_separator() {
        assert_eq!(
            parse_salary(Some("35000,50")),
            SalaryInput::Amount(dec("35000.50"))
        );
    }

    #[test]
    fn thousands_dot_plus_decimal_comma_is_rejected() {
        // "35.000,50" -> "35.000.50" after substitution: two periods.
        assert_eq!(parse_salary(Some("35.000,50")), SalaryInput::Invalid);
    }

    #[test]
    fn thousands_comma_is_misread_as_decimal_point() {
        // Literal legacy behavior: "35,000" means 35.0, not 35000.
        assert_eq!(parse_salary(Some("35,000")), SalaryInput::Amount(dec("35.00")));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert_eq!(parse_salary(Some("-100")), SalaryInput::Invalid);
        assert_eq!(parse_salary(Some("-1")), SalaryInput::Invalid);
        assert_eq!(parse_salary(Some("-0.001")), SalaryInput::Invalid);
    }

    #[test]
    fn blank_input_is_absent_not_invalid() {
        assert_eq!(parse_salary(None), SalaryInput::Absent);
        assert_eq!(parse_salary(Some("")), SalaryInput::Absent);
        assert_eq!(parse_salary(Some("   ")), SalaryInput::Absent);
    }

    #[test]
    fn currency_markers_are_stripped() {
        assert_eq!(parse_salary(Some("35000€")), SalaryInput::Amount(dec("35000.00")));
        assert_eq!(parse_salary(Some("$42000")), SalaryInput::Amount(dec("42000.00")));
        assert_eq!(
            parse_salary(Some("42 000 EUR")),
            SalaryInput::Amount(dec("42000.00"))
        );
        assert_eq!(parse_salary(Some("USD 1250,75")), SalaryInput::Amount(dec("1250.75")));
    }

    #[test]
    fn marker_with_no_digits_is_invalid() {
        assert_eq!(parse_salary(Some("€")), SalaryInput::Invalid);
        assert_eq!(parse_salary(Some("abc")), SalaryInput::Invalid);
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_output() {
        assert_eq!(
            parse_salary(Some("35000.00")),
            SalaryInput::Amount(dec("35000.00"))
        );
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(parse_salary(Some("0")), SalaryInput::Amount(dec("0.00")));
    }

    #[test]
    fn midpoints_round_half_to_even() {
        assert_eq!(parse_salary(Some("1000.005")), SalaryInput::Amount(dec("1000.00")));
        assert_eq!(parse_salary(Some("0.125")), SalaryInput::Amount(dec("0.12")));
        assert_eq!(parse_salary(Some("0.135")), SalaryInput::Amount(dec("0.14")));
    }

    #[test]
    fn non_midpoint_fractions_round_normally() {
        assert_eq!(parse_salary(Some("1000.0051")), SalaryInput::Amount(dec("1000.01")));
        assert_eq!(parse_salary(Some("1000.004")), SalaryInput::Amount(dec("1000.00")));
    }

    #[test]
    fn output_always_carries_two_fractional_digits() {
        // Decimal equality ignores scale, so pin the rendered form too.
        let cases = [
            ("35000", "35000.00"),
            ("35,000", "35.00"),
            ("0", "0.00"),
            ("1234.5", "1234.50"),
        ];
        for (raw, canonical) in cases {
            let amount = parse_salary(Some(raw)).amount().unwrap();
            assert_eq!(amount.scale(), 2, "scale for {:?}", raw);
            assert_eq!(amount.to_string(), canonical);
        }
    }
}
