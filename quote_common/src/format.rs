//! Display formatting for quote fields.
//!
//! The upstream provider reports every number as text. These helpers parse
//! that text strictly and render it in the fixed shapes `NormalizedQuote`
//! promises: two decimals for prices, a signed percentage, and a
//! comma-grouped integer volume.
use crate::error::QuoteError;

/// Parses a decimal field. Surrounding whitespace is ignored; NaN and
/// infinities are rejected.
pub fn parse_decimal(raw: &str) -> Result<f64, QuoteError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QuoteError::InvalidNumber(raw.to_string())),
    }
}

/// Renders `value` with exactly two decimals.
///
/// Anything that rounds to zero is rendered as `0.00`, never `-0.00`.
pub fn fixed2(value: f64) -> String {
    let text = format!("{:.2}", value);
    match text.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => magnitude.to_string(),
        _ => text,
    }
}

/// Parses and re-renders a decimal field with two decimals.
pub fn decimal_field(raw: &str) -> Result<String, QuoteError> {
    parse_decimal(raw).map(fixed2)
}

/// Converts the provider's change percent (e.g. `"-0.5612%"`) into the
/// signed display form (`"-0.56%"`).
///
/// The sign follows the parsed value: non-negative values, `-0` included,
/// get a leading `+`, and a negative value keeps its `-` even when it
/// rounds to zero (`"-0.0041%"` becomes `"-0.00%"`).
pub fn signed_percent(raw: &str) -> Result<String, QuoteError> {
    let value = parse_decimal(raw.trim().trim_end_matches('%'))?;
    if value >= 0.0 {
        Ok(format!("+{}%", fixed2(value)))
    } else {
        Ok(format!("{:.2}%", value))
    }
}

/// Parses an integer volume and renders it with comma digit grouping.
pub fn grouped_volume(raw: &str) -> Result<String, QuoteError> {
    let volume: u64 = raw
        .trim()
        .parse()
        .map_err(|_| QuoteError::InvalidNumber(raw.to_string()))?;
    Ok(group_digits(volume))
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_rounds_and_pads() {
        assert_eq!(fixed2(182.5), "182.50");
        assert_eq!(fixed2(12.34567), "12.35");
        assert_eq!(fixed2(-1.0349), "-1.03");
        assert_eq!(fixed2(-0.0), "0.00");
        assert_eq!(fixed2(-0.001), "0.00");
        assert_eq!(fixed2(-0.005001), "-0.01");
    }

    #[test]
    fn fixed2_is_idempotent_after_reparse() {
        for raw in ["182.5200", "0.0049", "-3.4567", "100000.999", "0.125", "-0.0000"] {
            let once = decimal_field(raw).unwrap();
            let twice = decimal_field(&once).unwrap();
            assert_eq!(once, twice, "reformatting {raw} changed the value");
        }
    }

    #[test]
    fn signed_percent_adds_plus_for_non_negative() {
        assert_eq!(signed_percent("1.2345%").unwrap(), "+1.23%");
        assert_eq!(signed_percent("-0.5612%").unwrap(), "-0.56%");
        assert_eq!(signed_percent("0.0000%").unwrap(), "+0.00%");
        assert_eq!(signed_percent("-0.0000%").unwrap(), "+0.00%");
        assert_eq!(signed_percent("2.5").unwrap(), "+2.50%");
    }

    #[test]
    fn signed_percent_keeps_minus_for_small_negatives() {
        assert_eq!(signed_percent("-0.0010%").unwrap(), "-0.00%");
        assert_eq!(signed_percent("-0.0041%").unwrap(), "-0.00%");
        assert_eq!(signed_percent("-0.0049%").unwrap(), "-0.00%");
        assert_eq!(signed_percent("-0.0050%").unwrap(), "-0.01%");
    }

    #[test]
    fn signed_percent_rejects_garbage() {
        assert!(matches!(signed_percent("n/a%"), Err(QuoteError::InvalidNumber(_))));
        assert!(signed_percent("%").is_err());
    }

    #[test]
    fn grouped_volume_inserts_commas() {
        assert_eq!(grouped_volume("0").unwrap(), "0");
        assert_eq!(grouped_volume("999").unwrap(), "999");
        assert_eq!(grouped_volume("1000").unwrap(), "1,000");
        assert_eq!(grouped_volume("3512776").unwrap(), "3,512,776");
        assert_eq!(grouped_volume("123456789012").unwrap(), "123,456,789,012");
    }

    #[test]
    fn grouped_volume_rejects_non_integers() {
        assert!(grouped_volume("12.5").is_err());
        assert!(grouped_volume("-4").is_err());
        assert!(grouped_volume("").is_err());
    }

    #[test]
    fn parse_decimal_rejects_non_finite() {
        assert!(parse_decimal("NaN").is_err());
        assert!(parse_decimal("inf").is_err());
        assert_eq!(parse_decimal(" 12.50 ").unwrap(), 12.5);
    }
}
