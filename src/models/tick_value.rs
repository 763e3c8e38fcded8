//! Exact tick length as a fraction of a quarter note
//!
//! Scores can be arbitrarily long, so the tick value is kept as a reduced
//! rational and never converted to floating point.

use num_rational::Rational64;
use thiserror::Error;

pub type TickValue = Rational64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickValueError {
    #[error("tick value is empty")]
    Empty,
    #[error("tick value \"{0}\" is not a fraction")]
    Invalid(String),
    #[error("tick value \"{0}\" has a zero denominator")]
    ZeroDenominator(String),
    #[error("tick value \"{0}\" does not fit in 64 bits")]
    Overflow(String),
}

/// Parse a tick value string
///
/// Accepts `"n/d"`, `"n"`, mixed numbers such as `"1 1/2"`, and decimals
/// such as `"0.25"`, which are converted exactly.
pub fn parse_tick_value(s: &str) -> Result<TickValue, TickValueError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TickValueError::Empty);
    }

    let invalid = || TickValueError::Invalid(trimmed.to_string());

    if let Some((whole, fraction)) = trimmed.split_once(' ') {
        let whole = parse_integer(whole, trimmed)?;
        let fraction = parse_simple(fraction.trim(), trimmed)?;
        if *fraction.numer() < 0 {
            return Err(invalid());
        }
        let denom = *fraction.denom();
        let numer = whole
            .checked_abs()
            .and_then(|w| w.checked_mul(denom))
            .and_then(|w| w.checked_add(*fraction.numer()))
            .ok_or_else(|| TickValueError::Overflow(trimmed.to_string()))?;
        let magnitude = TickValue::new(numer, denom);
        return Ok(if whole < 0 || trimmed.starts_with('-') {
            -magnitude
        } else {
            magnitude
        });
    }

    parse_simple(trimmed, trimmed)
}

fn parse_simple(s: &str, original: &str) -> Result<TickValue, TickValueError> {
    if let Some((numer, denom)) = s.split_once('/') {
        let numer = parse_integer(numer, original)?;
        let denom = parse_integer(denom, original)?;
        if denom == 0 {
            return Err(TickValueError::ZeroDenominator(original.to_string()));
        }
        return Ok(TickValue::new(numer, denom));
    }

    if s.contains('.') {
        return parse_decimal(s, original);
    }

    parse_integer(s, original).map(TickValue::from_integer)
}

fn parse_decimal(s: &str, original: &str) -> Result<TickValue, TickValueError> {
    let invalid = || TickValueError::Invalid(original.to_string());
    let overflow = || TickValueError::Overflow(original.to_string());

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (int_part, frac_part) = digits.split_once('.').ok_or_else(invalid)?;
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut numer: i64 = 0;
    let mut denom: i64 = 1;
    for c in int_part.chars() {
        numer = numer
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(c as u8 - b'0')))
            .ok_or_else(overflow)?;
    }
    for c in frac_part.chars() {
        numer = numer
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(c as u8 - b'0')))
            .ok_or_else(overflow)?;
        denom = denom.checked_mul(10).ok_or_else(overflow)?;
    }

    let value = TickValue::new(numer, denom);
    Ok(if negative { -value } else { value })
}

// i64::MIN has no positive counterpart, so Ratio cannot normalize its sign
fn parse_integer(s: &str, original: &str) -> Result<i64, TickValueError> {
    let value = s
        .trim()
        .parse::<i64>()
        .map_err(|_| TickValueError::Invalid(original.to_string()))?;
    if value == i64::MIN {
        return Err(TickValueError::Overflow(original.to_string()));
    }
    Ok(value)
}

/// Render as `"n/d"`, always including the denominator
pub fn format_tick_value(value: &TickValue) -> String {
    format!("{}/{}", value.numer(), value.denom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_tick_value("1/4"), Ok(TickValue::new(1, 4)));
        assert_eq!(parse_tick_value("2/8"), Ok(TickValue::new(1, 4)));
        assert_eq!(parse_tick_value(" 1/3 "), Ok(TickValue::new(1, 3)));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_tick_value("1"), Ok(TickValue::from_integer(1)));
        assert_eq!(parse_tick_value("3"), Ok(TickValue::from_integer(3)));
    }

    #[test]
    fn test_parse_mixed_number() {
        assert_eq!(parse_tick_value("1 1/2"), Ok(TickValue::new(3, 2)));
        assert_eq!(parse_tick_value("-1 1/2"), Ok(TickValue::new(-3, 2)));
    }

    #[test]
    fn test_parse_decimal_is_exact() {
        assert_eq!(parse_tick_value("0.25"), Ok(TickValue::new(1, 4)));
        assert_eq!(parse_tick_value(".5"), Ok(TickValue::new(1, 2)));
        assert_eq!(parse_tick_value("1.125"), Ok(TickValue::new(9, 8)));
        assert_eq!(parse_tick_value("-0.5"), Ok(TickValue::new(-1, 2)));
    }

    #[test]
    fn test_thirds_stay_exact() {
        let third = parse_tick_value("1/3").unwrap();
        assert_eq!(third * 3, TickValue::from_integer(1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_tick_value(""), Err(TickValueError::Empty));
        assert_eq!(
            parse_tick_value("1/0"),
            Err(TickValueError::ZeroDenominator("1/0".to_string()))
        );
        assert!(matches!(parse_tick_value("quarter"), Err(TickValueError::Invalid(_))));
        assert!(matches!(parse_tick_value("1/x"), Err(TickValueError::Invalid(_))));
        assert!(matches!(parse_tick_value("."), Err(TickValueError::Invalid(_))));
        assert!(matches!(
            parse_tick_value("0.00000000000000000001"),
            Err(TickValueError::Overflow(_))
        ));
    }

    #[test]
    fn test_most_negative_component_overflows() {
        for s in [
            "1/-9223372036854775808",
            "-9223372036854775808/-1",
            "-9223372036854775808",
            "-9223372036854775808 1/2",
        ] {
            assert_eq!(
                parse_tick_value(s),
                Err(TickValueError::Overflow(s.to_string())),
                "{} should overflow",
                s
            );
        }
        assert_eq!(
            parse_tick_value("-9223372036854775807/-1"),
            Ok(TickValue::from_integer(i64::MAX))
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format_tick_value(&TickValue::new(1, 4)), "1/4");
        assert_eq!(format_tick_value(&TickValue::from_integer(1)), "1/1");
    }
}
