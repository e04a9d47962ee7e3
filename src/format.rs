//! Text rendering shared by the table and the exported records

use crate::error::{Result, TrackerError};
use crate::types::{PurchaseDate, DATE_FORMAT};
use chrono::NaiveDate;

/// Render a number as a grouped integer: rounded half away from zero,
/// no decimals, `,` between thousands (`1234.5` -> `1,235`).
///
/// Values that round to zero render as `0`; negative zero is normalized.
pub fn grouped_integer(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a purchase date as `MM/dd/yyyy`
pub fn format_date(date: PurchaseDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `MM/dd/yyyy` date. Month and day must be zero-padded and the
/// year must have four digits.
pub fn parse_date(text: &str) -> Result<PurchaseDate> {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| TrackerError::InvalidInput(format!("'{}' is not a MM/dd/yyyy date: {}", text, e)))?;
    if format_date(date) != trimmed {
        return Err(TrackerError::InvalidInput(format!(
            "'{}' is not a MM/dd/yyyy date",
            text
        )));
    }
    Ok(date)
}

/// Parse a price in USD. Any finite decimal is accepted, negatives included.
pub fn parse_price(text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("'{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(TrackerError::InvalidInput(format!(
            "'{}' is not a finite number",
            text
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_integer() {
        assert_eq!(grouped_integer(0.0), "0");
        assert_eq!(grouped_integer(800.0), "800");
        assert_eq!(grouped_integer(1000.0), "1,000");
        assert_eq!(grouped_integer(10630.0), "10,630");
        assert_eq!(grouped_integer(1234567.0), "1,234,567");
        assert_eq!(grouped_integer(999999.6), "1,000,000");
    }

    #[test]
    fn test_grouped_integer_rounding() {
        assert_eq!(grouped_integer(0.5), "1");
        assert_eq!(grouped_integer(2.5), "3");
        assert_eq!(grouped_integer(1499.49), "1,499");
        assert_eq!(grouped_integer(-0.4), "0");
        assert_eq!(grouped_integer(-0.0), "0");
    }

    #[test]
    fn test_grouped_integer_negative() {
        assert_eq!(grouped_integer(-5.0), "-5");
        assert_eq!(grouped_integer(-1234.0), "-1,234");
        assert_eq!(grouped_integer(-123456.0), "-123,456");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(format_date(date), "06/05/2023");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("01/31/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(parse_date(" 06/15/2023\n").unwrap(), NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        assert!(parse_date("2024-01-31").is_err());
        assert!(parse_date("13/01/2024").is_err());
        assert!(parse_date("02/30/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_date_requires_exact_width() {
        assert!(parse_date("01/05/23").is_err());
        assert!(parse_date("1/5/2023").is_err());
        assert!(parse_date("01/5/2023").is_err());
        assert!(parse_date("1/05/2023").is_err());
        assert!(parse_date("01/05/02023").is_err());
        assert!(parse_date("01/05/0999").is_ok());
        assert_eq!(parse_date("01/05/2023").unwrap(), NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1000").unwrap(), 1000.0);
        assert_eq!(parse_price(" 799.99 ").unwrap(), 799.99);
        assert_eq!(parse_price("-10").unwrap(), -10.0);
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }
}
