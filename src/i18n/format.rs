//! Locale-aware amount and date formatting

use chrono::{DateTime, Datelike, Utc};

use super::Language;
use crate::models::Money;

/// Format an amount with two decimals and thousands grouping ("1,234.50")
pub fn format_amount(amount: Money) -> String {
    let abs = amount.cents().unsigned_abs();
    let digits = (abs / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, abs % 100)
}

/// Format an amount with an explicit `+` for income
pub fn format_signed_amount(amount: Money) -> String {
    if amount.is_income() {
        format!("+{}", format_amount(amount))
    } else {
        format_amount(amount)
    }
}

/// Format a timestamp as a short local-style date.
///
/// Unparseable timestamps are shown verbatim.
pub fn format_date(parsed: Option<DateTime<Utc>>, raw: &str, language: Language) -> String {
    match parsed {
        Some(at) if language.is_chinese() => format!("{}/{}/{}", at.year(), at.month(), at.day()),
        Some(at) => format!("{}/{}/{}", at.month(), at.day(), at.year()),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Money::from_cents(0)), "0.00");
        assert_eq!(format_amount(Money::from_cents(5)), "0.05");
        assert_eq!(format_amount(Money::from_cents(123_450)), "1,234.50");
        assert_eq!(format_amount(Money::from_cents(-80_000)), "-800.00");
        assert_eq!(format_amount(Money::from_cents(123_456_789)), "1,234,567.89");
    }

    #[test]
    fn test_format_extreme_amounts() {
        assert_eq!(
            format_amount(Money::from_cents(i64::MIN)),
            "-92,233,720,368,547,758.08"
        );
        assert_eq!(
            format_amount(Money::from_cents(i64::MAX)),
            "92,233,720,368,547,758.07"
        );
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(format_signed_amount(Money::from_cents(5000)), "+50.00");
        assert_eq!(format_signed_amount(Money::from_cents(-2000)), "-20.00");
        assert_eq!(format_signed_amount(Money::zero()), "0.00");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(at), "", Language::English), "1/5/2024");
        assert_eq!(format_date(Some(at), "", Language::TraditionalChinese), "2024/1/5");
        assert_eq!(format_date(None, "garbage", Language::English), "garbage");
    }
}
