use chrono::{Datelike, NaiveDate};

use crate::decimal::Money;

/// currency glyph appended to displayed amounts
pub const CURRENCY_SYMBOL: &str = "₸";

const MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// whole-unit amount grouped by thousands: 1234567 -> "1 234 567"
pub fn format_currency(amount: Money) -> String {
    let raw = amount.as_decimal().to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

/// grouped amount with the trailing currency glyph: "1 000 ₸"
pub fn format_currency_with_symbol(amount: Money) -> String {
    format!("{} {}", format_currency(amount), CURRENCY_SYMBOL)
}

/// capitalized month name and year in the fixed display locale: "Август 2025 г."
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} г.", MONTHS[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(Money::from_major(1_234_567)), "1 234 567");
        assert_eq!(format_currency(Money::from_major(25_558_146)), "25 558 146");
        assert_eq!(format_currency(Money::from_major(999)), "999");
        assert_eq!(format_currency(Money::from_major(0)), "0");
        assert_eq!(format_currency(Money::from_major(-1_500)), "-1 500");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(
            format_currency_with_symbol(Money::from_major(1_000)),
            "1 000 ₸"
        );
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(format_date(date), "Август 2025 г.");
        let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date(january), "Январь 2026 г.");
    }
}
