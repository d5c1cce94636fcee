use chrono::{Datelike, NaiveDate};

/// add calendar months, clamping the day to the end of the target month
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// inclusive (min, max) year range over a set of dates, None when empty
pub fn year_span<I>(dates: I) -> Option<(i32, i32)>
where
    I: IntoIterator<Item = NaiveDate>,
{
    dates.into_iter().fold(None, |span, date| {
        let year = date.year();
        match span {
            None => Some((year, year)),
            Some((min, max)) => Some((min.min(year), max.max(year))),
        }
    })
}
