use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;

pub const MONTHS_PER_YEAR: u32 = 12;

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days of the zero-based `month` in `year`.
///
/// `month` is expected to be in `0..12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

pub fn max_days_in_year_month(year: i32) -> u32 {
    (0..MONTHS_PER_YEAR)
        .map(|month| days_in_month(year, month))
        .max()
        .unwrap_or(0)
}

pub fn is_valid_day(year: i32, month: u32, day: u32) -> bool {
    month < MONTHS_PER_YEAR && day >= 1 && day <= days_in_month(year, month)
}

pub fn month_name(month: u32) -> &'static str {
    Month::from_u32(month + 1).map_or("", |m| m.name())
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Zero-based month of the local date.
pub fn current_month() -> u32 {
    Local::now().month0()
}

/// Local date as `(year, zero-based month, day)`.
pub fn today() -> (i32, u32, u32) {
    let now = Local::now();
    (now.year(), now.month0(), now.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        let lengths: Vec<u32> = (0..12).map(|m| days_in_month(2023, m)).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn february_follows_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn days_in_month_agrees_with_chrono() {
        for year in [1999, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                let next = if month == 11 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 2, 1).unwrap()
                };
                assert_eq!(
                    days_in_month(year, month) as i64,
                    next.signed_duration_since(first).num_days()
                );
            }
        }
    }

    #[test]
    fn longest_month_has_31_days() {
        assert_eq!(max_days_in_year_month(2023), 31);
        assert_eq!(max_days_in_year_month(2024), 31);
    }

    #[test]
    fn day_validation() {
        assert!(is_valid_day(2024, 1, 29));
        assert!(!is_valid_day(2023, 1, 29));
        assert!(!is_valid_day(2023, 3, 31));
        assert!(!is_valid_day(2023, 0, 0));
        assert!(!is_valid_day(2023, 12, 1));
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "");
    }

    #[test]
    fn today_is_a_valid_day() {
        let (year, month, day) = today();
        assert!(is_valid_day(year, month, day));
        assert!(current_month() < MONTHS_PER_YEAR);
    }
}
