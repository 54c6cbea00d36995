use chrono::{Datelike, Months, NaiveDate};

use crate::types::Countdown;

/// add calendar months, clamping to the last day of a shorter month
/// (jan 31 + 1 month is feb 28, or feb 29 in a leap year).
/// `None` when the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// years and months from `today` until `target`, `None` if target has passed
pub fn countdown(today: NaiveDate, target: NaiveDate) -> Option<Countdown> {
    if target < today {
        return None;
    }

    let mut years = target.year() - today.year();
    let mut months = target.month() as i32 - today.month() as i32;

    // partial month does not count
    if target.day() < today.day() {
        months -= 1;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Some(Countdown {
        years: years as u32,
        months: months as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_months_preserves_day() {
        assert_eq!(add_months(date(2024, 1, 15), 1), Some(date(2024, 2, 15)));
        assert_eq!(add_months(date(2024, 11, 15), 3), Some(date(2025, 2, 15)));
        assert_eq!(add_months(date(2024, 1, 15), 0), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_months(date(2023, 1, 31), 1), Some(date(2023, 2, 28)));
        assert_eq!(add_months(date(2024, 3, 31), 1), Some(date(2024, 4, 30)));
        // clamping is not sticky across a longer jump
        assert_eq!(add_months(date(2024, 1, 31), 2), Some(date(2024, 3, 31)));
    }

    #[test]
    fn test_add_months_full_horizon() {
        assert_eq!(add_months(date(2026, 10, 19), 1200), Some(date(2126, 10, 19)));
        assert_eq!(add_months(date(2024, 2, 29), 12), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_add_months_overflow() {
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_countdown() {
        let today = date(2024, 3, 10);
        assert_eq!(
            countdown(today, date(2026, 5, 10)),
            Some(Countdown { years: 2, months: 2 })
        );
        assert_eq!(
            countdown(today, date(2025, 3, 9)),
            Some(Countdown { years: 0, months: 11 })
        );
        assert_eq!(
            countdown(today, date(2025, 1, 20)),
            Some(Countdown { years: 0, months: 10 })
        );
        assert_eq!(countdown(today, today), Some(Countdown { years: 0, months: 0 }));
        assert_eq!(countdown(today, date(2024, 3, 9)), None);
    }
}
