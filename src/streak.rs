use crate::calendar::{self, MONTHS_PER_YEAR};
use crate::model::{MonthData, YearData};

/// Longest run of consecutive completed days in the zero-based `month`.
pub fn month_streak(month_data: &MonthData, year: i32, month: u32) -> u32 {
    let mut best = 0;
    let mut current = 0;

    for day in 1..=calendar::days_in_month(year, month) {
        if month_data.is_marked(day) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    best
}

pub fn year_streaks(year_data: &YearData, year: i32) -> [u32; MONTHS_PER_YEAR as usize] {
    let mut streaks = [0; MONTHS_PER_YEAR as usize];
    for (month, data) in year_data.months() {
        streaks[month as usize] = month_streak(data, year, month);
    }
    streaks
}
