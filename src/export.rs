use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::{self, MONTHS_PER_YEAR};
use crate::error::Result;
use crate::model::HabitData;

pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

const MARK: &str = "✅";
const BLANK: &str = " ";

pub fn export_file_name(year: i32) -> String {
    format!("habit-tracker-{}.md", year)
}

/// Renders `year` as a markdown table with one row per day and one column
/// per month.
///
/// Cells of completed days hold a check mark. Cells of days that were not
/// completed, or that do not exist in that month, hold a single space.
pub fn export_to_markdown(data: &HabitData, year: i32) -> String {
    let mut output = format!(
        "| Day | {} |\n",
        (0..MONTHS_PER_YEAR).map(calendar::month_name).join(" | ")
    );
    output += &format!("|-----|{}\n", "---|".repeat(MONTHS_PER_YEAR as usize));

    let year_data = data.year(year);

    for day in 1..=calendar::max_days_in_year_month(year) {
        output += &format!("| {} |", day);
        for month in 0..MONTHS_PER_YEAR {
            let marked = calendar::is_valid_day(year, month, day)
                && year_data.map_or(false, |y| y.month(month).is_marked(day));
            output += &format!(" {} |", if marked { MARK } else { BLANK });
        }
        output += "\n";
    }

    output
}

/// Writes the markdown export of `year` into `dir` and returns the path of
/// the written file.
pub fn write_markdown(dir: &Path, data: &HabitData, year: i32) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(export_file_name(year));
    fs::write(&path, export_to_markdown(data, year))?;
    log::info!("Exported {} to '{}'", year, path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "| Day | January | February | March | April | May | June | July | \
                          August | September | October | November | December |";

    fn row(markdown: &str, day: usize) -> Vec<&str> {
        let line = markdown.lines().nth(day + 1).unwrap();
        line.trim_matches('|').split('|').map(str::trim).collect()
    }

    #[test]
    fn header_and_separator() {
        let markdown = export_to_markdown(&HabitData::new(), 2023);
        let mut lines = markdown.lines();

        assert_eq!(lines.next(), Some(HEADER));
        assert_eq!(
            lines.next(),
            Some("|-----|---|---|---|---|---|---|---|---|---|---|---|---|")
        );
    }

    #[test]
    fn one_row_per_day() {
        let markdown = export_to_markdown(&HabitData::new(), 2023);
        assert_eq!(markdown.lines().count(), 2 + 31);
        assert!(markdown.ends_with('\n'));
        assert_eq!(row(&markdown, 31)[0], "31");
    }

    #[test]
    fn empty_year_has_blank_cells() {
        let data = HabitData::new().ensure_year(2023);
        let markdown = export_to_markdown(&data, 2023);

        assert!(!markdown.contains(MARK));
        assert_eq!(
            markdown.lines().nth(2),
            Some("| 1 |   |   |   |   |   |   |   |   |   |   |   |   |")
        );
        assert_eq!(markdown, export_to_markdown(&HabitData::new(), 2023));
    }

    #[test]
    fn leap_day_in_leap_year() {
        let data = HabitData::new()
            .ensure_year(2024)
            .toggle_day(2024, 0, 1)
            .toggle_day(2024, 0, 2)
            .toggle_day(2024, 0, 3)
            .toggle_day(2024, 1, 29);
        let markdown = export_to_markdown(&data, 2024);

        let day_29 = row(&markdown, 29);
        assert_eq!(day_29[2], MARK);
        assert_eq!(day_29.iter().filter(|cell| **cell == MARK).count(), 1);

        let day_1 = row(&markdown, 1);
        assert_eq!(day_1[1], MARK);
        assert_eq!(day_1[2], "");

        let day_31 = markdown.lines().nth(32).unwrap();
        assert_eq!(
            day_31,
            "| 31 |   |   |   |   |   |   |   |   |   |   |   |   |"
        );
    }

    #[test]
    fn february_29_is_blank_outside_leap_years() {
        let data = HabitData::new()
            .ensure_year(2023)
            .toggle_day(2023, 0, 29)
            .toggle_day(2023, 2, 29);
        let markdown = export_to_markdown(&data, 2023);

        let day_29 = row(&markdown, 29);
        assert_eq!(day_29[1], MARK);
        assert_eq!(day_29[2], "");
        assert_eq!(day_29[3], MARK);
    }

    #[test]
    fn other_years_are_not_exported() {
        let data = HabitData::new().ensure_year(2022).toggle_day(2022, 5, 5);
        assert!(!export_to_markdown(&data, 2023).contains(MARK));
    }

    #[test]
    fn file_name_contains_year() {
        assert_eq!(export_file_name(2024), "habit-tracker-2024.md");
    }
}
