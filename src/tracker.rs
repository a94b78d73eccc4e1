use std::path::{Path, PathBuf};

use crate::calendar;
use crate::error::{Error, ErrorKind, Result};
use crate::export;
use crate::model::{HabitData, MonthData, YearData};
use crate::store::{Backend, HabitStore};
use crate::streak;

/// Habit record of one year, persisted after every change.
pub struct Tracker<B: Backend> {
    store: HabitStore<B>,
    data: HabitData,
    year: i32,
}

impl<B: Backend> Tracker<B> {
    /// Loads the stored record and makes sure `year` is part of it.
    ///
    /// Nothing is written until the first change.
    pub fn open(store: HabitStore<B>, year: i32) -> Self {
        let data = store.load().ensure_year(year);
        Tracker { store, data, year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current snapshot of all years.
    pub fn data(&self) -> &HabitData {
        &self.data
    }

    pub fn year_data(&self) -> &YearData {
        self.data
            .year(self.year)
            .expect("tracked year is always present")
    }

    /// # Panics
    /// If `month` is not in `0..12`.
    pub fn month(&self, month: u32) -> &MonthData {
        self.year_data().month(month)
    }

    pub fn is_marked(&self, month: u32, day: u32) -> bool {
        self.data.is_marked(self.year, month, day)
    }

    pub fn streak(&self, month: u32) -> u32 {
        streak::month_streak(self.month(month), self.year, month)
    }

    /// Flips the completion of `day` in the zero-based `month` and saves.
    ///
    /// Returns whether the day is completed afterwards. When saving fails
    /// the change is discarded.
    pub fn toggle(&mut self, month: u32, day: u32) -> Result<bool> {
        if !calendar::is_valid_day(self.year, month, day) {
            return Err(Error::new(
                ErrorKind::InvalidDate,
                &format!(
                    "day {} of month {} does not exist in {}",
                    day,
                    u64::from(month) + 1,
                    self.year
                ),
            ));
        }

        let next = self.data.toggle_day(self.year, month, day);
        self.store.save(&next)?;
        self.data = next;

        Ok(self.is_marked(month, day))
    }

    /// Clears all completions of the tracked year and saves.
    pub fn reset(&mut self) -> Result<()> {
        let next = self.data.reset_year(self.year);
        self.store.save(&next)?;
        self.data = next;
        log::info!("Reset habit data of {}", self.year);

        Ok(())
    }

    pub fn export_markdown(&self) -> String {
        export::export_to_markdown(&self.data, self.year)
    }

    /// Writes the markdown export into `dir`, see [`export::write_markdown`].
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        export::write_markdown(dir, &self.data, self.year)
    }
}
