//! Completion record of the habit.
//!
//! Every mutation returns a new [`HabitData`] snapshot. Snapshots share
//! untouched years and months; the year and month on the mutated path are
//! copied on write, so a snapshot handed out earlier never changes.

mod ser;

use std::collections::{BTreeMap, BTreeSet};
use std::iter::FromIterator;
use std::rc::Rc;

use crate::calendar::MONTHS_PER_YEAR;

/// Days of a month on which the habit was completed.
///
/// A day is stored only while it is completed; toggling it off removes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthData {
    days: BTreeSet<u32>,
}

impl MonthData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_marked(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    /// Completed days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    // Returns whether the day is marked afterwards.
    fn toggle(&mut self, day: u32) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day)
        }
    }
}

impl FromIterator<u32> for MonthData {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        MonthData {
            days: iter.into_iter().collect(),
        }
    }
}

/// The twelve months of one year, indexed from 0 (January) to 11.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearData {
    months: [Rc<MonthData>; MONTHS_PER_YEAR as usize],
}

impl YearData {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    /// If `month` is not in `0..12`.
    pub fn month(&self, month: u32) -> &MonthData {
        &self.months[month as usize]
    }

    pub fn months(&self) -> impl Iterator<Item = (u32, &MonthData)> + '_ {
        self.months
            .iter()
            .enumerate()
            .map(|(idx, month)| (idx as u32, month.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.months.iter().all(|month| month.is_empty())
    }

    fn month_mut(&mut self, month: u32) -> &mut MonthData {
        Rc::make_mut(&mut self.months[month as usize])
    }
}

/// Completion record of all tracked years.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HabitData {
    years: BTreeMap<i32, Rc<YearData>>,
}

impl HabitData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&self, year: i32) -> Option<&YearData> {
        self.years.get(&year).map(Rc::as_ref)
    }

    pub fn years(&self) -> impl Iterator<Item = (i32, &YearData)> + '_ {
        self.years.iter().map(|(year, data)| (*year, data.as_ref()))
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn is_marked(&self, year: i32, month: u32, day: u32) -> bool {
        self.year(year)
            .map_or(false, |data| data.month(month).is_marked(day))
    }

    /// Snapshot that contains `year`, adding it with twelve empty months if
    /// it is missing.
    pub fn ensure_year(&self, year: i32) -> HabitData {
        let mut next = self.clone();
        next.years.entry(year).or_default();
        next
    }

    /// Snapshot with the completion of the given day flipped.
    ///
    /// # Panics
    /// If `year` has not been added with [`HabitData::ensure_year`] or
    /// `month` is not in `0..12`.
    pub fn toggle_day(&self, year: i32, month: u32, day: u32) -> HabitData {
        let mut next = self.clone();
        let year_data = next
            .years
            .get_mut(&year)
            .expect("year must be initialized before toggling a day");

        let marked = Rc::make_mut(year_data).month_mut(month).toggle(day);
        log::debug!(
            "Toggled {}-{:02}-{:02}, marked: {}",
            year,
            month + 1,
            day,
            marked
        );

        next
    }

    /// Snapshot with `year` replaced by twelve empty months.
    pub fn reset_year(&self, year: i32) -> HabitData {
        let mut next = self.clone();
        next.years.insert(year, Rc::new(YearData::new()));
        next
    }

    fn insert_year(&mut self, year: i32, data: YearData) {
        self.years.insert(year, Rc::new(data));
    }
}
