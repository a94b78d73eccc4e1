use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::{HabitData, MonthData, YearData};
use crate::calendar;

// On disk a completed day is `"<day>": true`. Other values are tolerated on
// input but never written.
type RawMonth = BTreeMap<u32, bool>;
type RawYear = BTreeMap<u32, RawMonth>;
type RawHabitData = BTreeMap<i32, RawYear>;

impl Serialize for MonthData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for day in self.days() {
            map.serialize_entry(&day, &true)?;
        }
        map.end()
    }
}

impl Serialize for YearData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.months.len()))?;
        for (month, data) in self.months() {
            map.serialize_entry(&month, data)?;
        }
        map.end()
    }
}

impl Serialize for HabitData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.years.len()))?;
        for (year, data) in self.years() {
            map.serialize_entry(&year, data)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HabitData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHabitData::deserialize(deserializer)?;
        Ok(HabitData::from_raw(raw))
    }
}

impl HabitData {
    // Months and days that do not exist in the calendar are dropped so they
    // can never be toggled, counted or exported.
    fn from_raw(raw: RawHabitData) -> HabitData {
        let mut data = HabitData::new();

        for (year, raw_year) in raw {
            let mut year_data = YearData::new();

            for (month, raw_month) in raw_year {
                if month >= calendar::MONTHS_PER_YEAR {
                    log::warn!("Ignoring unknown month {} of year {}", month, year);
                    continue;
                }

                let days = raw_month
                    .into_iter()
                    .filter(|(_, marked)| *marked)
                    .map(|(day, _)| day)
                    .filter(|day| {
                        let valid = calendar::is_valid_day(year, month, *day);
                        if !valid {
                            log::warn!(
                                "Ignoring day {} of {} {}: no such date",
                                day,
                                calendar::month_name(month),
                                year
                            );
                        }
                        valid
                    })
                    .collect::<MonthData>();

                *year_data.month_mut(month) = days;
            }

            data.insert_year(year, year_data);
        }

        data
    }
}
