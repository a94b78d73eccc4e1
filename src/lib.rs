pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
pub mod streak;
pub mod tracker;

pub use error::{Error, ErrorKind, Result};
pub use model::{HabitData, MonthData, YearData};
pub use store::{Backend, FileBackend, HabitStore, MemoryBackend};
pub use tracker::Tracker;
