extern crate habitual as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar;
use lib::error::{Error, ErrorKind};
use lib::{FileBackend, HabitStore, Tracker};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "hbt",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Habitual - track one daily habit through the year."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        short = "y",
        long = "year",
        help = "year to work on, defaults to the current year"
    )]
    pub year: Option<i32>,

    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "show completed days and best streak of every month")]
    Show,

    #[structopt(about = "mark or unmark a day")]
    Toggle {
        #[structopt(help = "month, 1 to 12")]
        month: u32,
        #[structopt(help = "day of month")]
        day: u32,
    },

    #[structopt(about = "mark or unmark today")]
    Today,

    #[structopt(about = "write the year as markdown table")]
    Export {
        #[structopt(
            short = "o",
            long = "output",
            help = "directory to write to, defaults to `export_dir` of the config",
            parse(from_os_str)
        )]
        output: Option<PathBuf>,
    },

    #[structopt(about = "clear all marked days of the year")]
    Reset {
        #[structopt(long = "yes", help = "confirm the reset")]
        yes: bool,

        #[structopt(short = "e", long = "export", help = "export the year before resetting")]
        export: bool,
    },
}

fn show(tracker: &Tracker<FileBackend>) {
    let current_month = if tracker.year() == calendar::current_year() {
        Some(calendar::current_month())
    } else {
        None
    };

    println!("Habit tracker {}", tracker.year());
    for month in 0..calendar::MONTHS_PER_YEAR {
        let marker = if current_month == Some(month) { '>' } else { ' ' };
        println!(
            "{} {:<10} {:>2}/{:<2} days  streak {}",
            marker,
            calendar::month_name(month),
            tracker.month(month).len(),
            calendar::days_in_month(tracker.year(), month),
            tracker.streak(month)
        );
    }
}

fn toggle(tracker: &mut Tracker<FileBackend>, month: u32, day: u32) -> lib::Result<()> {
    let marked = tracker.toggle(month, day)?;
    println!(
        "{} {} {}: {}",
        calendar::month_name(month),
        day,
        tracker.year(),
        if marked { "done" } else { "not done" }
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file.or_else(|| config.log_file.clone()) {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let year = args.year.unwrap_or_else(calendar::current_year);
    let store = HabitStore::from_path(&config.data_file);
    let mut tracker = Tracker::open(store, year);

    match args.command.unwrap_or(Command::Show) {
        Command::Show => show(&tracker),
        Command::Toggle { month, day } => {
            let month = month.checked_sub(1).ok_or_else(|| {
                Error::new(ErrorKind::InvalidDate, "months are numbered from 1 to 12")
            })?;
            toggle(&mut tracker, month, day)?;
        }
        Command::Today => {
            let (today_year, month, day) = calendar::today();
            if today_year != year {
                return Err(Error::new(
                    ErrorKind::InvalidDate,
                    &format!("today is not part of {}", year),
                )
                .into());
            }
            toggle(&mut tracker, month, day)?;
        }
        Command::Export { output } => {
            let dir = output.unwrap_or_else(|| config.export_dir.clone());
            let path = tracker.export_to(&dir)?;
            println!("Exported {} to {}", year, path.display());
        }
        Command::Reset { yes, export } => {
            if !yes {
                return Err(format!(
                    "resetting clears every marked day of {}; pass --yes to confirm",
                    year
                )
                .into());
            }
            if export {
                let path = tracker.export_to(&config.export_dir)?;
                println!("Exported {} to {}", year, path.display());
            }
            tracker.reset()?;
            println!("Reset {}", year);
        }
    }

    Ok(())
}
