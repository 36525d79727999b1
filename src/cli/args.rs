use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hisab",
    version,
    about = "Prayer times, Hijri dates and Islamic worship calculators"
)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show prayer times for a day (defaults to today at the configured location)
    Times {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lng: Option<f64>,
        /// UTC offset: "8", "+5:30", "-3.5"
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<String>,
        /// Calculation method (MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari)
        #[arg(long)]
        method: Option<String>,
        /// Asr convention: Shafi or Hanafi
        #[arg(long)]
        madhab: Option<String>,
    },
    /// Convert a Gregorian date to the Hijri calendar
    Hijri {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
        /// Days to shift for local moon sighting (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i32>,
    },
    /// Divide an estate between sons and daughters
    Waris {
        /// Total estate
        estate: f64,
        #[arg(long, default_value = "0")]
        sons: u32,
        #[arg(long, default_value = "0")]
        daughters: u32,
    },
    /// Check whether zakat on savings and gold is due
    Zakat {
        /// Gold price per gram
        #[arg(long)]
        gold_price: f64,
        /// Cash savings
        #[arg(long, default_value = "0")]
        savings: f64,
        /// Gold held, in grams
        #[arg(long, default_value = "0")]
        gold_grams: f64,
    },
    /// Find the start of the last third of the night
    Tahajjud {
        /// Maghrib time, HH:MM
        maghrib: String,
        /// Next morning's Fajr time, HH:MM
        fajr: String,
    },
    /// Plan pages per sitting to finish the Qur'an
    Khatam {
        /// Number of complete readings
        #[arg(long, default_value = "1")]
        times: u32,
        /// Days available
        #[arg(long)]
        days: u32,
        /// Reading sessions per day
        #[arg(long, default_value = "5")]
        per_day: u32,
    },
    /// Qadha days and fidyah owed for missed fasts
    Fidyah {
        /// Number of missed days
        days: u32,
        /// Reason the days were missed
        #[arg(long, default_value = "illness")]
        category: String,
    },
    /// List the supported calculation methods
    Methods,
    /// Show or initialise the config file
    Config {
        /// Write a config file with default values
        #[arg(long)]
        init: bool,
    },
}
