mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers::{self, TimesArgs};
use hisab::config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::config_path()?,
    };
    // Loaded once; every handler gets it read-only.
    let config = AppConfig::load_from(&config_path).context("Loading config")?;
    let json = cli.json;

    match cli.command {
        Commands::Times {
            date,
            lat,
            lng,
            tz,
            method,
            madhab,
        } => handlers::handle_times(
            &config,
            TimesArgs {
                date,
                lat,
                lng,
                tz,
                method,
                madhab,
            },
            json,
        )?,
        Commands::Hijri { date, offset } => {
            handlers::handle_hijri(&config, date.as_deref(), offset, json)?
        }
        Commands::Waris {
            estate,
            sons,
            daughters,
        } => handlers::handle_waris(estate, sons, daughters, json)?,
        Commands::Zakat {
            gold_price,
            savings,
            gold_grams,
        } => handlers::handle_zakat(&config, gold_price, savings, gold_grams, json)?,
        Commands::Tahajjud { maghrib, fajr } => handlers::handle_tahajjud(&maghrib, &fajr, json)?,
        Commands::Khatam {
            times,
            days,
            per_day,
        } => handlers::handle_khatam(&config, times, days, per_day, json)?,
        Commands::Fidyah { days, category } => {
            handlers::handle_fidyah(&config, days, &category, json)?
        }
        Commands::Methods => handlers::handle_methods(json)?,
        Commands::Config { init } => handlers::handle_config(&config, &config_path, init)?,
    }

    Ok(())
}
