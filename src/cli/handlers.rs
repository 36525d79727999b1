use anyhow::{Context, Result, anyhow};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::path::Path;

use hisab::config::AppConfig;
use hisab::hijri::explain_hijri;
use hisab::prayer_times::{CalculationMethod, IshaRule, MethodProfile};
use hisab::ritual::{self, Explanation};
use hisab::utils::format::{format_amount, format_duration_secs, format_quantity, format_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

const MAX_TZ_MINUTES: i32 = 14 * 60;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Serializing result")?);
    Ok(())
}

fn print_explanation(explanation: &Explanation) {
    println!();
    println!("  {}", explanation.logic);
    println!();
    for source in &explanation.sources {
        println_colored!(DIM, "  · {}", source);
    }
    println!();
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub struct TimesArgs {
    pub date: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub tz: Option<String>,
    pub method: Option<String>,
    pub madhab: Option<String>,
}

#[derive(Serialize)]
struct TimesReport<'a> {
    date: String,
    location: &'a str,
    method: &'a str,
    madhab: &'a str,
    times: std::collections::BTreeMap<String, String>,
}

pub fn handle_times(config: &AppConfig, args: TimesArgs, json: bool) -> Result<()> {
    let mut config = config.clone();
    let custom_location = args.lat.is_some() || args.lng.is_some();
    if let Some(lat) = args.lat {
        config.salah.latitude = lat;
    }
    if let Some(lng) = args.lng {
        config.salah.longitude = lng;
    }
    if let Some(tz) = &args.tz {
        config.salah.utc_offset_hours = f64::from(parse_tz_offset(tz)?) / 60.0;
    }
    if let Some(method) = args.method {
        config.salah.calc_method = method;
    }
    if let Some(madhab) = args.madhab {
        config.salah.madhab = madhab;
    }
    if custom_location {
        config.salah.location_name = format!(
            "{:.4}, {:.4}",
            config.salah.latitude, config.salah.longitude
        );
    }

    let calc = config.calculator()?;
    // "Now" on the clock the timetable is computed for, not the machine's zone.
    let now = clock_at_offset(Utc::now().naive_utc(), calc.utc_offset_hours);
    let today = now.date();
    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let times = calc.times_for_date(date)?;

    if json {
        return print_json(&TimesReport {
            date: date.format("%Y-%m-%d").to_string(),
            location: &config.salah.location_name,
            method: calc.method.as_str(),
            madhab: calc.madhab.as_str(),
            times: times.to_map(),
        });
    }

    println!();
    println_colored!(
        GOLD,
        "  Prayer Times — {} ({})",
        config.salah.location_name,
        date.format("%Y-%m-%d")
    );
    println_colored!(
        DIM,
        "  {} · {} · UTC{}",
        calc.method.description(),
        calc.madhab.as_str(),
        format_tz_offset((calc.utc_offset_hours * 60.0).round() as i32)
    );
    println!();

    let now_time = now.time();
    for (event, time) in times.iter() {
        if date == today && time < now_time {
            println_colored!(DIM, "  {:<10}  {}", event.display_name(), format_time(time));
        } else {
            println_colored!(BOLD, "  {:<10}  {}", event.display_name(), format_time(time));
        }
    }

    if date == today {
        let (next, secs) = calc.next_prayer(today, now_time)?;
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            next.display_name(),
            format_duration_secs(secs)
        );
    }
    println!();
    Ok(())
}

// ─── Hijri ───────────────────────────────────────────────────────────────────

pub fn handle_hijri(
    config: &AppConfig,
    date: Option<&str>,
    offset: Option<i32>,
    json: bool,
) -> Result<()> {
    let date = match date {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let offset = offset.unwrap_or(config.salah.hijri_offset);
    let conversion = explain_hijri(date, offset)?;

    if json {
        return print_json(&conversion);
    }
    println!();
    println_colored!(GOLD, "  {}", conversion.hijri.formatted());
    if offset != 0 {
        println_colored!(
            DIM,
            "  {} (sighting offset {:+} day)",
            date.format("%d %B %Y"),
            offset
        );
    } else {
        println_colored!(DIM, "  {}", date.format("%d %B %Y"));
    }
    print_explanation(&conversion.explanation);
    Ok(())
}

// ─── Calculators ─────────────────────────────────────────────────────────────

pub fn handle_waris(estate: f64, sons: u32, daughters: u32, json: bool) -> Result<()> {
    let result = ritual::waris(estate, sons, daughters)?;
    if json {
        return print_json(&result);
    }
    println!();
    println_colored!(GOLD, "  Inheritance — {}", format_amount(result.total_estate));
    println!();
    println_colored!(BOLD, "  {:<16}  {}", "Shares", result.total_shares);
    println_colored!(BOLD, "  {:<16}  {}", "One share", format_amount(result.share_unit));
    if sons > 0 {
        println_colored!(GREEN, "  {:<16}  {}", "Each son", format_amount(result.son_share));
    }
    if daughters > 0 {
        println_colored!(GREEN, "  {:<16}  {}", "Each daughter", format_amount(result.daughter_share));
    }
    print_explanation(&result.explanation);
    Ok(())
}

pub fn handle_zakat(
    config: &AppConfig,
    gold_price: f64,
    savings: f64,
    gold_grams: f64,
    json: bool,
) -> Result<()> {
    let result = ritual::zakat(&config.rates, gold_price, savings, gold_grams)?;
    if json {
        return print_json(&result);
    }
    println!();
    println_colored!(GOLD, "  Zakat al-Mal");
    println!();
    println_colored!(BOLD, "  {:<14}  {}", "Nisab", format_amount(result.nisab_threshold));
    println_colored!(BOLD, "  {:<14}  {}", "Total wealth", format_amount(result.total_wealth));
    if result.is_obligatory {
        println_colored!(AMBER, "  {:<14}  {}", "Zakat due", format_amount(result.due_amount));
    } else {
        println_colored!(GREEN, "  {:<14}  {}", "Zakat due", "none — below nisab");
    }
    print_explanation(&result.explanation);
    Ok(())
}

pub fn handle_tahajjud(maghrib: &str, fajr: &str, json: bool) -> Result<()> {
    let result = ritual::last_third_of_night(maghrib, fajr)?;
    if json {
        return print_json(&result);
    }
    println!();
    println_colored!(GOLD, "  Last third of the night begins at {}", result.time);
    println_colored!(
        DIM,
        "  Night length {}h {}m",
        result.total_duration_hours,
        result.total_duration_minutes
    );
    print_explanation(&result.explanation);
    Ok(())
}

pub fn handle_khatam(
    config: &AppConfig,
    times: u32,
    days: u32,
    per_day: u32,
    json: bool,
) -> Result<()> {
    let result = ritual::khatam_pacing(&config.rates, times, days, per_day)?;
    if json {
        return print_json(&result);
    }
    println!();
    println_colored!(GOLD, "  {} pages per sitting", result.pages_per_session);
    println_colored!(
        DIM,
        "  {} pages over {} sessions",
        result.total_pages,
        result.total_sessions
    );
    print_explanation(&result.explanation);
    Ok(())
}

pub fn handle_fidyah(config: &AppConfig, days: u32, category: &str, json: bool) -> Result<()> {
    let result = ritual::fidyah_and_qadha(&config.rates, days, category);
    if json {
        return print_json(&result);
    }
    println!();
    println_colored!(GOLD, "  Fidyah & Qadha — {}", result.category);
    println!();
    println_colored!(BOLD, "  {:<14}  {}", "Qadha days", result.qadha_days);
    println_colored!(BOLD, "  {:<14}  {} kg", "Rice", format_quantity(result.fidyah_rice_kg));
    println_colored!(BOLD, "  {:<14}  {}", "Meal money", format_amount(result.fidyah_money));
    print_explanation(&result.explanation);
    Ok(())
}

// ─── Methods ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct MethodRow {
    name: &'static str,
    description: &'static str,
    profile: MethodProfile,
}

pub fn handle_methods(json: bool) -> Result<()> {
    if json {
        let rows: Vec<MethodRow> = CalculationMethod::ALL
            .iter()
            .map(|m| MethodRow {
                name: m.as_str(),
                description: m.description(),
                profile: m.profile(),
            })
            .collect();
        return print_json(&rows);
    }

    println!();
    println_colored!(GOLD, "  Calculation methods");
    println!();
    for method in CalculationMethod::ALL {
        let profile = method.profile();
        let isha = match profile.isha {
            IshaRule::Angle(a) => format!("{}°", a),
            IshaRule::MinutesAfterMaghrib(m) => format!("{} min", m),
        };
        let maghrib = profile
            .maghrib_angle
            .map(|a| format!("{}°", a))
            .unwrap_or_else(|| "sunset".to_string());
        println!(
            "  {:<8}  fajr {:>5}°  isha {:>7}  maghrib {:>6}  {}",
            method.as_str(),
            profile.fajr_angle,
            isha,
            maghrib,
            method.description()
        );
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, path: &Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            return Err(anyhow!(
                "Config already exists at {:?}; edit it or remove it first",
                path
            ));
        }
        AppConfig::default().save_to(path)?;
        println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
        return Ok(());
    }

    println_colored!(DIM, "  # {}", path.display());
    print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Parse a UTC offset string into total minutes.
/// Accepts: "5:30", "+5:30", "-5:30", "5", "+5", "5.5"
fn parse_tz_offset(input: &str) -> Result<i32> {
    let s = input.trim_start_matches('+');
    let negative = s.starts_with('-');
    let s = s.trim_start_matches('-');
    let sign = if negative { -1 } else { 1 };

    let minutes = if s.contains(':') {
        let mut parts = s.splitn(2, ':');
        let hours: i32 = parts.next().unwrap_or("0").parse()?;
        let mins: i32 = parts.next().unwrap_or("0").parse()?;
        if !(0..60).contains(&mins) {
            return Err(anyhow!("Invalid minutes in UTC offset '{}'", input));
        }
        hours.checked_mul(60).and_then(|h| h.checked_add(mins))
    } else if s.contains('.') {
        let hours: f64 = s.parse()?;
        (hours.is_finite() && hours.abs() <= 24.0).then(|| (hours * 60.0).round() as i32)
    } else {
        let hours: i32 = s.parse()?;
        hours.checked_mul(60)
    };

    minutes
        .filter(|m| *m <= MAX_TZ_MINUTES)
        .map(|m| sign * m)
        .ok_or_else(|| anyhow!("UTC offset '{}' must be within ±14 hours", input))
}

/// Wall-clock time at a fixed UTC offset.
fn clock_at_offset(utc: NaiveDateTime, utc_offset_hours: f64) -> NaiveDateTime {
    utc + Duration::minutes((utc_offset_hours * 60.0).round() as i64)
}

/// Format total minutes as "+H:MM" string
fn format_tz_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "+" };
    let abs = minutes.abs();
    let h = abs / 60;
    let m = abs % 60;
    if m == 0 {
        format!("{}{}", sign, h)
    } else {
        format!("{}{}:{:02}", sign, h, m)
    }
}
