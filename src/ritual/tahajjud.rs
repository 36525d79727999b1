use chrono::{Duration, NaiveTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::ritual::Explanation;

const SOURCES: &[&str] = &[
    "HR. Bukhari & Muslim - our Lord descends to the lowest heaven in the last third of every night",
    "QS. Al-Isra 17:79 - and in part of the night, pray tahajjud as an extra worship",
    "QS. Al-Muzzammil 73:6 - rising at night is firmer for the soul and clearer in speech",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastThirdResult {
    /// Clock time at which the last third begins, "HH:MM".
    pub time: String,
    /// Whole hours of the night, Maghrib to Fajr.
    pub total_duration_hours: i64,
    /// Minutes beyond the whole hours.
    pub total_duration_minutes: i64,
    pub explanation: Explanation,
}

/// Start of the last third of the night running from `maghrib` to the next
/// morning's `fajr`. Both are "HH:MM"; Fajr is always taken on the following day.
pub fn last_third_of_night(maghrib: &str, fajr: &str) -> Result<LastThirdResult> {
    let maghrib_time = parse_clock("maghrib", maghrib)?;
    let fajr_time = parse_clock("fajr", fajr)?;

    let night = Duration::days(1) - (maghrib_time - fajr_time);
    let third = night / 3;
    let start = fajr_time - third;
    debug!("last third: night={}s third={}s start={}", night.num_seconds(), third.num_seconds(), start);

    let time = start.format("%H:%M").to_string();
    let total_duration_hours = night.num_hours();
    let total_duration_minutes = night.num_minutes() % 60;

    let logic = format!(
        "The night runs from Maghrib ({}) to Fajr ({}), {} hours {} minutes in total. \
         Dividing it into three equal parts and taking the last one before Fajr, \
         the last third of the night begins at {}.",
        maghrib_time.format("%H:%M"),
        fajr_time.format("%H:%M"),
        total_duration_hours,
        total_duration_minutes,
        time,
    );

    Ok(LastThirdResult {
        time,
        total_duration_hours,
        total_duration_minutes,
        explanation: Explanation::new(logic, SOURCES),
    })
}

fn parse_clock(name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
        EngineError::InvalidInput(format!("{} time '{}' is not HH:MM ({})", name, value, e))
    })
}
