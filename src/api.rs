//! Primitive-typed entry points for callers that only deal in numbers and strings.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{EngineError, Result};
use crate::hijri::HijriConversion;
use crate::models::{GeoMoment, HijriDate};
use crate::prayer_times::{self, CalculationMethod, Madhab};
use crate::ritual::{
    self, FidyahResult, KhatamResult, LastThirdResult, RitualRates, WarisResult, ZakatResult,
};

/// Event name → "HH:MM" for one day, using the Shafi'i Asr convention.
pub fn compute_day(
    method_name: &str,
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<BTreeMap<String, String>> {
    compute_day_with_madhab(
        method_name,
        Madhab::Shafi.as_str(),
        year,
        month,
        day,
        latitude,
        longitude,
        utc_offset_hours,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn compute_day_with_madhab(
    method_name: &str,
    madhab: &str,
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<BTreeMap<String, String>> {
    let method: CalculationMethod = method_name.parse()?;
    let madhab: Madhab = madhab.parse()?;
    let geo = GeoMoment::new(year, month, day, latitude, longitude, utc_offset_hours)?;
    let times = prayer_times::compute_day(&method.profile(), madhab, &geo)?;
    Ok(times.to_map())
}

pub fn to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate> {
    crate::hijri::to_hijri(year, month, day)
}

/// Tabular Hijri date with the derivation, no sighting offset.
pub fn explain_hijri(year: i32, month: u32, day: u32) -> Result<HijriConversion> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EngineError::InvalidInput(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
    })?;
    crate::hijri::explain_hijri(date, 0)
}

pub fn waris(total_estate: f64, sons: u32, daughters: u32) -> Result<WarisResult> {
    ritual::waris(total_estate, sons, daughters)
}

pub fn zakat(gold_price_per_gram: f64, cash_savings: f64, gold_grams: f64) -> Result<ZakatResult> {
    ritual::zakat(&RitualRates::default(), gold_price_per_gram, cash_savings, gold_grams)
}

pub fn last_third_of_night(maghrib: &str, fajr: &str) -> Result<LastThirdResult> {
    ritual::last_third_of_night(maghrib, fajr)
}

pub fn khatam_pacing(
    target_completions: u32,
    total_days: u32,
    sessions_per_day: u32,
) -> Result<KhatamResult> {
    ritual::khatam_pacing(
        &RitualRates::default(),
        target_completions,
        total_days,
        sessions_per_day,
    )
}

pub fn fidyah_and_qadha(missed_days: u32, category: &str) -> FidyahResult {
    ritual::fidyah_and_qadha(&RitualRates::default(), missed_days, category)
}
