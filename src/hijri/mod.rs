//! Gregorian → Hijri conversion using the tabular "Kuwaiti" algorithm.
//!
//! The calendar is arithmetic, not observational: it can differ by a day from
//! the dates announced after moon sighting. Use [`to_hijri_with_offset`] to
//! shift for a local sighting authority.

use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::astro::julian_day;
use crate::error::{EngineError, Result};
use crate::models::{HijriDate, hijri_month_name};
use crate::ritual::Explanation;
use crate::utils::format::format_amount;

/// Julian Day of the Hijri epoch as used by the Kuwaiti tables.
pub const HIJRI_EPOCH_JD: f64 = 1_948_084.0;

/// Days in one 30-year intercalation cycle.
const CYCLE_DAYS: f64 = 10_631.0;

/// Mean tabular year: 10631 / 30 days.
const MEAN_YEAR: f64 = CYCLE_DAYS / 30.0;

const SHIFT: f64 = 8.01 / 60.0;

/// Years of the 30-year cycle that have 355 days instead of 354.
pub const LEAP_YEARS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

const SOURCES: &[&str] = &[
    "QS. At-Taubah 9:36 - the number of months with Allah is twelve, ordained on the day He created the heavens and the earth",
    "QS. Al-Baqarah 2:189 - say: the new moons are signs to mark fixed times for people and for Hajj",
    "Islamic history - the Hijri calendar was instituted under Caliph Umar ibn al-Khattab, taking the Hijra as its first year",
];

/// A Hijri date together with how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HijriConversion {
    pub gregorian: NaiveDate,
    pub offset_days: i32,
    pub hijri: HijriDate,
    pub explanation: Explanation,
}

pub fn to_hijri(year: i32, month: u32, day: u32) -> Result<HijriDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EngineError::InvalidInput(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
    })?;
    Ok(hijri_from_date(date))
}

/// Convert `date` shifted by `offset_days`. A negative offset suits regions
/// that start the month a day after the tabular calendar.
pub fn to_hijri_with_offset(date: NaiveDate, offset_days: i32) -> Result<HijriDate> {
    Ok(hijri_from_date(shift(date, offset_days)?))
}

fn shift(date: NaiveDate, offset_days: i32) -> Result<NaiveDate> {
    date.checked_add_signed(Duration::days(i64::from(offset_days)))
        .ok_or_else(|| {
            EngineError::InvalidInput(format!("Hijri offset {} out of range for {}", offset_days, date))
        })
}

/// Same as [`to_hijri_with_offset`], with the derivation spelled out.
pub fn explain_hijri(date: NaiveDate, offset_days: i32) -> Result<HijriConversion> {
    let adjusted = shift(date, offset_days)?;
    let hijri = hijri_from_date(adjusted);

    let days_since_hijra =
        julian_day(adjusted.year(), adjusted.month(), adjusted.day()) - julian_day(622, 7, 16);
    let cycle_year = (hijri.year - 1).rem_euclid(30) + 1;
    let leap = LEAP_YEARS.contains(&cycle_year);
    debug!(
        "hijri explain {}: offset={} days={} cycle_year={} leap={}",
        date, offset_days, days_since_hijra, cycle_year, leap
    );

    let mut logic = format!("The Gregorian date {} was entered. ", date.format("%d-%m-%Y"));
    if offset_days != 0 {
        logic.push_str(&format!(
            "A moon-sighting offset of {:+} day(s) moves it to {}. ",
            offset_days,
            adjusted.format("%d-%m-%Y")
        ));
    }
    logic.push_str(&format!(
        "The Kuwaiti algorithm counts {} days from the Hijra epoch, 16 July 622, in whole 30-year cycles \
         of 10,631 days, where years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 are leap years of 355 days. \
         {} H is year {} of its cycle, a {} year of {} days, and the date converts to {}.",
        format_amount(days_since_hijra),
        hijri.year,
        cycle_year,
        if leap { "leap" } else { "common" },
        if leap { 355 } else { 354 },
        hijri.formatted(),
    ));

    Ok(HijriConversion {
        gregorian: date,
        offset_days,
        hijri,
        explanation: Explanation::new(logic, SOURCES),
    })
}

pub fn hijri_from_date(date: NaiveDate) -> HijriDate {
    let jd = julian_day(date.year(), date.month(), date.day());

    // Whole civil days since the epoch
    let mut z = (jd - HIJRI_EPOCH_JD).floor();
    let cycle = (z / CYCLE_DAYS).floor();
    z -= CYCLE_DAYS * cycle;

    let j = ((z - SHIFT) / MEAN_YEAR).floor();
    let year = 30.0 * cycle + j;
    z -= (j * MEAN_YEAR + SHIFT).floor();

    let month = ((z + 28.5001) / 29.5).floor().min(12.0);
    let day = z - (29.5001 * month - 29.0).floor();

    trace!(
        "hijri {}: jd={} cycle={} j={} month={} day={}",
        date, jd, cycle, j, month, day
    );

    let month = month as u32;
    HijriDate {
        year: year as i64,
        month,
        day: day as u32,
        month_name: hijri_month_name(month).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_of_ramadan_1447() {
        let h = to_hijri(2026, 2, 18).unwrap();
        assert_eq!((h.day, h.month_name.as_str(), h.year), (1, "Ramadan", 1447));
        assert_eq!(h.month, 9);
    }

    #[test]
    fn published_correspondences() {
        let cases = [
            ((2024, 3, 11), (1445, 9, 1)),
            ((2023, 7, 19), (1445, 1, 1)),
            ((2026, 2, 17), (1447, 8, 29)),
            ((2025, 3, 30), (1446, 9, 30)),
            ((2000, 1, 1), (1420, 9, 24)),
        ];
        for ((y, m, d), (hy, hm, hd)) in cases {
            let h = to_hijri(y, m, d).unwrap();
            assert_eq!((h.year, h.month, h.day), (hy, hm, hd), "{}-{}-{}", y, m, d);
        }
    }

    #[test]
    fn epoch_is_first_of_muharram_year_one() {
        // 16 July 622 in the Julian calendar.
        let h = to_hijri(622, 7, 16).unwrap();
        assert_eq!((h.year, h.month, h.day), (1, 1, 1));
    }

    #[test]
    fn gregorian_reform_gap_is_one_day() {
        let before = to_hijri(1582, 10, 4).unwrap();
        let after = to_hijri(1582, 10, 15).unwrap();
        assert_eq!((before.year, before.month, before.day), (990, 9, 16));
        assert_eq!((after.year, after.month, after.day), (990, 9, 17));
    }

    #[test]
    fn thirtieth_day_is_not_reported_as_zero() {
        let mut date = ymd(1990, 1, 1);
        let end = ymd(2010, 1, 1);
        while date < end {
            let h = hijri_from_date(date);
            assert!((1..=30).contains(&h.day), "{} -> {:?}", date, h);
            assert!((1..=12).contains(&h.month));
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn offset_shifts_by_whole_days() {
        let base = ymd(2026, 2, 18);
        assert_eq!(to_hijri_with_offset(base, 0).unwrap().day, 1);
        let behind = to_hijri_with_offset(base, -1).unwrap();
        assert_eq!((behind.month, behind.day), (8, 29));
        assert_eq!(to_hijri_with_offset(base, 1).unwrap().day, 2);
    }

    #[test]
    fn explanation_names_the_cycle_year_and_result() {
        let c = explain_hijri(ymd(2026, 2, 18), 0).unwrap();
        assert_eq!(c.hijri, hijri_from_date(ymd(2026, 2, 18)));
        let logic = &c.explanation.logic;
        assert!(logic.contains("18-02-2026"), "{}", logic);
        assert!(logic.contains("512,650 days"), "{}", logic);
        assert!(logic.contains("1447 H is year 7 of its cycle, a leap year of 355 days"), "{}", logic);
        assert!(logic.ends_with("converts to 1 Ramadan 1447 H."), "{}", logic);
        assert!(!logic.contains("offset"));
        assert_eq!(c.explanation.sources.len(), 3);
    }

    #[test]
    fn explanation_mentions_the_sighting_offset() {
        let c = explain_hijri(ymd(2026, 2, 18), -1).unwrap();
        assert_eq!((c.hijri.month, c.hijri.day), (8, 29));
        assert!(c.explanation.logic.contains("offset of -1 day(s) moves it to 17-02-2026"));
        assert!(c.explanation.logic.contains("year 7 of its cycle"));
    }

    #[test]
    fn common_years_are_labelled() {
        let c = explain_hijri(ymd(2025, 3, 30), 0).unwrap();
        assert!(c.explanation.logic.contains("1446 H is year 6 of its cycle, a common year of 354 days"));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(matches!(to_hijri(2025, 2, 29), Err(EngineError::InvalidInput(_))));
        assert!(matches!(to_hijri(2025, 13, 1), Err(EngineError::InvalidInput(_))));
    }
}
