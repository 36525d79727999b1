use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A calendar date at a place, with the fixed UTC offset its clock runs on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoMoment {
    pub date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
}

impl GeoMoment {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            EngineError::InvalidInput(format!("Invalid date: {}-{:02}-{:02}", year, month, day))
        })?;
        Self::on(date, latitude, longitude, utc_offset_hours)
    }

    pub fn on(
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        validate_location(latitude, longitude, utc_offset_hours)?;
        Ok(Self {
            date,
            latitude,
            longitude,
            utc_offset_hours,
        })
    }
}

pub(crate) fn validate_location(latitude: f64, longitude: f64, utc_offset_hours: f64) -> Result<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(EngineError::InvalidInput(format!(
            "Latitude must be within [-90, 90] (got {})",
            latitude
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(EngineError::InvalidInput(format!(
            "Longitude must be within [-180, 180] (got {})",
            longitude
        )));
    }
    if !utc_offset_hours.is_finite() || !(-14.0..=14.0).contains(&utc_offset_hours) {
        return Err(EngineError::InvalidInput(format!(
            "UTC offset must be within [-14, 14] hours (got {})",
            utc_offset_hours
        )));
    }
    Ok(())
}
