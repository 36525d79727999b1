use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PrayerEvent;

/// Errors surfaced by the calculation engine. None of them are recovered
/// internally; the caller decides what to show or which default to fall back to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown calculation method: '{0}'")]
    UnknownMethod(String),

    #[error("Unknown madhab: '{0}'")]
    UnknownMadhab(String),

    #[error("{event} cannot be computed at latitude {latitude} on {date}: the sun never reaches the required altitude")]
    PolarRegion {
        event: PrayerEvent,
        latitude: f64,
        date: NaiveDate,
    },

    #[error("No heirs given: at least one son or daughter is required")]
    NoHeirs,

    #[error("Total inheritance shares is zero")]
    ZeroShare,

    #[error("Total reading sessions is zero: days and sessions per day must both be positive")]
    ZeroSessions,
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Reject NaN, infinities and negative amounts.
pub(crate) fn ensure_amount(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(EngineError::InvalidInput(format!("{} must be a finite number", name)));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidInput(format!(
            "{} must not be negative (got {})",
            name, value
        )));
    }
    Ok(value)
}
