use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::ritual::{Explanation, RitualRates};

const SOURCES: &[&str] = &[
    "HR. Tirmidhi - whoever reads a letter of the Qur'an earns a good deed, multiplied tenfold",
    "HR. Bukhari - the deeds most loved by Allah are the most constant, even if small",
    "HR. Muslim - read the Qur'an, for it will come as an intercessor for its companions",
];

/// Reading plan to complete the Qur'an a number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KhatamResult {
    pub pages_per_session: u64,
    pub total_pages: u64,
    pub total_sessions: u64,
    pub explanation: Explanation,
}

pub fn khatam_pacing(
    rates: &RitualRates,
    target_completions: u32,
    total_days: u32,
    sessions_per_day: u32,
) -> Result<KhatamResult> {
    let total_pages = u64::from(rates.mushaf_pages) * u64::from(target_completions);
    let total_sessions = u64::from(total_days) * u64::from(sessions_per_day);
    if total_sessions == 0 {
        return Err(EngineError::ZeroSessions);
    }

    let pages_per_session = total_pages.div_ceil(total_sessions);
    debug!(
        "khatam: pages={} sessions={} per_session={}",
        total_pages, total_sessions, pages_per_session
    );

    let logic = format!(
        "To complete the Qur'an {} time(s) in {} day(s), {} x {} = {} pages must be read. \
         Reading {} time(s) a day gives {} sessions, so {} pages / {} sessions rounds up to {} pages per sitting.",
        target_completions,
        total_days,
        target_completions,
        rates.mushaf_pages,
        total_pages,
        sessions_per_day,
        total_sessions,
        total_pages,
        total_sessions,
        pages_per_session,
    );

    Ok(KhatamResult {
        pages_per_session,
        total_pages,
        total_sessions,
        explanation: Explanation::new(logic, SOURCES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_khatam_in_a_month() {
        let r = khatam_pacing(&RitualRates::default(), 1, 30, 5).unwrap();
        assert_eq!(r.total_pages, 604);
        assert_eq!(r.total_sessions, 150);
        assert_eq!(r.pages_per_session, 5);
    }

    #[test]
    fn exact_division_does_not_round_up() {
        let r = khatam_pacing(&RitualRates::default(), 1, 604, 1).unwrap();
        assert_eq!(r.pages_per_session, 1);
    }

    #[test]
    fn zero_completions_needs_no_reading() {
        let r = khatam_pacing(&RitualRates::default(), 0, 10, 1).unwrap();
        assert_eq!(r.pages_per_session, 0);
    }

    #[test]
    fn no_sessions_is_an_error() {
        let rates = RitualRates::default();
        assert_eq!(khatam_pacing(&rates, 1, 0, 5).unwrap_err(), EngineError::ZeroSessions);
        assert_eq!(khatam_pacing(&rates, 1, 30, 0).unwrap_err(), EngineError::ZeroSessions);
    }
}
