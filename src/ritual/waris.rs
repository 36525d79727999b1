use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result, ensure_amount};
use crate::ritual::Explanation;
use crate::utils::format::format_amount;

const SOURCES: &[&str] = &[
    "QS. An-Nisa 4:11 - a son's share equals that of two daughters",
    "QS. An-Nisa 4:7 - men and women both have a share of what parents and kin leave",
    "HR. Bukhari & Muslim - give the fixed shares to those entitled, the rest to the nearest male relative",
];

/// Division of an estate among children under the 2:1 rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarisResult {
    pub total_estate: f64,
    pub sons: u32,
    pub daughters: u32,
    pub total_shares: u32,
    /// Value of one share.
    pub share_unit: f64,
    /// Amount each son receives.
    pub son_share: f64,
    /// Amount each daughter receives.
    pub daughter_share: f64,
    pub explanation: Explanation,
}

pub fn waris(total_estate: f64, sons: u32, daughters: u32) -> Result<WarisResult> {
    let total_estate = ensure_amount("total_estate", total_estate)?;
    if sons == 0 && daughters == 0 {
        return Err(EngineError::NoHeirs);
    }

    let total_shares = sons
        .checked_mul(2)
        .and_then(|s| s.checked_add(daughters))
        .ok_or_else(|| EngineError::InvalidInput("Too many heirs".into()))?;
    if total_shares == 0 {
        return Err(EngineError::ZeroShare);
    }

    let share_unit = total_estate / f64::from(total_shares);
    let son_share = 2.0 * share_unit;
    let daughter_share = share_unit;
    debug!(
        "waris: estate={} sons={} daughters={} shares={} unit={}",
        total_estate, sons, daughters, total_shares, share_unit
    );

    let logic = format!(
        "The estate of {} is divided among {} son(s) and {} daughter(s). A son takes two shares and a daughter one, \
         so the estate splits into {} shares of {} each. Each son receives 2 x {} = {} and each daughter 1 x {} = {}.",
        format_amount(total_estate),
        sons,
        daughters,
        total_shares,
        format_amount(share_unit),
        format_amount(share_unit),
        format_amount(son_share),
        format_amount(share_unit),
        format_amount(daughter_share),
    );

    Ok(WarisResult {
        total_estate,
        sons,
        daughters,
        total_shares,
        share_unit,
        son_share,
        daughter_share,
        explanation: Explanation::new(logic, SOURCES),
    })
}
