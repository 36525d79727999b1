use log::debug;
use serde::{Deserialize, Serialize};

use crate::ritual::{Explanation, RitualRates};
use crate::utils::format::{format_amount, format_quantity};

const SOURCES: &[&str] = &[
    "QS. Al-Baqarah 2:184 - whoever is ill or travelling makes up the same number of other days",
    "QS. Al-Baqarah 2:184 - those who can fast only with hardship owe a ransom: feeding a poor person",
    "Ijma / BAZNAS - fidyah is one mud (about 0.6 kg of rice) or one day's meal for a poor person",
];

/// Make-up fasts and compensation owed for missed days of Ramadan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FidyahResult {
    pub category: String,
    pub qadha_days: u32,
    pub fidyah_rice_kg: f64,
    pub fidyah_money: f64,
    pub explanation: Explanation,
}

/// `category` is the reason the days were missed. It is recorded but does not
/// change the rates; see DESIGN.md.
pub fn fidyah_and_qadha(rates: &RitualRates, missed_days: u32, category: &str) -> FidyahResult {
    let days = f64::from(missed_days);
    let fidyah_rice_kg = days * rates.fidyah_rice_kg_per_day;
    let fidyah_money = days * rates.fidyah_money_per_day;
    debug!(
        "fidyah: days={} category={:?} rice={} money={}",
        missed_days, category, fidyah_rice_kg, fidyah_money
    );

    let logic = format!(
        "{} day(s) of fasting were missed for the reason '{}'. Each day is made up with one qadha fast, \
         and the fidyah is {} day(s) x 1 mud ({} kg) = {} kg of rice, or {} x {} = {} as meal money.",
        missed_days,
        category,
        missed_days,
        format_quantity(rates.fidyah_rice_kg_per_day),
        format_quantity(fidyah_rice_kg),
        missed_days,
        format_amount(rates.fidyah_money_per_day),
        format_amount(fidyah_money),
    );

    FidyahResult {
        category: category.to_string(),
        qadha_days: missed_days,
        fidyah_rice_kg,
        fidyah_money,
        explanation: Explanation::new(logic, SOURCES),
    }
}
