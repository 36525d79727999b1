//! Islamic finance and worship calculators.
//!
//! Every calculator is a pure function of its arguments. Amounts that vary by
//! convention or market live in [`RitualRates`], which the caller builds once
//! (usually from config) and passes in.

pub mod fidyah;
pub mod khatam;
pub mod tahajjud;
pub mod waris;
pub mod zakat;

use serde::{Deserialize, Serialize};

pub use fidyah::{FidyahResult, fidyah_and_qadha};
pub use khatam::{KhatamResult, khatam_pacing};
pub use tahajjud::{LastThirdResult, last_third_of_night};
pub use waris::{WarisResult, waris};
pub use zakat::{ZakatResult, zakat};

/// How a result was derived, ready for display next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub logic: String,
    pub sources: Vec<String>,
}

impl Explanation {
    pub(crate) fn new(logic: String, sources: &[&str]) -> Self {
        Self {
            logic,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn default_nisab_gold_grams() -> f64 {
    85.0
}
fn default_zakat_rate() -> f64 {
    0.025
}
fn default_mushaf_pages() -> u32 {
    604
}
fn default_fidyah_rice_kg_per_day() -> f64 {
    0.6
}
fn default_fidyah_money_per_day() -> f64 {
    15_000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RitualRates {
    /// Gold weight of the nisab (20 dinar).
    #[serde(default = "default_nisab_gold_grams")]
    pub nisab_gold_grams: f64,
    #[serde(default = "default_zakat_rate")]
    pub zakat_rate: f64,
    /// Pages in a standard Madinah mushaf.
    #[serde(default = "default_mushaf_pages")]
    pub mushaf_pages: u32,
    /// One mud of staple food per missed day.
    #[serde(default = "default_fidyah_rice_kg_per_day")]
    pub fidyah_rice_kg_per_day: f64,
    /// Local cost of one day's meal, in the caller's currency.
    #[serde(default = "default_fidyah_money_per_day")]
    pub fidyah_money_per_day: f64,
}

impl Default for RitualRates {
    fn default() -> Self {
        Self {
            nisab_gold_grams: default_nisab_gold_grams(),
            zakat_rate: default_zakat_rate(),
            mushaf_pages: default_mushaf_pages(),
            fidyah_rice_kg_per_day: default_fidyah_rice_kg_per_day(),
            fidyah_money_per_day: default_fidyah_money_per_day(),
        }
    }
}

impl RitualRates {
    /// Rates come from user config; reject values that would make amounts negative.
    pub fn validate(&self) -> crate::Result<()> {
        use crate::error::{EngineError, ensure_amount};

        ensure_amount("nisab_gold_grams", self.nisab_gold_grams)?;
        ensure_amount("zakat_rate", self.zakat_rate)?;
        ensure_amount("fidyah_rice_kg_per_day", self.fidyah_rice_kg_per_day)?;
        ensure_amount("fidyah_money_per_day", self.fidyah_money_per_day)?;
        if self.zakat_rate > 1.0 {
            return Err(EngineError::InvalidInput(format!(
                "zakat_rate is a fraction of wealth and must not exceed 1 (got {})",
                self.zakat_rate
            )));
        }
        if self.mushaf_pages == 0 {
            return Err(EngineError::InvalidInput("mushaf_pages must be positive".into()));
        }
        Ok(())
    }
}
