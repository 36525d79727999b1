use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_amount};
use crate::ritual::{Explanation, RitualRates};
use crate::utils::format::{format_amount, format_quantity};

const SOURCES: &[&str] = &[
    "QS. At-Taubah 9:103 - take alms from their wealth to purify them",
    "HR. Abu Daud - no zakat is due on gold until it reaches 20 dinar (about 85 grams)",
    "QS. Adh-Dhariyat 51:19 - in their wealth is a right for the beggar and the deprived",
];

/// Zakat on cash and gold held for a full year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZakatResult {
    pub nisab_threshold: f64,
    pub total_wealth: f64,
    pub is_obligatory: bool,
    pub due_amount: f64,
    pub explanation: Explanation,
}

pub fn zakat(
    rates: &RitualRates,
    gold_price_per_gram: f64,
    cash_savings: f64,
    gold_grams: f64,
) -> Result<ZakatResult> {
    let gold_price_per_gram = ensure_amount("gold_price_per_gram", gold_price_per_gram)?;
    let cash_savings = ensure_amount("cash_savings", cash_savings)?;
    let gold_grams = ensure_amount("gold_grams", gold_grams)?;

    let nisab_threshold = rates.nisab_gold_grams * gold_price_per_gram;
    let total_wealth = cash_savings + gold_grams * gold_price_per_gram;
    let is_obligatory = total_wealth >= nisab_threshold;
    let due_amount = if is_obligatory {
        total_wealth * rates.zakat_rate
    } else {
        0.0
    };
    debug!(
        "zakat: nisab={} wealth={} obligatory={} due={}",
        nisab_threshold, total_wealth, is_obligatory, due_amount
    );

    let (comparison, verdict) = if is_obligatory {
        ("reaches", "is due")
    } else {
        ("is below", "is not yet due")
    };
    let logic = format!(
        "Savings of {} plus {} g of gold at {}/g give a total wealth of {}. \
         The nisab is {} g x {} = {}. Since the wealth {} the nisab, zakat {}: {}% of the wealth = {}.",
        format_amount(cash_savings),
        format_quantity(gold_grams),
        format_amount(gold_price_per_gram),
        format_amount(total_wealth),
        format_quantity(rates.nisab_gold_grams),
        format_amount(gold_price_per_gram),
        format_amount(nisab_threshold),
        comparison,
        verdict,
        format_quantity(rates.zakat_rate * 100.0),
        format_amount(due_amount),
    );

    Ok(ZakatResult {
        nisab_threshold,
        total_wealth,
        is_obligatory,
        due_amount,
        explanation: Explanation::new(logic, SOURCES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn below_nisab() {
        let r = zakat(&RitualRates::default(), 1_000_000.0, 0.0, 0.0).unwrap();
        assert_eq!(r.nisab_threshold, 85_000_000.0);
        assert!(!r.is_obligatory);
        assert_eq!(r.due_amount, 0.0);
        assert!(r.explanation.logic.contains("is not yet due"));
    }

    #[test]
    fn above_nisab() {
        let r = zakat(&RitualRates::default(), 1_000_000.0, 90_000_000.0, 0.0).unwrap();
        assert!(r.is_obligatory);
        assert_eq!(r.total_wealth, 90_000_000.0);
        assert_eq!(r.due_amount, 2_250_000.0);
        assert!(r.explanation.logic.contains("2.5% of the wealth = 2,250,000"));
    }

    #[test]
    fn exactly_at_nisab_is_obligatory() {
        let r = zakat(&RitualRates::default(), 1_000.0, 0.0, 85.0).unwrap();
        assert!(r.is_obligatory);
        assert_eq!(r.due_amount, 85_000.0 * 0.025);
    }

    #[test]
    fn gold_counts_towards_wealth() {
        let r = zakat(&RitualRates::default(), 1_000.0, 10_000.0, 100.0).unwrap();
        assert_eq!(r.total_wealth, 110_000.0);
    }

    #[test]
    fn rates_come_from_the_caller() {
        let silver = RitualRates {
            nisab_gold_grams: 595.0,
            ..RitualRates::default()
        };
        let r = zakat(&silver, 10.0, 6_000.0, 0.0).unwrap();
        assert_eq!(r.nisab_threshold, 5_950.0);
        assert!(r.is_obligatory);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(matches!(
            zakat(&RitualRates::default(), 1.0, -1.0, 0.0),
            Err(EngineError::InvalidInput(_))
        ));
    }
}
