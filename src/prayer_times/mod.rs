pub mod calculator;
pub mod method;

pub use calculator::{PrayerCalculator, compute_day};
pub use method::{CalculationMethod, IshaRule, Madhab, MethodProfile};
