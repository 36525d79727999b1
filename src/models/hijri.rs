use serde::{Deserialize, Serialize};

/// Islamic month names (index 0 = Muharram = month 1)
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub fn hijri_month_name(month: u32) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month as usize - 1]
    } else {
        "Unknown"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub month_name: String,
}

impl HijriDate {
    pub fn formatted(&self) -> String {
        format!("{} {} {} H", self.day, self.month_name, self.year)
    }
}
