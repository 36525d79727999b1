pub mod geo;
pub mod hijri;
pub mod prayer;

pub use geo::GeoMoment;
pub use hijri::{HijriDate, HIJRI_MONTH_NAMES, hijri_month_name};
pub use prayer::{PrayerEvent, PrayerTimeSet};
