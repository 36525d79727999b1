use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use log::{debug, trace};

use crate::astro::ephemeris::{darccos, darccot, dcos, dsin, dtan};
use crate::astro::{days_since_j2000, equation_of_time, fix_hour, sun_declination};
use crate::error::{EngineError, Result};
use crate::models::geo::validate_location;
use crate::models::{GeoMoment, PrayerEvent, PrayerTimeSet};
use crate::prayer_times::method::{CalculationMethod, IshaRule, Madhab, MethodProfile};

/// Sun depression at apparent sunrise/sunset: solar semi-diameter plus refraction.
const SUNRISE_DEPRESSION: f64 = 0.833;

/// Compute one day's timetable for `geo` under `profile`.
///
/// Fails with [`EngineError::PolarRegion`] when the sun never reaches the altitude
/// an event needs on that date, instead of returning a wrapped time.
pub fn compute_day(profile: &MethodProfile, madhab: Madhab, geo: &GeoMoment) -> Result<PrayerTimeSet> {
    let sun = SolarDay::new(geo);

    let fajr = sun.before_noon(PrayerEvent::Fajr, -profile.fajr_angle)?;
    let sunrise = sun.before_noon(PrayerEvent::Sunrise, -SUNRISE_DEPRESSION)?;
    let dhuhr = sun.noon;
    let asr = sun.after_noon(PrayerEvent::Asr, sun.asr_altitude(madhab))?;
    let sunset = sun.after_noon(PrayerEvent::Sunset, -SUNRISE_DEPRESSION)?;
    let maghrib = match profile.maghrib_angle {
        Some(angle) => sun.after_noon(PrayerEvent::Maghrib, -angle)?,
        None => sunset,
    };
    let isha = match profile.isha {
        IshaRule::Angle(angle) => sun.after_noon(PrayerEvent::Isha, -angle)?,
        IshaRule::MinutesAfterMaghrib(minutes) => maghrib + minutes / 60.0,
    };

    trace!(
        "raw hours: fajr={:.4} sunrise={:.4} dhuhr={:.4} asr={:.4} sunset={:.4} maghrib={:.4} isha={:.4}",
        fajr, sunrise, dhuhr, asr, sunset, maghrib, isha
    );

    Ok(PrayerTimeSet {
        fajr: to_clock(fajr),
        sunrise: to_clock(sunrise),
        dhuhr: to_clock(dhuhr),
        asr: to_clock(asr),
        sunset: to_clock(sunset),
        maghrib: to_clock(maghrib),
        isha: to_clock(isha),
    })
}

/// Solar quantities for one date and place, evaluated once at local noon.
struct SolarDay {
    date: NaiveDate,
    latitude: f64,
    declination: f64,
    /// Local clock hours; may fall outside [0, 24) before formatting.
    noon: f64,
}

impl SolarDay {
    fn new(geo: &GeoMoment) -> Self {
        let date = geo.date;
        let d = days_since_j2000(date.year(), date.month(), date.day())
            + 0.5
            - geo.longitude / 360.0;
        let declination = sun_declination(d);
        let eq_t = equation_of_time(d);
        let noon = fix_hour(12.0 - eq_t) - geo.longitude / 15.0 + geo.utc_offset_hours;

        debug!(
            "solar day {} at ({}, {}): d={:.5} decl={:.4} eqt={:.5}h noon={:.4}",
            date, geo.latitude, geo.longitude, d, declination, eq_t, noon
        );

        Self {
            date,
            latitude: geo.latitude,
            declination,
            noon,
        }
    }

    /// Hours between noon and the moment the sun stands at `altitude`.
    fn hour_angle(&self, event: PrayerEvent, altitude: f64) -> Result<f64> {
        let ratio = (dsin(altitude) - dsin(self.declination) * dsin(self.latitude))
            / (dcos(self.declination) * dcos(self.latitude));
        if !ratio.is_finite() || !(-1.0..=1.0).contains(&ratio) {
            debug!("{} unsolvable on {}: cos(H) = {}", event, self.date, ratio);
            return Err(EngineError::PolarRegion {
                event,
                latitude: self.latitude,
                date: self.date,
            });
        }
        Ok(darccos(ratio) / 15.0)
    }

    fn before_noon(&self, event: PrayerEvent, altitude: f64) -> Result<f64> {
        Ok(self.noon - self.hour_angle(event, altitude)?)
    }

    fn after_noon(&self, event: PrayerEvent, altitude: f64) -> Result<f64> {
        Ok(self.noon + self.hour_angle(event, altitude)?)
    }

    /// Altitude at which a shadow is `k` object-lengths longer than at noon.
    fn asr_altitude(&self, madhab: Madhab) -> f64 {
        darccot(madhab.shadow_factor() + dtan((self.latitude - self.declination).abs()))
    }
}

/* drop the seconds of fractional hours and wrap into a clock time */
fn to_clock(hours: f64) -> NaiveTime {
    let minutes = (fix_hour(hours) * 60.0).floor() as i64;
    NaiveTime::default() + Duration::minutes(minutes.rem_euclid(24 * 60))
}

/// A validated location with its method and madhab, ready to produce timetables.
#[derive(Debug, Clone)]
pub struct PrayerCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method: CalculationMethod,
    pub madhab: Madhab,
    pub utc_offset_hours: f64,
}

impl PrayerCalculator {
    pub fn new(
        lat: f64,
        lng: f64,
        method: &str,
        madhab: &str,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        // Validate everything up front so later calls only fail on astronomy
        validate_location(lat, lng, utc_offset_hours)?;
        Ok(Self {
            lat,
            lng,
            method: method.parse()?,
            madhab: madhab.parse()?,
            utc_offset_hours,
        })
    }

    pub fn times_for_date(&self, date: NaiveDate) -> Result<PrayerTimeSet> {
        let geo = GeoMoment::on(date, self.lat, self.lng, self.utc_offset_hours)?;
        compute_day(&self.method.profile(), self.madhab, &geo)
    }

    /// Returns (next prayer, seconds until it). Sunrise and sunset are not prayers.
    /// After Isha the answer is the next day's Fajr.
    pub fn next_prayer(&self, date: NaiveDate, now: NaiveTime) -> Result<(PrayerEvent, i64)> {
        let today = self.times_for_date(date)?;

        for prayer in PrayerEvent::PRAYERS {
            let time = today.get(prayer);
            if time > now {
                return Ok((prayer, (time - now).num_seconds()));
            }
        }

        let tomorrow = date
            .succ_opt()
            .ok_or_else(|| EngineError::InvalidInput(format!("No day after {}", date)))?;
        let fajr = self.times_for_date(tomorrow)?.fajr;
        let until_midnight = 24 * 3600 - i64::from(now.num_seconds_from_midnight());
        Ok((
            PrayerEvent::Fajr,
            until_midnight + i64::from(fajr.num_seconds_from_midnight()),
        ))
    }
}
