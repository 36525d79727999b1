//! Low-precision solar ephemeris.
//!
//! Mean-element model of the sun's apparent position, good to about a minute of
//! time for dates within a few centuries of J2000. All angles are in degrees.

use std::f64::consts::PI;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day at 00:00 of a civil date.
///
/// Dates up to 1582-10-14 are read as Julian calendar dates; later dates as
/// Gregorian. The ten days skipped by the reform (Oct 5..14) fall on the Julian side.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let mut b = 2.0 - a + (a / 4.0).floor();
    if year < 1582 || (year == 1582 && (month < 10 || (month == 10 && day < 15))) {
        b = 0.0;
    }

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Continuous day count since J2000, as used by the solar model.
pub fn days_since_j2000(year: i32, month: u32, day: u32) -> f64 {
    julian_day(year, month, day) - J2000_JD
}

/// Equation of time in hours: apparent minus mean solar time.
pub fn equation_of_time(d: f64) -> f64 {
    sun_position(d).1
}

/// Apparent declination of the sun in degrees.
pub fn sun_declination(d: f64) -> f64 {
    sun_position(d).0
}

/* declination and equation of time for `d` days since J2000 */
fn sun_position(d: f64) -> (f64, f64) {
    let g = fix_angle(357.529 + 0.985_600_28 * d);
    let q = fix_angle(280.459 + 0.985_647_36 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

    let e = 23.439 - 0.000_000_36 * d;

    let decl = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0);
    let eq_t = q / 15.0 - ra;

    (decl, eq_t)
}

/* ---------------------- Trigonometric Functions ----------------------- */

pub(crate) fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

pub(crate) fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

pub(crate) fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

pub(crate) fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

pub(crate) fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

pub(crate) fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

pub(crate) fn darccot(x: f64) -> f64 {
    rad2deg((1.0 / x).atan())
}

fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Reduce an angle into [0, 360).
pub fn fix_angle(a: f64) -> f64 {
    a - 360.0 * (a / 360.0).floor()
}

/// Reduce an hour value into [0, 24).
pub fn fix_hour(a: f64) -> f64 {
    a - 24.0 * (a / 24.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn j2000_epoch_is_half_a_day_after_midnight() {
        assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
        assert_eq!(days_since_j2000(2000, 1, 1), -0.5);
    }

    #[test]
    fn julian_day_is_continuous_across_the_gregorian_reform() {
        // Thursday 4 October 1582 (Julian) was followed by Friday 15 October (Gregorian).
        assert_eq!(julian_day(1582, 10, 15) - julian_day(1582, 10, 4), 1.0);
        assert_eq!(julian_day(1582, 10, 4), 2_299_159.5);
    }

    #[test]
    fn known_julian_days() {
        assert_eq!(julian_day(1957, 10, 4), 2_436_115.5);
        assert_eq!(julian_day(622, 7, 16), 1_948_439.5);
    }

    #[test]
    fn declination_tracks_the_seasons() {
        let june = sun_declination(days_since_j2000(2024, 6, 21) + 0.5);
        let december = sun_declination(days_since_j2000(2024, 12, 21) + 0.5);
        let march = sun_declination(days_since_j2000(2024, 3, 20) + 0.5);
        assert!(close(june, 23.44, 0.05), "june = {}", june);
        assert!(close(december, -23.44, 0.05), "december = {}", december);
        assert!(march.abs() < 0.5, "march = {}", march);
    }

    #[test]
    fn equation_of_time_stays_within_seventeen_minutes() {
        for day in 0..366 {
            let eq_t = equation_of_time(day as f64);
            // Raw value may sit near ±24h when the mean longitude wraps before RA does.
            let eq_t = fix_hour(eq_t + 12.0) - 12.0;
            assert!(eq_t.abs() < 17.0 / 60.0, "day {} eqt {}", day, eq_t);
        }
    }

    #[test]
    fn normalisation_helpers() {
        assert_eq!(fix_angle(370.0), 10.0);
        assert_eq!(fix_angle(-30.0), 330.0);
        assert_eq!(fix_hour(25.5), 1.5);
        assert_eq!(fix_hour(-1.0), 23.0);
        assert!(close(darccot(1.0), 45.0, 1e-9));
        assert!(close(dtan(45.0), 1.0, 1e-12));
        assert!(close(darccos(0.0), 90.0, 1e-12));
    }
}
