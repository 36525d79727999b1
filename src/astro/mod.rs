pub mod ephemeris;

pub use ephemeris::{
    days_since_j2000, equation_of_time, fix_angle, fix_hour, julian_day, sun_declination,
    J2000_JD,
};
