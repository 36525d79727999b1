use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The daily solar events a prayer timetable is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerEvent {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl PrayerEvent {
    pub const ALL: [PrayerEvent; 7] = [
        PrayerEvent::Fajr,
        PrayerEvent::Sunrise,
        PrayerEvent::Dhuhr,
        PrayerEvent::Asr,
        PrayerEvent::Sunset,
        PrayerEvent::Maghrib,
        PrayerEvent::Isha,
    ];

    /// The five obligatory prayers, in order.
    pub const PRAYERS: [PrayerEvent; 5] = [
        PrayerEvent::Fajr,
        PrayerEvent::Dhuhr,
        PrayerEvent::Asr,
        PrayerEvent::Maghrib,
        PrayerEvent::Isha,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerEvent::Fajr => "Fajr",
            PrayerEvent::Sunrise => "Sunrise",
            PrayerEvent::Dhuhr => "Dhuhr",
            PrayerEvent::Asr => "Asr",
            PrayerEvent::Sunset => "Sunset",
            PrayerEvent::Maghrib => "Maghrib",
            PrayerEvent::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One day's timetable in local clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimeSet {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub sunset: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl PrayerTimeSet {
    pub fn get(&self, event: PrayerEvent) -> NaiveTime {
        match event {
            PrayerEvent::Fajr => self.fajr,
            PrayerEvent::Sunrise => self.sunrise,
            PrayerEvent::Dhuhr => self.dhuhr,
            PrayerEvent::Asr => self.asr,
            PrayerEvent::Sunset => self.sunset,
            PrayerEvent::Maghrib => self.maghrib,
            PrayerEvent::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerEvent, NaiveTime)> + '_ {
        PrayerEvent::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Event name → "HH:MM".
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(event, time)| {
                (
                    event.display_name().to_string(),
                    time.format("%H:%M").to_string(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample() -> PrayerTimeSet {
        PrayerTimeSet {
            fajr: hm(4, 30),
            sunrise: hm(5, 50),
            dhuhr: hm(12, 5),
            asr: hm(15, 20),
            sunset: hm(18, 10),
            maghrib: hm(18, 10),
            isha: hm(19, 25),
        }
    }

    #[test]
    fn events_serialize_in_lowercase() {
        assert_eq!(serde_json::to_string(&PrayerEvent::Maghrib).unwrap(), "\"maghrib\"");
        assert_eq!(PrayerEvent::Dhuhr.to_string(), "Dhuhr");
    }

    #[test]
    fn map_has_every_event_formatted() {
        let map = sample().to_map();
        assert_eq!(map.len(), 7);
        assert_eq!(map["Fajr"], "04:30");
        assert_eq!(map["Maghrib"], "18:10");
        assert_eq!(map["Isha"], "19:25");
    }

    #[test]
    fn iter_follows_the_day() {
        let events: Vec<_> = sample().iter().map(|(e, _)| e).collect();
        assert_eq!(events, PrayerEvent::ALL.to_vec());
    }
}
