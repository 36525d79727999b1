use hisab::api;
use hisab::EngineError;

#[test]
fn compute_day_returns_every_event() {
    let times = api::compute_day("MWL", 2026, 2, 18, -0.502106, 117.153709, 8.0).unwrap();
    let names: Vec<&str> = times.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["Asr", "Dhuhr", "Fajr", "Isha", "Maghrib", "Sunrise", "Sunset"]
    );
    assert_eq!(times["Fajr"], "05:11");
    assert_eq!(times["Dhuhr"], "12:25");
    assert_eq!(times["Maghrib"], "18:29");
    assert_eq!(times["Isha"], "19:35");
}

#[test]
fn compute_day_with_hanafi_asr() {
    let times =
        api::compute_day_with_madhab("Karachi", "Hanafi", 2024, 1, 15, 24.8607, 67.0011, 5.0)
            .unwrap();
    assert_eq!(times["Asr"], "16:27");
}

#[test]
fn clock_times_drop_the_seconds() {
    // Makkah midsummer: Maghrib falls at 19:05:44, Dhuhr at 12:22:36.
    let times = api::compute_day("Makkah", 2024, 6, 21, 21.4225, 39.8262, 3.0).unwrap();
    assert_eq!(times["Dhuhr"], "12:22");
    assert_eq!(times["Maghrib"], "19:05");
    assert_eq!(times["Isha"], "20:35");
}

#[test]
fn unknown_method_is_an_error() {
    let err = api::compute_day("Moonsighting", 2026, 2, 18, 0.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err, EngineError::UnknownMethod("Moonsighting".into()));
}

#[test]
fn bad_inputs_are_errors() {
    assert!(matches!(
        api::compute_day("MWL", 2026, 2, 31, 0.0, 0.0, 0.0),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        api::compute_day("MWL", 2026, 2, 18, -95.0, 0.0, 0.0),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn polar_summer_is_an_error() {
    assert!(matches!(
        api::compute_day("MWL", 2024, 6, 21, 69.6492, 18.9553, 2.0),
        Err(EngineError::PolarRegion { .. })
    ));
}

#[test]
fn hijri_reference_date() {
    let h = api::to_hijri(2026, 2, 18).unwrap();
    assert_eq!(h.day, 1);
    assert_eq!(h.month_name, "Ramadan");
    assert_eq!(h.year, 1447);
}

#[test]
fn hijri_conversion_explains_itself() {
    let c = api::explain_hijri(2026, 2, 18).unwrap();
    assert_eq!(c.hijri, api::to_hijri(2026, 2, 18).unwrap());
    assert!(c.explanation.logic.contains("16 July 622"));
    assert!(c.explanation.logic.contains("year 7 of its cycle"));
    assert!(c.explanation.logic.contains("1 Ramadan 1447 H"));

    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value["hijri"]["month_name"], "Ramadan");
    assert_eq!(value["gregorian"], "2026-02-18");
    assert_eq!(value["explanation"]["sources"].as_array().unwrap().len(), 3);
}

#[test]
fn waris_example() {
    let r = api::waris(1_000_000.0, 2, 1).unwrap();
    assert_eq!(r.total_shares, 5);
    assert_eq!(r.share_unit, 200_000.0);
    assert_eq!(r.son_share, 400_000.0);
    assert_eq!(r.daughter_share, 200_000.0);
    assert_eq!(api::waris(1.0, 0, 0).unwrap_err(), EngineError::NoHeirs);
}

#[test]
fn zakat_examples() {
    let below = api::zakat(1_000_000.0, 0.0, 0.0).unwrap();
    assert_eq!(below.nisab_threshold, 85_000_000.0);
    assert!(!below.is_obligatory);
    assert_eq!(below.due_amount, 0.0);

    let above = api::zakat(1_000_000.0, 90_000_000.0, 0.0).unwrap();
    assert!(above.is_obligatory);
    assert_eq!(above.due_amount, 2_250_000.0);
}

#[test]
fn last_third_example() {
    let r = api::last_third_of_night("18:15", "04:45").unwrap();
    assert_eq!((r.total_duration_hours, r.total_duration_minutes), (10, 30));
    assert_eq!(r.time, "01:15");
}

#[test]
fn khatam_example() {
    let r = api::khatam_pacing(1, 30, 5).unwrap();
    assert_eq!((r.total_pages, r.total_sessions, r.pages_per_session), (604, 150, 5));
    assert_eq!(api::khatam_pacing(1, 0, 0).unwrap_err(), EngineError::ZeroSessions);
}

#[test]
fn fidyah_example() {
    let r = api::fidyah_and_qadha(3, "Sakit Tua");
    assert_eq!(r.qadha_days, 3);
    assert!((r.fidyah_rice_kg - 1.8).abs() < 1e-9);
    assert_eq!(r.fidyah_money, 45_000.0);
}

#[test]
fn results_serialize_with_their_explanation() {
    let r = api::khatam_pacing(1, 30, 5).unwrap();
    let value = serde_json::to_value(&r).unwrap();
    assert_eq!(value["pages_per_session"], 5);
    assert!(value["explanation"]["logic"].as_str().unwrap().contains("604"));
    assert_eq!(value["explanation"]["sources"].as_array().unwrap().len(), 3);
}
