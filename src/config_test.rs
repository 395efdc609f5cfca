use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_persisted_layout_and_timings() {
    let config = AppConfig::default();
    assert_eq!(config.users_key, "users");
    assert_eq!(config.session_key, "currentUser");
    assert_eq!(config.auth_latency, Duration::from_millis(800));
    assert_eq!(config.sensor_tick, Duration::from_millis(2000));
    assert_eq!(config.toast_duration, Duration::from_millis(4000));
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AppConfig::from_lookup(|_| None);
    assert_eq!(config, AppConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn lookup_overrides_every_key() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("SENSORBOARD_USERS_KEY", "acct"),
        ("SENSORBOARD_SESSION_KEY", "me"),
        ("SENSORBOARD_AUTH_LATENCY_MS", "0"),
        ("SENSORBOARD_SENSOR_TICK_MS", "500"),
        ("SENSORBOARD_TOAST_MS", "1500"),
        ("SENSORBOARD_LOG_LEVEL", "debug"),
        ("SENSORBOARD_CO_WARNING_PPM", "35"),
        ("SENSORBOARD_METHANE_WARNING_PCT", "1.5"),
    ]));
    assert_eq!(config.users_key, "acct");
    assert_eq!(config.session_key, "me");
    assert_eq!(config.auth_latency, Duration::ZERO);
    assert_eq!(config.sensor_tick, Duration::from_millis(500));
    assert_eq!(config.toast_duration, Duration::from_millis(1500));
    assert_eq!(config.log_level, log::Level::Debug);
    assert!((config.thresholds.co_warning_ppm - 35.0).abs() < f64::EPSILON);
    assert!((config.thresholds.methane_warning_pct - 1.5).abs() < f64::EPSILON);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("SENSORBOARD_AUTH_LATENCY_MS", "soon"),
        ("SENSORBOARD_TOAST_MS", "-1"),
        ("SENSORBOARD_LOG_LEVEL", "loud"),
        ("SENSORBOARD_CO_WARNING_PPM", "NaN"),
        ("SENSORBOARD_METHANE_WARNING_PCT", "-3"),
    ]));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn zero_sensor_tick_is_rejected() {
    let config = AppConfig::from_lookup(lookup_from(&[("SENSORBOARD_SENSOR_TICK_MS", "0")]));
    assert_eq!(config.sensor_tick, Duration::from_millis(DEFAULT_SENSOR_TICK_MS));
}

#[test]
fn blank_storage_keys_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("SENSORBOARD_USERS_KEY", "   "),
        ("SENSORBOARD_SESSION_KEY", ""),
    ]));
    assert_eq!(config.users_key, "users");
    assert_eq!(config.session_key, "currentUser");
}

#[test]
fn values_are_trimmed() {
    let config = AppConfig::from_lookup(lookup_from(&[("SENSORBOARD_AUTH_LATENCY_MS", " 250 ")]));
    assert_eq!(config.auth_latency, Duration::from_millis(250));
}
