//! Application configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so values are baked in through
//! `option_env!` when the crate is compiled. Every key is optional; missing,
//! empty, or malformed values fall back to the defaults below.
//!
//! Keys:
//! - `SENSORBOARD_USERS_KEY`: storage key for the user list (default `users`)
//! - `SENSORBOARD_SESSION_KEY`: storage key for the session (default `currentUser`)
//! - `SENSORBOARD_AUTH_LATENCY_MS`: simulated signup/login delay (default 800)
//! - `SENSORBOARD_SENSOR_TICK_MS`: sensor refresh interval, non-zero (default 2000)
//! - `SENSORBOARD_TOAST_MS`: notification lifetime (default 4000)
//! - `SENSORBOARD_LOG_LEVEL`: `error` .. `trace` (default `info`)
//! - `SENSORBOARD_CO_WARNING_PPM`: carbon monoxide alert threshold (default 9)
//! - `SENSORBOARD_METHANE_WARNING_PCT`: methane alert threshold (default 5)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use crate::state::alerts::AlertThresholds;

pub const DEFAULT_USERS_KEY: &str = "users";
pub const DEFAULT_SESSION_KEY: &str = "currentUser";
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 800;
pub const DEFAULT_SENSOR_TICK_MS: u64 = 2000;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;
pub const DEFAULT_CO_WARNING_PPM: f64 = 9.0;
pub const DEFAULT_METHANE_WARNING_PCT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub users_key: String,
    pub session_key: String,
    pub auth_latency: Duration,
    pub sensor_tick: Duration,
    pub toast_duration: Duration,
    pub log_level: log::Level,
    pub thresholds: AlertThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_key: DEFAULT_USERS_KEY.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            sensor_tick: Duration::from_millis(DEFAULT_SENSOR_TICK_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            log_level: log::Level::Info,
            thresholds: AlertThresholds::default(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| build_env(key).map(str::to_owned))
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let sensor_tick_ms = parse_or(get("SENSORBOARD_SENSOR_TICK_MS"), DEFAULT_SENSOR_TICK_MS);
        let sensor_tick_ms = if sensor_tick_ms == 0 { DEFAULT_SENSOR_TICK_MS } else { sensor_tick_ms };

        Self {
            users_key: get("SENSORBOARD_USERS_KEY").unwrap_or(defaults.users_key),
            session_key: get("SENSORBOARD_SESSION_KEY").unwrap_or(defaults.session_key),
            auth_latency: Duration::from_millis(parse_or(get("SENSORBOARD_AUTH_LATENCY_MS"), DEFAULT_AUTH_LATENCY_MS)),
            sensor_tick: Duration::from_millis(sensor_tick_ms),
            toast_duration: Duration::from_millis(parse_or(get("SENSORBOARD_TOAST_MS"), DEFAULT_TOAST_DURATION_MS)),
            log_level: parse_or(get("SENSORBOARD_LOG_LEVEL"), defaults.log_level),
            thresholds: AlertThresholds {
                co_warning_ppm: parse_threshold(get("SENSORBOARD_CO_WARNING_PPM"), DEFAULT_CO_WARNING_PPM),
                methane_warning_pct: parse_threshold(
                    get("SENSORBOARD_METHANE_WARNING_PCT"),
                    DEFAULT_METHANE_WARNING_PCT,
                ),
            },
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

fn parse_threshold(raw: Option<String>, default: f64) -> f64 {
    raw.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        "SENSORBOARD_USERS_KEY" => option_env!("SENSORBOARD_USERS_KEY"),
        "SENSORBOARD_SESSION_KEY" => option_env!("SENSORBOARD_SESSION_KEY"),
        "SENSORBOARD_AUTH_LATENCY_MS" => option_env!("SENSORBOARD_AUTH_LATENCY_MS"),
        "SENSORBOARD_SENSOR_TICK_MS" => option_env!("SENSORBOARD_SENSOR_TICK_MS"),
        "SENSORBOARD_TOAST_MS" => option_env!("SENSORBOARD_TOAST_MS"),
        "SENSORBOARD_LOG_LEVEL" => option_env!("SENSORBOARD_LOG_LEVEL"),
        "SENSORBOARD_CO_WARNING_PPM" => option_env!("SENSORBOARD_CO_WARNING_PPM"),
        "SENSORBOARD_METHANE_WARNING_PCT" => option_env!("SENSORBOARD_METHANE_WARNING_PCT"),
        _ => None,
    }
}
