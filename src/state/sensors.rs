//! Simulated sensor feed and device controls for the dashboard.
//!
//! DESIGN
//! ======
//! Readings drift as a bounded random walk: each tick nudges temperature,
//! humidity, CO and dust by a uniform offset, then rounds to the precision
//! the dashboard displays. The remaining channels hold their seed values.
//! The random source is injected so ticks are reproducible in tests.

#[cfg(test)]
#[path = "sensors_test.rs"]
mod sensors_test;

use rand::Rng;

/// One snapshot of every dashboard channel.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorReadings {
    /// Degrees Celsius, one decimal.
    pub temperature: f64,
    /// Relative humidity percent, integer in `[0, 100]`.
    pub humidity: f64,
    /// Percent.
    pub methane: f64,
    /// Parts per million, non-negative integer.
    pub carbon_monoxide: f64,
    /// Parts per million.
    pub hydrogen: f64,
    /// Percent.
    pub alcohol: f64,
    /// Micrograms per cubic metre, non-negative integer.
    pub dust: f64,
    /// Parts per million.
    pub smoke: f64,
    /// Decibels.
    pub sound: f64,
    pub flame: bool,
    pub motion: bool,
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self {
            temperature: 28.0,
            humidity: 65.0,
            methane: 2.3,
            carbon_monoxide: 15.0,
            hydrogen: 5.0,
            alcohol: 0.8,
            dust: 120.0,
            smoke: 45.0,
            sound: 72.0,
            flame: true,
            motion: true,
        }
    }
}

impl SensorReadings {
    /// Advance the random walk by one tick.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.temperature = round_to(self.temperature + jitter(rng, 1.0), 1);
        self.humidity = round_to(self.humidity + jitter(rng, 2.0), 0).clamp(0.0, 100.0);
        self.carbon_monoxide = round_to(self.carbon_monoxide + jitter(rng, 1.0), 0).max(0.0);
        self.dust = round_to(self.dust + jitter(rng, 5.0), 0).max(0.0);
    }
}

/// Uniform offset in `[-span/2, span/2)`.
fn jitter<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * span
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a reading with fixed decimals, e.g. `28.0` → `"28.0"`.
pub fn format_reading(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Yes/No label for boolean detectors.
pub fn detection_label(detected: bool) -> &'static str {
    if detected { "Yes" } else { "No" }
}

/// Operator-controlled switches on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlPanel {
    /// Master switch; the simulation only ticks while on.
    pub system_on: bool,
    pub alarm_on: bool,
    pub fan_on: bool,
    pub sound_on: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self { system_on: true, alarm_on: false, fan_on: false, sound_on: true }
    }
}

impl ControlPanel {
    /// Whether a tick should advance the readings.
    pub fn is_simulating(&self) -> bool {
        self.system_on
    }
}

/// Apply one simulation tick if the system is switched on. Returns whether
/// the readings changed state.
pub fn tick<R: Rng + ?Sized>(readings: &mut SensorReadings, controls: &ControlPanel, rng: &mut R) -> bool {
    if !controls.is_simulating() {
        return false;
    }
    readings.step(rng);
    true
}
