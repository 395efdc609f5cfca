//! Alert derivation from the current sensor readings.
//!
//! Alerts are recomputed from readings on every render; only the set of
//! operator-dismissed kinds is stored. A dismissal lasts until the alert's
//! condition clears, so a re-triggered hazard is shown again.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::config::{DEFAULT_CO_WARNING_PPM, DEFAULT_METHANE_WARNING_PCT};
use crate::state::sensors::SensorReadings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Fire,
    Gas,
    CarbonMonoxide,
    Motion,
}

impl AlertKind {
    /// CSS modifier used by the alert banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Fire => "alert--fire",
            Self::Gas => "alert--gas",
            Self::CarbonMonoxide => "alert--co",
            Self::Motion => "alert--motion",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

/// Trigger levels for threshold-based alerts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlertThresholds {
    pub co_warning_ppm: f64,
    pub methane_warning_pct: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self { co_warning_ppm: DEFAULT_CO_WARNING_PPM, methane_warning_pct: DEFAULT_METHANE_WARNING_PCT }
    }
}

/// Every alert the readings currently warrant, in severity order.
pub fn evaluate(readings: &SensorReadings, thresholds: &AlertThresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if readings.flame {
        alerts.push(Alert {
            kind: AlertKind::Fire,
            title: "Fire Detected!".to_owned(),
            message: "Flame sensor triggered. Evacuate the area and contact emergency services.".to_owned(),
        });
    }
    if readings.methane >= thresholds.methane_warning_pct {
        alerts.push(Alert {
            kind: AlertKind::Gas,
            title: "Warning: Methane Level Critical!".to_owned(),
            message: format!("Methane at {:.1}%. Shut off ignition sources.", readings.methane),
        });
    }
    if readings.carbon_monoxide >= thresholds.co_warning_ppm {
        alerts.push(Alert {
            kind: AlertKind::CarbonMonoxide,
            title: "Warning: High Carbon Monoxide Levels Detected!".to_owned(),
            message: "Please check the ventilation systems immediately.".to_owned(),
        });
    }
    if readings.motion {
        alerts.push(Alert {
            kind: AlertKind::Motion,
            title: "Motion Detected".to_owned(),
            message: "Movement registered in the monitored zone.".to_owned(),
        });
    }
    alerts
}

/// Operator dismissals of active alerts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertState {
    dismissed: Vec<AlertKind>,
}

impl AlertState {
    pub fn dismiss(&mut self, kind: AlertKind) {
        if !self.dismissed.contains(&kind) {
            self.dismissed.push(kind);
        }
    }

    pub fn is_dismissed(&self, kind: AlertKind) -> bool {
        self.dismissed.contains(&kind)
    }

    /// Forget dismissals whose condition is no longer active.
    pub fn reconcile(&mut self, active: &[Alert]) {
        self.dismissed.retain(|kind| active.iter().any(|a| a.kind == *kind));
    }

    /// Active alerts minus dismissed ones.
    pub fn visible(&self, active: Vec<Alert>) -> Vec<Alert> {
        active.into_iter().filter(|a| !self.is_dismissed(a.kind)).collect()
    }
}
