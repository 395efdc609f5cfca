use super::*;

fn quiet() -> SensorReadings {
    SensorReadings {
        flame: false,
        motion: false,
        carbon_monoxide: 2.0,
        methane: 1.0,
        ..SensorReadings::default()
    }
}

fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
    alerts.iter().map(|a| a.kind).collect()
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn quiet_readings_raise_nothing() {
    assert!(evaluate(&quiet(), &AlertThresholds::default()).is_empty());
}

#[test]
fn default_readings_raise_fire_co_and_motion_in_order() {
    let alerts = evaluate(&SensorReadings::default(), &AlertThresholds::default());
    assert_eq!(kinds(&alerts), vec![AlertKind::Fire, AlertKind::CarbonMonoxide, AlertKind::Motion]);
}

#[test]
fn co_alert_uses_inclusive_threshold() {
    let thresholds = AlertThresholds::default();
    let at = SensorReadings { carbon_monoxide: thresholds.co_warning_ppm, ..quiet() };
    let below = SensorReadings { carbon_monoxide: thresholds.co_warning_ppm - 1.0, ..quiet() };
    assert_eq!(kinds(&evaluate(&at, &thresholds)), vec![AlertKind::CarbonMonoxide]);
    assert!(evaluate(&below, &thresholds).is_empty());
}

#[test]
fn co_alert_carries_ventilation_message() {
    let r = SensorReadings { carbon_monoxide: 50.0, ..quiet() };
    let alerts = evaluate(&r, &AlertThresholds::default());
    assert_eq!(alerts[0].title, "Warning: High Carbon Monoxide Levels Detected!");
    assert_eq!(alerts[0].message, "Please check the ventilation systems immediately.");
}

#[test]
fn methane_alert_reports_level() {
    let r = SensorReadings { methane: 6.25, ..quiet() };
    let alerts = evaluate(&r, &AlertThresholds::default());
    assert_eq!(kinds(&alerts), vec![AlertKind::Gas]);
    assert!(alerts[0].message.contains("6.2") || alerts[0].message.contains("6.3"));
}

#[test]
fn custom_thresholds_apply() {
    let thresholds = AlertThresholds { co_warning_ppm: 100.0, methane_warning_pct: 0.5 };
    let alerts = evaluate(&quiet(), &thresholds);
    assert_eq!(kinds(&alerts), vec![AlertKind::Gas]);
}

// =============================================================
// AlertState
// =============================================================

#[test]
fn dismissed_alert_is_hidden() {
    let mut state = AlertState::default();
    state.dismiss(AlertKind::Motion);
    let visible = state.visible(evaluate(&SensorReadings::default(), &AlertThresholds::default()));
    assert_eq!(kinds(&visible), vec![AlertKind::Fire, AlertKind::CarbonMonoxide]);
}

#[test]
fn dismiss_is_idempotent() {
    let mut state = AlertState::default();
    state.dismiss(AlertKind::Fire);
    state.dismiss(AlertKind::Fire);
    state.reconcile(&evaluate(&SensorReadings::default(), &AlertThresholds::default()));
    assert!(state.is_dismissed(AlertKind::Fire));
}

#[test]
fn reconcile_rearms_cleared_conditions() {
    let mut state = AlertState::default();
    state.dismiss(AlertKind::CarbonMonoxide);

    state.reconcile(&evaluate(&quiet(), &AlertThresholds::default()));
    assert!(!state.is_dismissed(AlertKind::CarbonMonoxide));

    let visible = state.visible(evaluate(&SensorReadings::default(), &AlertThresholds::default()));
    assert!(kinds(&visible).contains(&AlertKind::CarbonMonoxide));
}

#[test]
fn css_classes_are_distinct() {
    let classes = [
        AlertKind::Fire.css_class(),
        AlertKind::Gas.css_class(),
        AlertKind::CarbonMonoxide.css_class(),
        AlertKind::Motion.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
