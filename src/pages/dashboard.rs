//! Sensor dashboard for the signed-in company.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only behind `ProtectedRoute`. Readings come from the local random
//! walk in `state::sensors`; alerts are derived from readings on every tick
//! and filtered by the operator's dismissals.
//!
//! TRADE-OFFS
//! ==========
//! The ticker keeps running while the system switch is off and simply skips
//! the update, so toggling never has to restart the task.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert_banner::AlertBanner;
use crate::components::control_toggle::ControlToggle;
use crate::components::sensor_card::SensorCard;
use crate::config::AppConfig;
use crate::state::alerts::{AlertKind, AlertState, evaluate};
use crate::state::sensors::{ControlPanel, SensorReadings, detection_label, format_reading};
use crate::state::session::SessionContext;
use crate::types::Session;
use crate::util::guard::AppRoute;

/// Header text: the company name, or a placeholder without a session.
pub fn company_heading(session: Option<&Session>) -> String {
    session
        .map(|s| s.company_name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or("Company Name")
        .to_owned()
}

/// Inline width for the humidity bar, clamped to the track.
pub fn humidity_bar_style(humidity: f64) -> String {
    format!("width: {}%", humidity.clamp(0.0, 100.0))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let readings = RwSignal::new(SensorReadings::default());
    let controls = RwSignal::new(ControlPanel::default());
    let dismissed = RwSignal::new(AlertState::default());

    let thresholds = config.thresholds;
    let active = Memo::new(move |_| readings.with(|r| evaluate(r, &thresholds)));

    // A dismissal only holds while its condition stays active.
    Effect::new(move || {
        active.with(|alerts| dismissed.update(|d| d.reconcile(alerts)));
    });

    let visible = Signal::derive(move || dismissed.with(|d| d.visible(active.get())));
    let on_dismiss = Callback::new(move |kind: AlertKind| dismissed.update(|d| d.dismiss(kind)));

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let period = config.sensor_tick;
        leptos::task::spawn_local(async move {
            let mut rng = rand::rng();
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let Some(panel) = controls.try_get_untracked() else {
                    break;
                };
                readings.maybe_update(|r| crate::state::sensors::tick(r, &panel, &mut rng));
            }
            log::debug!("sensor ticker stopped");
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let heading = move || company_heading(session.state().session());

    let on_logout = move |_| {
        session.logout();
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    let reading = move |f: fn(&SensorReadings) -> f64, decimals: usize| {
        Signal::derive(move || readings.with(|r| format_reading(f(r), decimals)))
    };
    let control = move |f: fn(&ControlPanel) -> bool| Signal::derive(move || controls.with(f));

    view! {
        <Title text="Dashboard - IoT Monitor"/>
        <div class="cyberpunk-bg dashboard">
            <header class="cyber-header-box dashboard__header">
                <h1 class="dashboard__title">{heading}</h1>
                <button class="dashboard__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard__grid">
                <div class="dashboard__sensors">
                    <div class="cyber-card dashboard__status">
                        <span class="dashboard__status-label">
                            <span class="pulse-dot"></span>
                            "System Status"
                        </span>
                        <ControlToggle
                            label="System:"
                            on=control(|c| c.system_on)
                            on_change=Callback::new(move |on| controls.update(|c| c.system_on = on))
                        />
                    </div>

                    <div class="dashboard__row dashboard__row--large">
                        <SensorCard title="Temperature" value=reading(|r| r.temperature, 1) unit="°c" modifier="sensor-card--hero"/>
                        <div class="cyber-card sensor-card">
                            <div class="sensor-card__header">"Gas Levels"</div>
                            <dl class="gas-levels">
                                <dt>"Methane:"</dt>
                                <dd>{move || format!("{}%", readings.with(|r| format_reading(r.methane, 1)))}</dd>
                                <dt>"CO:"</dt>
                                <dd>{move || format!("{} ppm", readings.with(|r| format_reading(r.carbon_monoxide, 0)))}</dd>
                                <dt>"Hydrogen:"</dt>
                                <dd>{move || format!("{} ppm", readings.with(|r| format_reading(r.hydrogen, 0)))}</dd>
                                <dt>"Alcohol:"</dt>
                                <dd>{move || format!("{}%", readings.with(|r| format_reading(r.alcohol, 1)))}</dd>
                            </dl>
                        </div>
                    </div>

                    <div class="dashboard__row">
                        <SensorCard title="Humidity" value=reading(|r| r.humidity, 0) unit="%">
                            <div class="meter">
                                <div class="meter__fill" style=move || readings.with(|r| humidity_bar_style(r.humidity))></div>
                            </div>
                        </SensorCard>
                        <SensorCard title="Dust Particle" value=reading(|r| r.dust, 0) unit="µg/m³"/>
                        <SensorCard title="Smoke" value=reading(|r| r.smoke, 0) unit="PPM"/>
                        <SensorCard title="Sound Level" value=reading(|r| r.sound, 0) unit="dB">
                            <button
                                class="mute-toggle"
                                class:mute-toggle--on=move || controls.with(|c| c.sound_on)
                                title="Toggle sound"
                                on:click=move |_| controls.update(|c| c.sound_on = !c.sound_on)
                            >
                                {move || if controls.with(|c| c.sound_on) { "Sound On" } else { "Muted" }}
                            </button>
                        </SensorCard>
                    </div>

                    <div class="dashboard__row">
                        <SensorCard
                            title="Flame Detected"
                            value=Signal::derive(move || readings.with(|r| detection_label(r.flame).to_owned()))
                            modifier="sensor-card--danger"
                        />
                        <div class="cyber-card sensor-card">
                            <ControlToggle
                                label="Alarm"
                                on=control(|c| c.alarm_on)
                                on_change=Callback::new(move |on| controls.update(|c| c.alarm_on = on))
                            />
                        </div>
                        <div class="cyber-card sensor-card">
                            <ControlToggle
                                label="Fan Control"
                                on=control(|c| c.fan_on)
                                on_change=Callback::new(move |on| controls.update(|c| c.fan_on = on))
                            />
                        </div>
                        <SensorCard
                            title="Motion Detect"
                            value=Signal::derive(move || readings.with(|r| detection_label(r.motion).to_owned()))
                        />
                    </div>
                </div>

                <div class="cyber-card dashboard__map">
                    <div class="sensor-card__header">"Location Map"</div>
                    <div class="map">
                        <div class="map__grid"></div>
                        <div class="map__pin"></div>
                        <div class="map__caption">"GPS Location Active"</div>
                    </div>
                </div>
            </div>

            <AlertBanner alerts=visible on_dismiss=on_dismiss/>
        </div>
    }
}
