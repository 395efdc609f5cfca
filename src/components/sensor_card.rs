//! Dashboard tile showing one sensor channel.

use leptos::prelude::*;

/// A titled reading with an optional unit and extra content below it.
#[component]
pub fn SensorCard(
    #[prop(into)] title: String,
    value: Signal<String>,
    #[prop(optional, into)] unit: String,
    /// Extra modifier class, e.g. `sensor-card--danger`.
    #[prop(optional)]
    modifier: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = if modifier.is_empty() { "cyber-card sensor-card".to_owned() } else { format!("cyber-card sensor-card {modifier}") };
    view! {
        <div class=class>
            <div class="sensor-card__header">{title}</div>
            <div class="sensor-card__value">
                {move || value.get()}
                {(!unit.is_empty()).then(|| view! { <span class="sensor-card__unit">{unit}</span> })}
            </div>
            {children.map(|c| c())}
        </div>
    }
}
