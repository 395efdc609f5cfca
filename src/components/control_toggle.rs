//! ON/OFF switch pair used for system, alarm, and fan controls.

use leptos::prelude::*;

#[component]
pub fn ControlToggle(#[prop(into)] label: String, on: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <div class="control-toggle">
            <span class="control-toggle__label">{label}</span>
            <div class="cyber-toggle">
                <button
                    class="cyber-toggle-btn"
                    class:active=move || on.get()
                    class:inactive=move || !on.get()
                    on:click=move |_| on_change.run(true)
                >
                    "ON"
                </button>
                <button
                    class="cyber-toggle-btn"
                    class:active=move || !on.get()
                    class:inactive=move || on.get()
                    on:click=move |_| on_change.run(false)
                >
                    "OFF"
                </button>
            </div>
        </div>
    }
}
