//! Toast
//!
//! Wallet connect feedback. Errors win over success when both are set;
//! either can be dismissed early.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (error, success) = (state.error, state.success);

    let current = move || {
        error
            .get()
            .map(|msg| (msg, "bg-red-600"))
            .or_else(|| success.get().map(|msg| (msg, "bg-green-600")))
    };

    let dismiss = move |_| {
        error.set(None);
        success.set(None);
    };

    view! {
        {move || current().map(|(message, bg)| view! {
            <div
                role="status"
                class=format!(
                    "fixed bottom-20 right-4 z-50 flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                    bg
                )
            >
                <span class="text-sm">{message}</span>
                <button on:click=dismiss class="text-white/70 hover:text-white" aria-label="Dismiss">
                    "×"
                </button>
            </div>
        })}
    }
}
