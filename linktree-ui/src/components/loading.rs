//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Block spinner with a caption
#[component]
pub fn Loading(#[prop(into, default = "Loading...".to_string())] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            <span>{message}</span>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
