//! Navigation Component
//!
//! Header with the title, wallet connect button and page links.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;
use crate::state::short_address;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-4 space-y-3">
                <div class="flex items-center justify-between">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌳"</span>
                        <span class="text-xl font-bold text-white">"Walrus LinkTree"</span>
                    </A>

                    <ConnectButton />
                </div>

                // Navigation links
                <nav class="flex items-center space-x-1">
                    <NavLink href="/" label="Home" />
                    <NavLink href="/create" label="Create Profile" />
                    <NavLink href="/view" label="View Profile" />
                </nav>

                {move || state.connected_label().map(|label| view! {
                    <p class="text-sm text-gray-400">{label}</p>
                })}
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Connect / disconnect the server-side wallet
#[component]
fn ConnectButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (connecting, set_connecting) = create_signal(false);

    let state_for_click = state.clone();
    let on_click = move |_| {
        if state_for_click.is_connected() {
            if let Some(token) = state_for_click.disconnect() {
                spawn_local(async move {
                    if let Err(e) = api::disconnect_wallet(&token).await {
                        logging::warn!("Failed to close session: {}", e);
                    }
                });
            }
            return;
        }

        set_connecting.set(true);
        let state_clone = state_for_click.clone();
        spawn_local(async move {
            match api::connect_wallet().await {
                Ok(wallet) => {
                    state_clone.session.set(Some(wallet.session));
                    state_clone.account.set(Some(wallet.address));
                    state_clone.show_success(&format!("Connected {}", wallet.short_address));
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_connecting.set(false);
        });
    };

    view! {
        <button
            on:click=on_click
            disabled=move || connecting.get()
            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   rounded-lg font-medium transition-colors flex items-center space-x-2"
        >
            {move || {
                if connecting.get() {
                    view! { <InlineLoading /> <span>"Connecting..."</span> }.into_view()
                } else {
                    match state.account.get() {
                        Some(address) => view! { <span>{short_address(&address)}</span> }.into_view(),
                        None => view! { <span>"Connect Wallet"</span> }.into_view(),
                    }
                }
            }}
        </button>
    }
}
