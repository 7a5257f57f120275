//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{CreateProfile, Home, ViewProfile};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    // Network and gateway settings come from the server
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    spawn_local(async move {
        match api::fetch_config().await {
            Ok(config) => state.config.set(Some(config)),
            Err(e) => logging::warn!("Failed to load config: {}", e),
        }
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/create" view=CreateProfile />
                        <Route path="/view" view=ViewProfile />
                        <Route path="/view/:id" view=ViewProfile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the network name and a loading indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <p class="text-gray-400">"© 2025 On-Chain LinkTree. Built for Sui Hackathon."</p>

                <div class="flex items-center space-x-4">
                    {move || {
                        if state.loading.get() {
                            view! {
                                <div class="flex items-center space-x-2 text-primary-400">
                                    <div class="loading-spinner w-4 h-4" />
                                    <span>"Loading..."</span>
                                </div>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}

                    {move || {
                        state.config.get().map(|c| {
                            let class = if c.contract_configured { "text-green-400" } else { "text-yellow-400" };
                            view! { <span class=class>{c.network}</span> }
                        })
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
