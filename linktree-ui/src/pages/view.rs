//! View Profile Page
//!
//! `/view` asks for an object id; `/view/:id` loads and renders it.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ProfileView};
use crate::components::Loading;
use crate::state::global::GlobalState;
use crate::state::{normalize_profile_id, validate_profile_id};

#[derive(Clone, Debug, PartialEq)]
enum ViewStatus {
    Loading,
    Loaded(ProfileView),
    NotFound,
    Failed(String),
}

/// View profile page component
#[component]
pub fn ViewProfile() -> impl IntoView {
    let params = use_params_map();
    let profile_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        {move || {
            let id = profile_id();
            if id.is_empty() {
                view! { <ProfileLookup /> }.into_view()
            } else {
                view! { <ProfileViewer profile_id=id /> }.into_view()
            }
        }}
    }
}

/// Object id prompt; Enter submits the trimmed value
#[component]
fn ProfileLookup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let error = create_rw_signal(None::<String>);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let Some(id) = normalize_profile_id(&event_target_value(&ev)) else {
            return;
        };
        match validate_profile_id(&id) {
            Ok(()) => {
                error.set(None);
                navigate(&format!("/view/{}", id), Default::default());
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <section class="max-w-2xl mx-auto space-y-4">
            <h2 class="text-3xl font-bold">"View Profile"</h2>
            <p class="text-gray-400">"Enter a Profile Object ID to view:"</p>
            <input
                type="text"
                placeholder="0x..."
                on:keydown=on_keydown
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            {move || error.get().map(|msg| view! { <p class="text-sm text-red-400">{msg}</p> })}
            {move || match state.profile_id.get() {
                Some(id) => view! {
                    <p class="text-sm text-gray-400">
                        "Your latest profile: "
                        <A href=format!("/view/{}", id) class="text-primary-400 hover:underline">
                            <code>{id.clone()}</code>
                        </A>
                    </p>
                }
                .into_view(),
                None => view! {
                    <p class="text-sm text-gray-500">
                        "Or create a profile first to see it here automatically."
                    </p>
                }
                .into_view(),
            }}
        </section>
    }
}

/// Loads a profile by id and renders it
#[component]
fn ProfileViewer(profile_id: String) -> impl IntoView {
    let (status, set_status) = create_signal(ViewStatus::Loading);

    let id_for_fetch = profile_id.clone();
    create_effect(move |_| {
        let id = id_for_fetch.clone();
        set_status.set(ViewStatus::Loading);
        spawn_local(async move {
            let next = match api::fetch_profile(&id).await {
                Ok(Some(profile)) => ViewStatus::Loaded(profile),
                Ok(None) => ViewStatus::NotFound,
                Err(e) => {
                    logging::error!("Error fetching profile {}: {}", id, e);
                    ViewStatus::Failed(e)
                }
            };
            set_status.set(next);
        });
    });

    view! {
        {move || match status.get() {
            ViewStatus::Loading => view! { <Loading message="Loading profile..." /> }.into_view(),
            ViewStatus::Failed(e) => view! {
                <div class="text-center text-red-400 py-12">{format!("Error: {}", e)}</div>
            }
            .into_view(),
            ViewStatus::NotFound => view! {
                <div class="text-center text-gray-400 py-12">"Profile not found"</div>
            }
            .into_view(),
            ViewStatus::Loaded(profile) => view! { <ProfileCard profile=profile /> }.into_view(),
        }}
    }
}

#[component]
fn ProfileCard(profile: ProfileView) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let avatar = profile.avatar_url.clone().or_else(|| {
        let cid = profile.avatar_cid.trim();
        (!cid.is_empty()).then(|| format!("{}/{}", state.ipfs_gateway().trim_end_matches('/'), cid))
    });

    let links = profile.links.clone();

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div class="text-center space-y-3">
                {avatar.map(|src| view! {
                    <div class="flex justify-center">
                        <img src=src alt=profile.name.clone() class="w-32 h-32 rounded-full object-cover" />
                    </div>
                })}
                <h1 class="text-3xl font-bold">{profile.name.clone()}</h1>
                <p class="text-gray-300">{profile.bio.clone()}</p>
                <p class="text-sm text-gray-500">{format!("Theme: {}", profile.theme)}</p>
            </div>

            <div class="space-y-3">
                {if links.is_empty() {
                    view! { <p class="text-center text-gray-400">"No links added yet"</p> }.into_view()
                } else {
                    view! {
                        <h2 class="text-xl font-semibold">"Links"</h2>
                        <div class="grid gap-3">
                            {links
                                .into_iter()
                                .map(|link| view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center justify-between bg-gray-800 hover:bg-gray-700
                                               rounded-lg px-5 py-4 transition-colors"
                                    >
                                        <span class="font-medium">{link.label}</span>
                                        <span>"→"</span>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }}
            </div>

            <div class="text-sm text-gray-500 space-y-1">
                <p>"Profile ID: " <code>{profile.id.clone()}</code></p>
                <p>{format!("Last Updated: {}", profile.updated_at_display)}</p>
            </div>
        </div>
    }
}
