//! Create Profile Page
//!
//! Profile form with a link editor. Submitting sends the whole draft to
//! the server, which creates the profile and then adds the links.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::GlobalState;
use crate::state::{CreateForm, Theme};

/// Delay before switching to the new profile
const REDIRECT_DELAY_MS: u32 = 2000;

/// Create profile page component
#[component]
pub fn CreateProfile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let form = create_rw_signal(CreateForm::default());
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let Some(session) = state.session.get_untracked() else {
            error.set(Some("Please connect your wallet first".to_string()));
            return;
        };

        let request = match form.with_untracked(CreateForm::to_request) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        set_submitting.set(true);
        state.loading.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_profile(&session, &request).await {
                Ok(response) => {
                    success.set(Some(response.message.clone()));
                    for failure in &response.link_failures {
                        logging::warn!("Failed to add link {}: {}", failure.label, failure.error);
                    }

                    if let Some(id) = response.profile_id {
                        form.set(CreateForm::default());
                        state_clone.profile_id.set(Some(id.clone()));
                        gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigate(&format!("/view/{}", id), Default::default());
                        })
                        .forget();
                    }
                }
                Err(e) => error.set(Some(e)),
            }
            set_submitting.set(false);
            state_clone.loading.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h2 class="text-3xl font-bold">"Create Your LinkTree Profile"</h2>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-5">
                {move || error.get().map(|msg| view! {
                    <div class="bg-red-900/50 border border-red-600 text-red-200 rounded-lg px-4 py-3">
                        {msg}
                    </div>
                })}
                {move || success.get().map(|msg| view! {
                    <div class="bg-green-900/50 border border-green-600 text-green-200 rounded-lg px-4 py-3 whitespace-pre-line">
                        {msg}
                    </div>
                })}

                <TextField
                    id="name"
                    label="Profile Name *"
                    placeholder="Your username"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=move |v| form.update(|f| f.name = v)
                />

                <TextField
                    id="avatarCid"
                    label="Avatar CID (IPFS)"
                    placeholder="QmExample..."
                    value=Signal::derive(move || form.with(|f| f.avatar_cid.clone()))
                    on_input=move |v| form.update(|f| f.avatar_cid = v)
                />

                <div>
                    <label for="bio" class="block text-sm text-gray-400 mb-2">"Bio *"</label>
                    <textarea
                        id="bio"
                        rows=4
                        placeholder="Tell us about yourself"
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label for="theme" class="block text-sm text-gray-400 mb-2">"Theme"</label>
                    <select
                        id="theme"
                        on:change=move |ev| form.update(|f| f.theme = Theme::parse(&event_target_value(&ev)))
                        prop:value=move || form.with(|f| f.theme.as_str())
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {Theme::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <LinkEditor form=form error=error />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Creating Profile..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Create Profile"</span> }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Link inputs plus the list of links added so far
#[component]
fn LinkEditor(form: RwSignal<CreateForm>, error: RwSignal<Option<String>>) -> impl IntoView {
    let add_link = move |_| {
        let mut result = Ok(());
        form.update(|f| result = f.add_link());
        match result {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold">"Add Links"</h3>

            <div class="flex flex-col md:flex-row gap-2">
                <input
                    type="text"
                    placeholder="Label (e.g., Twitter)"
                    prop:value=move || form.with(|f| f.new_label.clone())
                    on:input=move |ev| form.update(|f| f.new_label = event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-white border border-gray-600"
                />
                <input
                    type="url"
                    placeholder="URL (e.g., https://twitter.com/...)"
                    prop:value=move || form.with(|f| f.new_url.clone())
                    on:input=move |ev| form.update(|f| f.new_url = event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-white border border-gray-600"
                />
                <button
                    type="button"
                    on:click=add_link
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium"
                >
                    "Add Link"
                </button>
            </div>

            {move || {
                let links = form.with(|f| f.links.clone());
                if links.is_empty() {
                    return view! {}.into_view();
                }

                view! {
                    <div class="space-y-2">
                        <h4 class="text-sm text-gray-400">{format!("Added Links ({})", links.len())}</h4>
                        {links
                            .into_iter()
                            .enumerate()
                            .map(|(index, link)| view! {
                                <div class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-2">
                                    <div>
                                        <strong>{link.label}</strong>
                                        <p class="text-sm text-gray-400">{link.url}</p>
                                    </div>
                                    <button
                                        type="button"
                                        on:click=move |_| form.update(|f| f.remove_link(index))
                                        class="text-red-400 hover:text-red-300 text-sm"
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}
