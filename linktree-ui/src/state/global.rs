//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::ConfigInfo;
use crate::state::form::short_address;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Connected account address
    pub account: RwSignal<Option<String>>,
    /// Session token from the connect call, sent when creating
    pub session: RwSignal<Option<String>>,
    /// Last profile created in this session
    pub profile_id: RwSignal<Option<String>>,
    /// Server-side network and contract settings
    pub config: RwSignal<Option<ConfigInfo>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        account: create_rw_signal(None),
        session: create_rw_signal(None),
        profile_id: create_rw_signal(None),
        config: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_connected(&self) -> bool {
        self.account.with(Option::is_some)
    }

    /// Drop the account and return the session token to close
    pub fn disconnect(&self) -> Option<String> {
        self.account.set(None);
        let token = self.session.get_untracked();
        self.session.set(None);
        token
    }

    /// "Connected: 0x1234...abcd" when an account is connected
    pub fn connected_label(&self) -> Option<String> {
        self.account
            .get()
            .map(|address| format!("Connected: {}", short_address(&address)))
    }

    /// IPFS gateway for avatar images
    pub fn ipfs_gateway(&self) -> String {
        self.config
            .get()
            .map(|c| c.ipfs_gateway)
            .unwrap_or_else(|| "https://ipfs.io/ipfs".to_string())
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
