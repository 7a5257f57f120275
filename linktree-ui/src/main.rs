//! LinkTree UI
//!
//! On-chain link page built with Leptos (WASM).
//!
//! # Features
//!
//! - Connect to the server's signing account
//! - Create a profile with a list of links
//! - View any profile by object id
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the LinkTree API over HTTP; the server owns the
//! keystore and submits transactions.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
