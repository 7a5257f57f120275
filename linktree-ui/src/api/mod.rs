//! API
//!
//! HTTP client for the LinkTree server.

mod client;

pub use client::*;
