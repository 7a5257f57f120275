//! State Management
//!
//! Global application state and the form logic behind the pages.

pub mod form;
pub mod global;

pub use form::{normalize_profile_id, short_address, validate_profile_id, CreateForm, Theme};
pub use global::{provide_global_state, GlobalState};
