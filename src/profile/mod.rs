//! Profiles
//!
//! Form drafts, the create flow (one `create_profile` call followed by one
//! `add_link` call per link) and the read-side mapping of ledger objects
//! into display records.

mod create;
mod error;
mod service;
mod types;
mod view;

pub use create::{add_link_call, create_profile_call, find_created_object, CreateOutcome, LinkFailure};
pub use error::{ProfileError, ProfileResult};
pub use service::ProfileService;
pub use types::{parse_object_id, Link, LinkDraft, Profile, ProfileDraft, Theme};
pub use view::parse_profile;
