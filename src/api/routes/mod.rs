//! API Routes
//!
//! Route handlers organized by functionality.

pub mod config;
pub mod health;
pub mod profiles;
pub mod wallet;
