//! Pages
//!
//! Top-level page components for each route.

pub mod create;
pub mod home;
pub mod view;

pub use create::CreateProfile;
pub use home::Home;
pub use view::ViewProfile;
