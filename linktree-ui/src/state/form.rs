//! Form Logic
//!
//! Plain data behind the create form and the profile lookup. No DOM or
//! signals here so it can be tested natively.

use crate::api::{CreateProfileRequest, LinkItem};

/// Profile theme choices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Custom,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Custom => "Custom",
        }
    }

    /// Unknown values fall back to dark
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "custom" => Theme::Custom,
            _ => Theme::Dark,
        }
    }
}

/// Create form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub avatar_cid: String,
    pub bio: String,
    pub theme: Theme,
    pub links: Vec<LinkItem>,
    /// Link editor inputs
    pub new_label: String,
    pub new_url: String,
}

impl CreateForm {
    /// Name and bio are required
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.bio.trim().is_empty() {
            return Err("Please fill in all required fields".to_string());
        }
        Ok(())
    }

    /// Move the link editor inputs into the list
    pub fn add_link(&mut self) -> Result<(), String> {
        let label = self.new_label.trim();
        let url = self.new_url.trim();
        if label.is_empty() || url.is_empty() {
            return Err("Please fill in both label and URL".to_string());
        }

        self.links.push(LinkItem {
            label: label.to_string(),
            url: url.to_string(),
        });
        self.new_label.clear();
        self.new_url.clear();
        Ok(())
    }

    /// Remove the link at `index`; out of range is a no-op
    pub fn remove_link(&mut self, index: usize) {
        if index < self.links.len() {
            self.links.remove(index);
        }
    }

    /// Validated request body for the API
    pub fn to_request(&self) -> Result<CreateProfileRequest, String> {
        self.validate()?;
        Ok(CreateProfileRequest {
            name: self.name.trim().to_string(),
            avatar_cid: self.avatar_cid.trim().to_string(),
            bio: self.bio.trim().to_string(),
            theme: self.theme.as_str().to_string(),
            links: self.links.clone(),
        })
    }
}

/// `0x1234...abcd` form of an address
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Trimmed lookup input, `None` when blank
pub fn normalize_profile_id(input: &str) -> Option<String> {
    let id = input.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Object ids are `0x` followed by 1 to 64 hex digits
pub fn validate_profile_id(id: &str) -> Result<(), String> {
    let valid = id
        .strip_prefix("0x")
        .filter(|hex| (1..=64).contains(&hex.len()))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(format!("Invalid object ID: {}", id))
    }
}
