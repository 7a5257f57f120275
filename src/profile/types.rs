//! Profile data types
//!
//! Form drafts sent to the contract and the display record read back.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::error::{ProfileError, ProfileResult};

/// A label/URL pair attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Parse `label=url`, splitting on the first `=`
    pub fn parse_pair(pair: &str) -> ProfileResult<Self> {
        let (label, url) = pair.split_once('=').ok_or(ProfileError::IncompleteLink)?;
        LinkDraft::new(label, url).into_link()
    }
}

/// Link being typed into the form, not yet accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub label: String,
    pub url: String,
}

impl LinkDraft {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Accept the draft; both label and URL are required
    pub fn into_link(self) -> ProfileResult<Link> {
        let label = self.label.trim();
        let url = self.url.trim();
        if label.is_empty() || url.is_empty() {
            return Err(ProfileError::IncompleteLink);
        }
        Ok(Link::new(label, url))
    }
}

/// Profile theme selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Custom,
    /// Value read back from the ledger that this client does not know
    Other(String),
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Custom => "custom",
            Theme::Other(value) => value,
        }
    }

    /// One of the themes the contract's form offers
    pub fn is_known(&self) -> bool {
        !matches!(self, Theme::Other(_))
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            "custom" => Theme::Custom,
            other => Theme::Other(other.to_string()),
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from(value.as_str())
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    #[serde(default)]
    pub avatar_cid: String,
    pub bio: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
            ..Default::default()
        }
    }

    pub fn avatar_cid(mut self, cid: impl Into<String>) -> Self {
        self.avatar_cid = cid.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Name and bio are required; the theme must be dark, light or custom
    pub fn validate(&self) -> ProfileResult<()> {
        if self.name.trim().is_empty() || self.bio.trim().is_empty() {
            return Err(ProfileError::MissingRequiredFields);
        }
        if !self.theme.is_known() {
            return Err(ProfileError::UnknownTheme(self.theme.to_string()));
        }
        Ok(())
    }

    /// Accept a link draft and append it
    pub fn add_link(&mut self, draft: LinkDraft) -> ProfileResult<()> {
        let link = draft.into_link()?;
        tracing::debug!(label = %link.label, "Adding link");
        self.links.push(link);
        Ok(())
    }

    /// Remove the link at `index`; out of range is a no-op
    pub fn remove_link(&mut self, index: usize) -> Option<Link> {
        if index < self.links.len() {
            Some(self.links.remove(index))
        } else {
            None
        }
    }
}

/// Profile as read from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub avatar_cid: String,
    pub bio: String,
    pub theme: Theme,
    /// Milliseconds since the Unix epoch
    pub updated_at: i64,
    pub links: Vec<Link>,
}

impl Profile {
    /// Image URL for the avatar, if one is set
    pub fn avatar_url(&self, gateway: &str) -> Option<String> {
        let cid = self.avatar_cid.trim();
        if cid.is_empty() {
            None
        } else {
            Some(format!("{}/{}", gateway.trim_end_matches('/'), cid))
        }
    }

    /// Last update as a calendar date
    pub fn updated_at_display(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.updated_at)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn object_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{1,64}$").expect("valid object id regex"))
}

/// Trim and check an object id typed by the user
pub fn parse_object_id(input: &str) -> ProfileResult<String> {
    let id = input.trim();
    if object_id_pattern().is_match(id) {
        Ok(id.to_string())
    } else {
        Err(ProfileError::InvalidObjectId(id.to_string()))
    }
}
