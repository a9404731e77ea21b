//! Sponsor records consumed by the badge renderer

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::error::ComposeError;

/// Base URL used when a sponsor has no explicit profile link
pub const PROFILE_BASE_URL: &str = "https://github.com/";

/// Identifying and display data for one sponsor
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sponsor {
    /// Unique handle
    pub login: String,
    /// Display name, defaults to `login` when absent
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL (may be a `data:` URI)
    pub avatar_url: String,
    /// Explicit profile link, overrides the constructed GitHub URL
    #[serde(default)]
    pub link_url: Option<String>,
}

impl Sponsor {
    pub fn new(login: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
            avatar_url: avatar_url.into(),
            link_url: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_link_url(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    /// Replace the avatar URL with an inline `data:` URI of the given image bytes
    pub fn with_embedded_avatar(mut self, mime: &str, bytes: &[u8]) -> Self {
        self.avatar_url = data_uri(mime, bytes);
        self
    }

    /// Trimmed display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.login.as_str())
            .trim()
    }

    /// Target of the badge hyperlink
    pub fn profile_url(&self) -> String {
        match &self.link_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!("{}{}", PROFILE_BASE_URL, self.login),
        }
    }

    /// Check the fields the renderer cannot do without
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.login.trim().is_empty() {
            return Err(ComposeError::invalid_sponsor(&self.login, "missing login"));
        }
        if self.avatar_url.trim().is_empty() {
            return Err(ComposeError::invalid_sponsor(
                &self.login,
                "missing avatar URL",
            ));
        }
        Ok(())
    }
}

/// A sponsor plus sponsorship metadata
///
/// Only `sponsor` is read by the composer. The amount and creation date drive
/// tier partitioning and ordering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sponsorship {
    pub sponsor: Sponsor,
    #[serde(default)]
    pub monthly_dollars: f64,
    #[serde(default)]
    pub tier_name: Option<String>,
    /// Creation timestamp, compared lexically (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_one_time: bool,
}

impl Sponsorship {
    pub fn new(sponsor: Sponsor) -> Self {
        Self {
            sponsor,
            monthly_dollars: 0.0,
            tier_name: None,
            created_at: None,
            is_one_time: false,
        }
    }

    pub fn with_monthly_dollars(mut self, amount: f64) -> Self {
        self.monthly_dollars = amount;
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }
}

impl From<Sponsor> for Sponsorship {
    fn from(sponsor: Sponsor) -> Self {
        Self::new(sponsor)
    }
}

/// Encode image bytes as a base64 `data:` URI
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
