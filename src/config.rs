//! TOML render documents
//!
//! A render document describes one complete output: document width and CSS,
//! tiers with their presets, and the sponsor list.
//!
//! ```toml
//! width = 600
//!
//! [[tiers]]
//! title = "Gold"
//! monthly_dollars = 100
//! preset = "large"
//!
//! [[sponsors]]
//! login = "ada"
//! name = "Ada Lovelace"
//! avatar_url = "https://example.com/ada.png"
//! monthly_dollars = 120
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::preset::BadgePreset;
use crate::renderer::ComposerConfig;
use crate::sponsor::{Sponsor, Sponsorship};
use crate::tiers::{DocumentPadding, Tier};

/// Errors that can occur when loading a render document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read render document: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse render document TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },
    #[error("Failed to read avatar '{}' for sponsor '{login}': {source}", path.display())]
    AvatarError {
        login: String,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset {
            name: name.into(),
            available: BadgePreset::builtin_names().join(", "),
        }
    }
}

/// A fully resolved render document
#[derive(Debug, Clone)]
pub struct RenderDocument {
    pub composer: ComposerConfig,
    pub padding: DocumentPadding,
    pub tiers: Vec<Tier>,
    pub sponsorships: Vec<Sponsorship>,
}

/// TOML structure for deserializing render documents
#[derive(Deserialize)]
struct TomlDocument {
    width: Option<f64>,
    css: Option<String>,
    padding: Option<TomlPadding>,
    #[serde(default)]
    tiers: Vec<TomlTier>,
    #[serde(default)]
    sponsors: Vec<TomlSponsor>,
}

#[derive(Deserialize)]
struct TomlPadding {
    top: Option<f64>,
    bottom: Option<f64>,
}

/// Either a built-in preset name or an inline preset table
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlPreset {
    Named(String),
    Inline(BadgePreset),
}

#[derive(Deserialize)]
struct TomlTier {
    title: Option<String>,
    #[serde(default)]
    monthly_dollars: f64,
    preset: Option<TomlPreset>,
    padding_top: Option<f64>,
    padding_bottom: Option<f64>,
}

#[derive(Deserialize)]
struct TomlSponsor {
    login: String,
    name: Option<String>,
    #[serde(default)]
    avatar_url: String,
    /// Local image embedded as a data URI, takes precedence over `avatar_url`
    avatar_path: Option<PathBuf>,
    link_url: Option<String>,
    #[serde(default)]
    monthly_dollars: f64,
    tier_name: Option<String>,
    created_at: Option<String>,
    #[serde(default)]
    is_one_time: bool,
}

impl RenderDocument {
    /// Load a render document from a TOML file.
    ///
    /// Relative `avatar_path` entries are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let parsed: TomlDocument = toml::from_str(&content)?;
        Self::resolve(parsed, path.parent())
    }

    /// Load a render document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlDocument = toml::from_str(content)?;
        Self::resolve(parsed, None)
    }

    /// Use `preset` for every tier
    pub fn with_preset_override(mut self, preset: &BadgePreset) -> Self {
        if self.tiers.is_empty() {
            self.tiers.push(Tier::catch_all());
        }
        for tier in &mut self.tiers {
            tier.preset = Some(preset.clone());
        }
        self
    }

    fn resolve(parsed: TomlDocument, base_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut composer = ComposerConfig::default();
        if let Some(width) = parsed.width {
            composer = composer.with_width(width);
        }
        if let Some(css) = parsed.css {
            composer = composer.with_inline_css(css);
        }

        let mut padding = DocumentPadding::default();
        if let Some(p) = parsed.padding {
            padding.top = p.top.unwrap_or(padding.top);
            padding.bottom = p.bottom.unwrap_or(padding.bottom);
        }

        let tiers = parsed
            .tiers
            .into_iter()
            .map(resolve_tier)
            .collect::<Result<Vec<_>, _>>()?;

        let sponsorships = parsed
            .sponsors
            .into_iter()
            .map(|s| resolve_sponsor(s, base_dir))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "loaded render document: width={}, {} tier(s), {} sponsor(s)",
            composer.width,
            tiers.len(),
            sponsorships.len()
        );

        Ok(RenderDocument {
            composer,
            padding,
            tiers,
            sponsorships,
        })
    }
}

fn resolve_tier(tier: TomlTier) -> Result<Tier, ConfigError> {
    let preset = match tier.preset {
        None => None,
        Some(TomlPreset::Inline(preset)) => Some(preset),
        Some(TomlPreset::Named(name)) => Some(
            BadgePreset::by_name(&name).ok_or_else(|| ConfigError::unknown_preset(name))?,
        ),
    };
    Ok(Tier {
        title: tier.title,
        monthly_dollars: tier.monthly_dollars,
        preset,
        padding_top: tier.padding_top,
        padding_bottom: tier.padding_bottom,
    })
}

fn resolve_sponsor(entry: TomlSponsor, base_dir: Option<&Path>) -> Result<Sponsorship, ConfigError> {
    let mut sponsor = Sponsor {
        login: entry.login,
        name: entry.name,
        avatar_url: entry.avatar_url,
        link_url: entry.link_url,
    };

    if let Some(path) = entry.avatar_path {
        let path = match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        };
        let bytes = std::fs::read(&path).map_err(|source| ConfigError::AvatarError {
            login: sponsor.login.clone(),
            path: path.clone(),
            source,
        })?;
        sponsor = sponsor.with_embedded_avatar(mime_for_path(&path), &bytes);
    }

    Ok(Sponsorship {
        sponsor,
        monthly_dollars: entry.monthly_dollars,
        tier_name: entry.tier_name,
        created_at: entry.created_at,
        is_one_time: entry.is_one_time,
    })
}

/// Guess an image MIME type from a file extension
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
