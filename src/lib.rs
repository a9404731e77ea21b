//! Sponsor Badges - render sponsor avatars into a tiled SVG
//!
//! This library lays out sponsor badges (avatar, optional name label, profile
//! link) into centered rows and wrapped grids, grouped by sponsorship tier.
//!
//! # Example
//!
//! ```rust
//! use sponsor_badges::{BadgePreset, ComposerConfig, Sponsor, Sponsorship, SvgComposer};
//!
//! let sponsors = vec![Sponsorship::new(Sponsor::new("ada", "https://example.com/ada.png"))];
//!
//! let mut composer = SvgComposer::new(ComposerConfig::default());
//! composer
//!     .add_title("Sponsors", None)
//!     .add_sponsor_grid(&sponsors, &BadgePreset::medium())
//!     .unwrap();
//!
//! let svg = composer.generate_svg();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"id="ada""#));
//! ```

pub mod config;
pub mod error;
pub mod preset;
pub mod renderer;
pub mod sponsor;
pub mod tiers;

pub use config::{ConfigError, RenderDocument};
pub use error::ComposeError;
pub use preset::BadgePreset;
pub use renderer::{generate_badge, ComposerConfig, SvgComposer};
pub use sponsor::{Sponsor, Sponsorship};
pub use tiers::{compose_tiers, partition_tiers, DocumentPadding, Tier};

use std::path::Path;

use log::debug;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the render document
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error during composition
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),
}

/// Render a resolved document to SVG
///
/// # Example
///
/// ```rust
/// use sponsor_badges::{render, RenderDocument};
///
/// let doc = RenderDocument::from_str(r#"
///     width = 400
///
///     [[tiers]]
///     title = "Backers"
///     preset = "small"
///
///     [[sponsors]]
///     login = "ada"
///     avatar_url = "https://example.com/ada.png"
/// "#).unwrap();
///
/// let svg = render(&doc).unwrap();
/// assert!(svg.contains("Backers"));
/// assert!(svg.contains("https://github.com/ada"));
/// ```
pub fn render(doc: &RenderDocument) -> Result<String, RenderError> {
    let mut composer = SvgComposer::new(doc.composer.clone());
    compose_tiers(&mut composer, &doc.sponsorships, &doc.tiers, doc.padding)?;
    debug!(
        "composed document: width={} height={}",
        composer.config().width,
        composer.height()
    );
    Ok(composer.generate_svg())
}

/// Parse a TOML render document and render it
pub fn render_str(source: &str) -> Result<String, RenderError> {
    let doc = RenderDocument::from_str(source)?;
    render(&doc)
}

/// Load a TOML render document from disk and render it
pub fn render_file(path: &Path) -> Result<String, RenderError> {
    let doc = RenderDocument::from_file(path)?;
    render(&doc)
}
