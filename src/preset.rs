//! Badge presets controlling cell dimensions and label styling

use serde::Deserialize;

/// Default CSS class for the badge hyperlink wrapper
pub const DEFAULT_LINK_CLASS: &str = "sponsor-link";
/// Default CSS class for the name label
pub const DEFAULT_NAME_CLASS: &str = "sponsor-name";
/// Default fill for the name label
pub const DEFAULT_NAME_COLOR: &str = "currentColor";

/// Avatar image options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvatarOptions {
    /// Width and height of the avatar image
    pub size: f64,
}

/// Name label options; presence of this block enables the label
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NameOptions {
    /// Truncate display names longer than this many characters
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub classes: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl NameOptions {
    pub fn classes(&self) -> &str {
        self.classes.as_deref().unwrap_or(DEFAULT_NAME_CLASS)
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_NAME_COLOR)
    }
}

/// Container options used when wrapping badges into a grid
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerOptions {
    #[serde(default)]
    pub side_padding: Option<f64>,
}

/// Layout and style configuration for one badge cell
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BadgePreset {
    pub avatar: AvatarOptions,
    /// Width of the cell allocated to one badge
    pub box_width: f64,
    /// Height of the cell; the cursor advances by this much per row
    pub box_height: f64,
    #[serde(default)]
    pub name: Option<NameOptions>,
    /// Class override for the hyperlink wrapper
    #[serde(default)]
    pub classes: Option<String>,
    #[serde(default)]
    pub container: Option<ContainerOptions>,
}

impl BadgePreset {
    /// Create a preset without name label or container padding
    pub fn new(avatar_size: f64, box_width: f64, box_height: f64) -> Self {
        Self {
            avatar: AvatarOptions { size: avatar_size },
            box_width,
            box_height,
            name: None,
            classes: None,
            container: None,
        }
    }

    /// Enable the name label with the given truncation limit
    pub fn with_name_max_length(mut self, max_length: usize) -> Self {
        self.name.get_or_insert_with(NameOptions::default).max_length = Some(max_length);
        self
    }

    /// Enable the name label with default styling
    pub fn with_name(mut self, name: NameOptions) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the hyperlink wrapper class
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    /// Set the grid side padding
    pub fn with_side_padding(mut self, padding: f64) -> Self {
        self.container = Some(ContainerOptions {
            side_padding: Some(padding),
        });
        self
    }

    pub fn link_classes(&self) -> &str {
        self.classes.as_deref().unwrap_or(DEFAULT_LINK_CLASS)
    }

    pub fn side_padding(&self) -> f64 {
        self.container
            .as_ref()
            .and_then(|c| c.side_padding)
            .unwrap_or(0.0)
    }

    /// Horizontal inset of the avatar within its cell
    pub fn avatar_inset(&self) -> f64 {
        (self.box_width - self.avatar.size) / 2.0
    }

    /// Preset that renders nothing
    pub fn none() -> Self {
        Self::new(0.0, 0.0, 0.0).with_side_padding(0.0)
    }

    pub fn xs() -> Self {
        Self::new(25.0, 30.0, 30.0).with_side_padding(30.0)
    }

    pub fn small() -> Self {
        Self::new(35.0, 38.0, 38.0).with_side_padding(30.0)
    }

    pub fn base() -> Self {
        Self::new(40.0, 48.0, 48.0).with_side_padding(30.0)
    }

    pub fn medium() -> Self {
        Self::new(50.0, 80.0, 90.0)
            .with_side_padding(20.0)
            .with_name_max_length(10)
    }

    pub fn large() -> Self {
        Self::new(70.0, 95.0, 115.0)
            .with_side_padding(20.0)
            .with_name_max_length(16)
    }

    pub fn xl() -> Self {
        Self::new(90.0, 120.0, 130.0)
            .with_side_padding(20.0)
            .with_name_max_length(20)
    }

    /// Look up a built-in preset by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::none()),
            "xs" => Some(Self::xs()),
            "small" => Some(Self::small()),
            "base" => Some(Self::base()),
            "medium" => Some(Self::medium()),
            "large" => Some(Self::large()),
            "xl" => Some(Self::xl()),
            _ => None,
        }
    }

    /// Names accepted by [`BadgePreset::by_name`]
    pub fn builtin_names() -> &'static [&'static str] {
        &["none", "xs", "small", "base", "medium", "large", "xl"]
    }
}

impl Default for BadgePreset {
    fn default() -> Self {
        Self::base()
    }
}
