//! Incremental SVG composition with a vertical cursor

use log::trace;

use crate::error::ComposeError;
use crate::preset::BadgePreset;
use crate::sponsor::Sponsorship;

use super::badge::generate_badge;
use super::ComposerConfig;

/// Vertical advance of a text line
pub const TEXT_LINE_HEIGHT: f64 = 20.0;
/// Default class of [`SvgComposer::add_text`]
pub const DEFAULT_TEXT_CLASS: &str = "text";
/// Default class of [`SvgComposer::add_title`]
pub const DEFAULT_TITLE_CLASS: &str = "sponsor-tier-title";

const ATTRIBUTION: &str = "<!-- Generated by sponsor-badges -->";

/// Build an SVG document top to bottom.
///
/// Every `add_*` call appends at the current cursor height and then moves the
/// cursor down. Fragments are never modified once appended.
#[derive(Debug, Clone)]
pub struct SvgComposer {
    config: ComposerConfig,
    height: f64,
    body: Vec<String>,
}

impl SvgComposer {
    /// Create an empty composer with the cursor at 0
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            height: 0.0,
            body: vec![],
        }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Current cursor height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Accumulated markup in emission order
    pub fn body(&self) -> String {
        self.body.join("\n")
    }

    /// Move the cursor down without emitting anything.
    /// Negative and NaN spans count as 0.
    pub fn add_span(&mut self, height: f64) -> &mut Self {
        self.height += height.max(0.0);
        self
    }

    /// Centered text line; `classes` defaults to `text`
    pub fn add_text(&mut self, text: &str, classes: Option<&str>) -> &mut Self {
        self.body.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" class="{}">{}</text>"#,
            self.config.width / 2.0,
            self.height,
            escape_xml(classes.unwrap_or(DEFAULT_TEXT_CLASS)),
            escape_xml(text)
        ));
        self.height += TEXT_LINE_HEIGHT;
        self
    }

    /// Section heading; `classes` defaults to `sponsor-tier-title`
    pub fn add_title(&mut self, text: &str, classes: Option<&str>) -> &mut Self {
        self.add_text(text, Some(classes.unwrap_or(DEFAULT_TITLE_CLASS)))
    }

    /// Append a pre-built fragment verbatim. The cursor does not move.
    pub fn add_raw(&mut self, svg: impl Into<String>) -> &mut Self {
        self.body.push(svg.into());
        self
    }

    /// One horizontally centered row of badges at the cursor
    pub fn add_sponsor_line(
        &mut self,
        sponsorships: &[Sponsorship],
        preset: &BadgePreset,
    ) -> Result<&mut Self, ComposeError> {
        check_dimensions(preset)?;
        let offset_x = row_offset(self.config.width, sponsorships.len(), preset);
        let y = self.height;

        let badges = sponsorships
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let x = offset_x + preset.box_width * i as f64;
                generate_badge(x, y, &s.sponsor, preset)
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            "sponsor line: {} badge(s) at y={} offset_x={}",
            badges.len(),
            y,
            offset_x
        );

        if !badges.is_empty() {
            self.body.push(badges.join("\n"));
        }
        self.height += preset.box_height;
        Ok(self)
    }

    /// Wrap badges into as many rows as needed
    pub fn add_sponsor_grid(
        &mut self,
        sponsorships: &[Sponsorship],
        preset: &BadgePreset,
    ) -> Result<&mut Self, ComposeError> {
        let per_line = per_line(self.config.width, preset)?;
        check_dimensions(preset)?;
        for s in sponsorships {
            s.sponsor.validate()?;
        }

        trace!(
            "sponsor grid: {} sponsor(s), {} per line",
            sponsorships.len(),
            per_line
        );

        for chunk in sponsorships.chunks(per_line) {
            self.add_sponsor_line(chunk, preset)?;
        }
        Ok(self)
    }

    /// Serialize the document. State is left untouched.
    pub fn generate_svg(&self) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}">"#,
            self.config.width, self.height
        ));
        svg.push('\n');
        svg.push_str(ATTRIBUTION);
        svg.push('\n');
        svg.push_str("<style>");
        svg.push_str(&self.config.svg_inline_css);
        svg.push_str("</style>\n");
        for fragment in &self.body {
            svg.push_str(fragment);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Left edge of the first avatar in a centered row of `count` badges
pub fn row_offset(width: f64, count: usize, preset: &BadgePreset) -> f64 {
    (width - count as f64 * preset.box_width) / 2.0 + preset.avatar_inset()
}

/// Number of badges that fit in one grid row
pub fn per_line(width: f64, preset: &BadgePreset) -> Result<usize, ComposeError> {
    let side_padding = preset.side_padding();
    if preset.box_width.is_nan() || preset.box_width <= 0.0 {
        return Err(ComposeError::degenerate(width, side_padding, preset.box_width));
    }
    let fit = ((width - 2.0 * side_padding) / preset.box_width).floor();
    if !fit.is_finite() || fit < 1.0 {
        return Err(ComposeError::degenerate(width, side_padding, preset.box_width));
    }
    Ok(fit as usize)
}

/// Reject dimensions that would move the cursor up or place badges backwards
fn check_dimensions(preset: &BadgePreset) -> Result<(), ComposeError> {
    let dims = [
        ("box width", preset.box_width),
        ("box height", preset.box_height),
        ("avatar size", preset.avatar.size),
    ];
    for (label, value) in dims {
        if !value.is_finite() || value < 0.0 {
            return Err(ComposeError::invalid_preset(format!(
                "{} {} is negative or not finite",
                label, value
            )));
        }
    }
    Ok(())
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
