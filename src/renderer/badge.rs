//! Rendering of a single sponsor badge

use crate::error::ComposeError;
use crate::preset::BadgePreset;
use crate::sponsor::Sponsor;

use super::svg::escape_xml;

/// Distance from the avatar's bottom edge to the name label baseline
pub const NAME_BASELINE_OFFSET: f64 = 18.0;

const ELLIPSIS: &str = "...";

/// Square `<image>` element referencing `url`
pub fn gen_svg_image(x: f64, y: f64, size: f64, url: &str) -> String {
    format!(
        r#"<image x="{}" y="{}" width="{}" height="{}" xlink:href="{}"/>"#,
        x,
        y,
        size,
        size,
        escape_xml(url)
    )
}

/// Shorten a display name that exceeds `max_length` characters.
///
/// Names with a space collapse to their first word, which may itself still be
/// longer than the limit. Other names are cut to `max_length - 3` characters
/// and suffixed with an ellipsis; for limits below 3 the cut counts back from
/// the end of the name instead. A limit of 0 means no limit.
pub fn truncate_name(name: &str, max_length: Option<usize>) -> String {
    let name = name.trim();
    let Some(max) = max_length.filter(|m| *m > 0) else {
        return name.to_string();
    };
    let len = name.chars().count();
    if len <= max {
        return name.to_string();
    }

    if let Some((first, _)) = name.split_once(' ') {
        return first.to_string();
    }
    let keep = match max.checked_sub(ELLIPSIS.len()) {
        Some(keep) => keep,
        None => len.saturating_sub(ELLIPSIS.len() - max),
    };
    let kept: String = name.chars().take(keep).collect();
    format!("{}{}", kept, ELLIPSIS)
}

/// Render one badge with its avatar's top-left corner at `(x, y)`
pub fn generate_badge(
    x: f64,
    y: f64,
    sponsor: &Sponsor,
    preset: &BadgePreset,
) -> Result<String, ComposeError> {
    sponsor.validate()?;

    let size = preset.avatar.size;
    let mut badge = format!(
        r#"<a xlink:href="{}" class="{}" target="_blank" id="{}">"#,
        escape_xml(&sponsor.profile_url()),
        escape_xml(preset.link_classes()),
        escape_xml(&sponsor.login)
    );
    badge.push('\n');

    if let Some(name) = &preset.name {
        let label = truncate_name(sponsor.display_name(), name.max_length);
        badge.push_str(&format!(
            r#"  <text x="{}" y="{}" text-anchor="middle" class="{}" fill="{}">{}</text>"#,
            x + size / 2.0,
            y + size + NAME_BASELINE_OFFSET,
            escape_xml(name.classes()),
            escape_xml(name.color()),
            escape_xml(&label)
        ));
        badge.push('\n');
    }

    badge.push_str("  ");
    badge.push_str(&gen_svg_image(x, y, size, &sponsor.avatar_url));
    badge.push_str("\n</a>");

    Ok(badge)
}
