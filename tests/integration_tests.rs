//! Integration tests for badge rendering and composition

use pretty_assertions::assert_eq;
use sponsor_badges::renderer::badge::truncate_name;
use sponsor_badges::{
    generate_badge, BadgePreset, ComposeError, ComposerConfig, Sponsor, Sponsorship, SvgComposer,
};

fn ada() -> Sponsor {
    Sponsor::new("ada", "https://img/x.png").with_name("Ada Lovelace")
}

fn sponsors(n: usize) -> Vec<Sponsorship> {
    (0..n)
        .map(|i| Sponsorship::new(Sponsor::new(format!("s{}", i), "https://img/a.png")))
        .collect()
}

/// Extract the numeric value of `attr` from every element named `tag`
fn attr_values(svg: &str, tag: &str, attr: &str) -> Vec<f64> {
    let open = format!("<{} ", tag);
    let key = format!(" {}=\"", attr);
    svg.match_indices(&open)
        .filter_map(|(i, _)| {
            let elem = &svg[i..i + svg[i..].find('>')?];
            let start = elem.find(&key)? + key.len();
            let len = elem[start..].find('"')?;
            elem[start..start + len].parse().ok()
        })
        .collect()
}

fn label_text(badge: &str) -> Option<&str> {
    let start = badge.find("<text")?;
    let open_end = start + badge[start..].find('>')? + 1;
    let close = badge[open_end..].find("</text>")?;
    Some(&badge[open_end..open_end + close])
}

#[test]
fn test_badge_example_short_label() {
    let preset = BadgePreset::new(40.0, 60.0, 80.0).with_name_max_length(8);
    let badge = generate_badge(10.0, 5.0, &ada(), &preset).expect("Should render");

    assert_eq!(label_text(&badge), Some("Ada"));
    assert_eq!(attr_values(&badge, "text", "x"), vec![30.0]);
    assert_eq!(attr_values(&badge, "text", "y"), vec![63.0]);
    assert_eq!(attr_values(&badge, "image", "x"), vec![10.0]);
    assert_eq!(attr_values(&badge, "image", "y"), vec![5.0]);
    assert_eq!(attr_values(&badge, "image", "width"), vec![40.0]);
    assert_eq!(attr_values(&badge, "image", "height"), vec![40.0]);
    assert!(badge.starts_with(r#"<a xlink:href="https://github.com/ada""#));
}

#[test]
fn test_badge_example_full_label() {
    let preset = BadgePreset::new(40.0, 60.0, 80.0).with_name_max_length(20);
    let badge = generate_badge(10.0, 5.0, &ada(), &preset).expect("Should render");
    assert_eq!(label_text(&badge), Some("Ada Lovelace"));
}

#[test]
fn test_label_equals_trimmed_name_within_limit() {
    for (name, max) in [("  Grace  ", Some(5)), ("Linus Torvalds", None), ("x", Some(1))] {
        assert_eq!(truncate_name(name, max), name.trim());
    }
}

#[test]
fn test_label_uses_login_without_name() {
    let preset = BadgePreset::medium();
    let sponsor = Sponsor::new("octocat", "https://img/o.png");
    let badge = generate_badge(0.0, 0.0, &sponsor, &preset).unwrap();
    assert_eq!(label_text(&badge), Some("octocat"));
}

#[test]
fn test_sponsor_line_cells_are_spaced_by_box_width() {
    let preset = BadgePreset::new(50.0, 80.0, 90.0);
    let mut composer = SvgComposer::new(ComposerConfig::new().with_width(800.0));
    composer.add_sponsor_line(&sponsors(4), &preset).unwrap();

    let xs = attr_values(&composer.body(), "image", "x");
    // first cell edge at (800 - 4*80) / 2 = 240, avatar inset 15
    assert_eq!(xs, vec![255.0, 335.0, 415.0, 495.0]);
}

#[test]
fn test_sponsor_grid_example_rows() {
    let preset = BadgePreset::new(40.0, 100.0, 100.0);
    let mut composer = SvgComposer::new(ComposerConfig::new().with_width(320.0));
    composer.add_sponsor_grid(&sponsors(5), &preset).unwrap();

    let ys = attr_values(&composer.body(), "image", "y");
    assert_eq!(ys, vec![0.0, 0.0, 0.0, 100.0, 100.0]);
}

#[test]
fn test_sponsor_grid_matches_manual_lines() {
    let preset = BadgePreset::base();
    let list = sponsors(40);
    let config = ComposerConfig::new().with_width(500.0);

    let mut grid = SvgComposer::new(config.clone());
    grid.add_sponsor_grid(&list, &preset).unwrap();

    // (500 - 60) / 48 = 9 per line
    let mut manual = SvgComposer::new(config);
    for chunk in list.chunks(9) {
        manual.add_sponsor_line(chunk, &preset).unwrap();
    }

    assert_eq!(grid.body(), manual.body());
    assert_eq!(grid.height(), manual.height());
    assert_eq!(grid.height(), 5.0 * 48.0);
}

#[test]
fn test_sponsor_grid_degenerate_layout() {
    let preset = BadgePreset::new(40.0, 200.0, 100.0).with_side_padding(20.0);
    let mut composer = SvgComposer::new(ComposerConfig::new().with_width(200.0));
    let err = composer.add_sponsor_grid(&sponsors(3), &preset).unwrap_err();
    assert_eq!(err, ComposeError::degenerate(200.0, 20.0, 200.0));
}

#[test]
fn test_height_is_additive_regardless_of_raw() {
    let preset = BadgePreset::large();

    let mut plain = SvgComposer::new(ComposerConfig::default());
    plain.add_text("Thanks", None);
    plain.add_sponsor_line(&sponsors(2), &preset).unwrap();

    let mut interleaved = SvgComposer::new(ComposerConfig::default());
    interleaved
        .add_raw("<g/>")
        .add_text("Thanks", None)
        .add_raw("<rect/>")
        .add_sponsor_line(&sponsors(2), &preset)
        .unwrap()
        .add_raw("<circle/>");

    assert_eq!(plain.height(), 20.0 + preset.box_height);
    assert_eq!(interleaved.height(), plain.height());
}

#[test]
fn test_generated_document_structure() {
    let mut composer = SvgComposer::new(
        ComposerConfig::new()
            .with_width(400.0)
            .with_inline_css(".sponsor-link { cursor: pointer; }"),
    );
    composer
        .add_span(10.0)
        .add_title("Sponsors", None)
        .add_sponsor_grid(&sponsors(3), &BadgePreset::small())
        .unwrap()
        .add_span(10.0);
    let svg = composer.generate_svg();

    assert_eq!(attr_values(&svg, "svg", "width"), vec![400.0]);
    assert_eq!(attr_values(&svg, "svg", "height"), vec![10.0 + 20.0 + 38.0 + 10.0]);
    assert!(svg.contains("<style>.sponsor-link { cursor: pointer; }</style>"));
    assert_eq!(svg.matches("<a ").count(), 3);
    assert_eq!(svg.matches("<image ").count(), 3);

    let style = svg.find("<style>").unwrap();
    let title = svg.find("Sponsors</text>").unwrap();
    assert!(style < title);
}
