//! SVG renderer for sponsor badges
//!
//! `badge` turns one sponsor into a markup fragment, `svg` stacks fragments
//! into a document with a running vertical cursor.

pub mod badge;
pub mod config;
pub mod svg;

pub use badge::{gen_svg_image, generate_badge, truncate_name};
pub use config::{ComposerConfig, DEFAULT_INLINE_CSS};
pub use svg::SvgComposer;
