//! Sponsor Badges CLI
//!
//! Usage:
//!   sponsor-badges [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>    Write SVG to a file instead of stdout
//!   -p, --preset <NAME>    Use a built-in preset for every tier
//!   -d, --debug            Log layout decisions to stderr
//!   --presets              List built-in presets
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use sponsor_badges::{render, BadgePreset, RenderDocument};

#[derive(Parser)]
#[command(name = "sponsor-badges")]
#[command(about = "Render sponsor avatars into a tiled SVG")]
struct Cli {
    /// Render document (TOML); reads from stdin if not provided
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Built-in preset applied to every tier
    #[arg(short, long)]
    preset: Option<String>,

    /// Debug mode: log tier and layout decisions
    #[arg(short, long)]
    debug: bool,

    /// List built-in presets
    #[arg(long)]
    presets: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    if cli.presets {
        print_presets();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let doc = match &cli.input {
        Some(path) => RenderDocument::from_file(path).map_err(|e| {
            format!("Error loading render document '{}': {}", path.display(), e)
        }),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => RenderDocument::from_str(&buffer)
                    .map_err(|e| format!("Error loading render document: {}", e)),
                Err(e) => Err(format!("Error reading from stdin: {}", e)),
            }
        }
    };
    let mut doc = doc.unwrap_or_else(|msg| fail(&msg));

    if let Some(name) = &cli.preset {
        match BadgePreset::by_name(name) {
            Some(preset) => doc = doc.with_preset_override(&preset),
            None => fail(&format!(
                "Unknown preset '{}' (available: {})",
                name,
                BadgePreset::builtin_names().join(", ")
            )),
        }
    }

    let svg = render(&doc).unwrap_or_else(|e| fail(&format!("Error: {}", e)));

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                fail(&format!("Error writing file '{}': {}", path.display(), e));
            }
        }
        None => print!("{}", svg),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn print_presets() {
    println!(
        "{:<8} {:>6} {:>6} {:>6} {:>8} {:>6}",
        "PRESET", "AVATAR", "BOX_W", "BOX_H", "PADDING", "NAME"
    );
    for name in BadgePreset::builtin_names() {
        if let Some(p) = BadgePreset::by_name(name) {
            let label = p
                .name
                .as_ref()
                .and_then(|n| n.max_length)
                .map(|m| format!("<={}", m))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<8} {:>6} {:>6} {:>6} {:>8} {:>6}",
                name,
                p.avatar.size,
                p.box_width,
                p.box_height,
                p.side_padding(),
                label
            );
        }
    }
}

fn print_intro() {
    println!(
        r#"Sponsor Badges - render sponsor avatars into a tiled SVG

USAGE:
    sponsor-badges [OPTIONS] [FILE]
    cat sponsors.toml | sponsor-badges > sponsors.svg

OPTIONS:
    -o, --output     Write SVG to a file
    -p, --preset     Built-in preset for every tier (see --presets)
    -d, --debug      Log tier and layout decisions
    --presets        List built-in presets
    -h, --help       Print help

DOCUMENT FORMAT:
    width = 800                     # optional, default 800
    css = "text {{ fill: #777; }}"  # optional, default stylesheet otherwise

    [[tiers]]
    title = "Gold"
    monthly_dollars = 100
    preset = "large"                # or an inline table

    [[sponsors]]
    login = "ada"
    name = "Ada Lovelace"
    avatar_url = "https://example.com/ada.png"   # or avatar_path = "ada.png"
    monthly_dollars = 120"#
    );
}
