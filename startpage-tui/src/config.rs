use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tuifold::{HoverFold, Link, Page, Palette, Rgb, Section, Theme, DEFAULT_HINTS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk layout of `startpage.toml`.
///
/// Every field is optional; a missing or broken file never prevents
/// startup, it just falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StartpageConfig {
    pub page: PageConfig,
    pub palette: PaletteConfig,
    pub sections: Vec<SectionConfig>,
}

/// Page-wide behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Expand sections on pointer hover instead of waiting for a click.
    pub hover_fold: bool,
    /// Modifier set for section jump keys, e.g. `"ctrl,alt,shift"`.
    pub hyper: String,
    /// Fallback jump keys for sections without an explicit hint.
    pub hints: String,
    pub expanded_indicator: char,
    pub collapsed_indicator: char,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hover_fold: true,
            hyper: String::from("ctrl,alt,shift"),
            hints: String::from(DEFAULT_HINTS),
            expanded_indicator: '▼',
            collapsed_indicator: '▶',
        }
    }
}

/// Hex overrides for individual slots of the eighties palette.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub black: Option<String>,
    pub red: Option<String>,
    pub green: Option<String>,
    pub yellow: Option<String>,
    pub blue: Option<String>,
    pub magenta: Option<String>,
    pub cyan: Option<String>,
    pub white: Option<String>,
    pub bright_black: Option<String>,
    pub bright_red: Option<String>,
    pub bright_green: Option<String>,
    pub bright_yellow: Option<String>,
    pub bright_blue: Option<String>,
    pub bright_magenta: Option<String>,
    pub bright_cyan: Option<String>,
    pub bright_white: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor: Option<String>,
}

impl PaletteConfig {
    /// Applies the overrides on top of [`Palette::eighties`]. Bad hex
    /// values are logged and keep the base slot.
    pub fn resolve(&self) -> Palette {
        let mut palette = Palette::eighties();
        override_slot(&mut palette.black, "black", &self.black);
        override_slot(&mut palette.red, "red", &self.red);
        override_slot(&mut palette.green, "green", &self.green);
        override_slot(&mut palette.yellow, "yellow", &self.yellow);
        override_slot(&mut palette.blue, "blue", &self.blue);
        override_slot(&mut palette.magenta, "magenta", &self.magenta);
        override_slot(&mut palette.cyan, "cyan", &self.cyan);
        override_slot(&mut palette.white, "white", &self.white);
        override_slot(&mut palette.bright_black, "bright_black", &self.bright_black);
        override_slot(&mut palette.bright_red, "bright_red", &self.bright_red);
        override_slot(&mut palette.bright_green, "bright_green", &self.bright_green);
        override_slot(&mut palette.bright_yellow, "bright_yellow", &self.bright_yellow);
        override_slot(&mut palette.bright_blue, "bright_blue", &self.bright_blue);
        override_slot(
            &mut palette.bright_magenta,
            "bright_magenta",
            &self.bright_magenta,
        );
        override_slot(&mut palette.bright_cyan, "bright_cyan", &self.bright_cyan);
        override_slot(&mut palette.bright_white, "bright_white", &self.bright_white);
        override_slot(&mut palette.background, "background", &self.background);
        override_slot(&mut palette.foreground, "foreground", &self.foreground);
        override_slot(&mut palette.cursor, "cursor", &self.cursor);
        palette
    }
}

fn override_slot(slot: &mut Rgb, name: &str, value: &Option<String>) {
    let Some(hex) = value else {
        return;
    };
    match Rgb::from_hex(hex) {
        Ok(rgb) => *slot = rgb,
        Err(err) => log::warn!("[config] palette.{name}: {err}"),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Stable id for the section. Slugged from the title when empty.
    pub id: String,
    pub title: String,
    /// Jump key for this section, overriding the positional default.
    pub hint: Option<char>,
    pub links: Vec<LinkConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

impl LinkConfig {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl StartpageConfig {
    /// Strict read, surfacing file and parse failures.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Tolerant load: a missing file is the default config, a broken
    /// one logs a warning and falls back to the default.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("[config] no file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("[config] {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn hover(&self) -> HoverFold {
        if self.page.hover_fold {
            HoverFold::Enabled
        } else {
            HoverFold::Disabled
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_palette(&self.palette.resolve())
    }

    /// Builds the page model from the configured sections, preserving
    /// file order. Sections without an explicit id get one slugged from
    /// their title; colliding ids take a numeric suffix so every
    /// section folds on its own.
    pub fn page(&self) -> Page {
        let mut page = Page::new().with_indicators(
            self.page.expanded_indicator,
            self.page.collapsed_indicator,
        );
        for section in &self.sections {
            let base = if section.id.is_empty() {
                slug(&section.title)
            } else {
                section.id.clone()
            };
            let id = free_id(&page, base);
            let mut built = Section::new(id, &section.title).links(
                section
                    .links
                    .iter()
                    .map(|link| Link::new(&link.label, &link.url)),
            );
            if let Some(hint) = section.hint {
                built = built.hint(hint);
            }
            page = page.section(built);
        }
        page
    }

    /// Built-in page shown when the config file defines no sections.
    pub fn sample() -> Self {
        Self {
            sections: vec![
                SectionConfig {
                    id: "rust".into(),
                    title: "Rust".into(),
                    hint: None,
                    links: vec![
                        LinkConfig::new("crates.io", "https://crates.io"),
                        LinkConfig::new("docs.rs", "https://docs.rs"),
                        LinkConfig::new("std docs", "https://doc.rust-lang.org/std/"),
                    ],
                },
                SectionConfig {
                    id: "code".into(),
                    title: "Code".into(),
                    hint: None,
                    links: vec![
                        LinkConfig::new("github", "https://github.com"),
                        LinkConfig::new("gitlab", "https://gitlab.com"),
                    ],
                },
                SectionConfig {
                    id: "news".into(),
                    title: "News".into(),
                    hint: None,
                    links: vec![
                        LinkConfig::new("hacker news", "https://news.ycombinator.com"),
                        LinkConfig::new("lobsters", "https://lobste.rs"),
                        LinkConfig::new("this week in rust", "https://this-week-in-rust.org"),
                    ],
                },
            ],
            ..Self::default()
        }
    }
}

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// First of `base`, `base-2`, `base-3`, ... not already on the page.
/// Fold state is keyed by id, so two sections sharing one would fold
/// and unfold together.
fn free_id(page: &Page, base: String) -> String {
    if page.get(&base).is_none() {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if page.get(&candidate).is_none() {
            log::warn!("[config] duplicate section id {base:?}, using {candidate:?}");
            return candidate;
        }
        n += 1;
    }
}
