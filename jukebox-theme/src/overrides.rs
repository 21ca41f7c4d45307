//! # Color Overrides
//!
//! Per-theme color document (`theme.conf`) and the lookup precedence the
//! widgets rely on.
//!
//! ## Document format
//!
//! ```ini
//! [colors]
//! background = 32,32,32
//! accent = #64c864
//!
//! [button_colors]
//! clr = 200,50,50
//! clr_hover = 230,100,100
//! ```
//!
//! `[colors]` accepts only the keys of [GeneralColor]; `[button_colors]`
//! (or the legacy `[buttons]`) accepts any label, case-insensitive, with an
//! optional `_hover` / `_pressed` suffix. Invalid values and stray lines are
//! skipped one at a time; the rest of the document still applies.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::asset::VisualState;
use crate::color::Rgb;

/// The fixed set of general color keys a theme may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralColor {
    /// Window background fill.
    Background,
    /// Primary text.
    Text,
    /// Secondary text.
    TextSecondary,
    /// Accent (slider fill, highlights).
    Accent,
    /// Button fill.
    Button,
    /// Button fill while hovered.
    ButtonHover,
    /// Button fill while pressed.
    ButtonPressed,
    /// Label color on text buttons.
    ButtonText,
    /// Artist line on album cards.
    ArtistText,
    /// Album line on album cards.
    AlbumText,
    /// Track list entries.
    TrackList,
    /// Unskinned slider track.
    SliderTrack,
    /// Unskinned slider knob.
    SliderKnob,
}

impl GeneralColor {
    /// Every general key.
    pub const ALL: [GeneralColor; 13] = [
        GeneralColor::Background,
        GeneralColor::Text,
        GeneralColor::TextSecondary,
        GeneralColor::Accent,
        GeneralColor::Button,
        GeneralColor::ButtonHover,
        GeneralColor::ButtonPressed,
        GeneralColor::ButtonText,
        GeneralColor::ArtistText,
        GeneralColor::AlbumText,
        GeneralColor::TrackList,
        GeneralColor::SliderTrack,
        GeneralColor::SliderKnob,
    ];

    /// Key as written in `theme.conf`.
    pub fn key(self) -> &'static str {
        match self {
            GeneralColor::Background => "background",
            GeneralColor::Text => "text",
            GeneralColor::TextSecondary => "text_secondary",
            GeneralColor::Accent => "accent",
            GeneralColor::Button => "button",
            GeneralColor::ButtonHover => "button_hover",
            GeneralColor::ButtonPressed => "button_pressed",
            GeneralColor::ButtonText => "button_text",
            GeneralColor::ArtistText => "artist_text",
            GeneralColor::AlbumText => "album_text",
            GeneralColor::TrackList => "track_list",
            GeneralColor::SliderTrack => "slider_track",
            GeneralColor::SliderKnob => "slider_knob",
        }
    }

    /// Look a key up by its `theme.conf` name (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.key() == key)
    }

    /// Hard-coded color used when no theme overrides the key.
    pub fn builtin(self) -> Rgb {
        match self {
            GeneralColor::Background => Rgb(32, 32, 32),
            GeneralColor::Text => Rgb(255, 255, 255),
            GeneralColor::TextSecondary => Rgb(200, 200, 200),
            GeneralColor::Accent => Rgb(100, 200, 100),
            GeneralColor::Button => Rgb(64, 64, 64),
            GeneralColor::ButtonHover => Rgb(100, 100, 100),
            GeneralColor::ButtonPressed => Rgb(50, 50, 50),
            GeneralColor::ButtonText => Rgb(255, 255, 255),
            GeneralColor::ArtistText => Rgb(255, 255, 255),
            GeneralColor::AlbumText => Rgb(200, 200, 200),
            GeneralColor::TrackList => Rgb(200, 200, 200),
            GeneralColor::SliderTrack => Rgb(100, 100, 100),
            GeneralColor::SliderKnob => Rgb(200, 200, 200),
        }
    }

    /// The key to use for `state`. Only the button fill has state variants.
    pub fn for_state(self, state: VisualState) -> Self {
        match (self, state) {
            (GeneralColor::Button, VisualState::Hover) => GeneralColor::ButtonHover,
            (GeneralColor::Button, VisualState::Pressed) => GeneralColor::ButtonPressed,
            (other, _) => other,
        }
    }
}

/// Where a color lookup starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScope<'a> {
    /// A general theme color.
    General(GeneralColor),
    /// A text-labeled button, looked up by its label.
    Button(&'a str),
}

/// Parsed per-theme color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrideTable {
    general: HashMap<GeneralColor, Rgb>,
    buttons: HashMap<String, HashMap<VisualState, Rgb>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Colors,
    Buttons,
    Other,
}

impl ColorOverrideTable {
    /// File name of the color document inside a theme directory.
    pub const FILE_NAME: &'static str = "theme.conf";

    /// A table with no overrides; every lookup yields a built-in default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a color document. Never fails.
    pub fn parse(document: &str) -> Self {
        let mut table = Self::new();
        let mut section = Section::None;

        for (index, raw) in document.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                section = match line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                    Some(name) => match name.trim().to_ascii_lowercase().as_str() {
                        "colors" => Section::Colors,
                        "button_colors" | "buttons" => Section::Buttons,
                        _ => Section::Other,
                    },
                    None => {
                        log::debug!("theme.conf line {}: malformed section header", index + 1);
                        Section::Other
                    },
                };
                continue;
            }

            let Some((key, value)) = split_entry(line) else {
                log::debug!("theme.conf line {}: not a key/value entry", index + 1);
                continue;
            };

            match section {
                Section::Colors => table.apply_general(key, value),
                Section::Buttons => table.apply_button(key, value),
                Section::None | Section::Other => {},
            }
        }

        table
    }

    /// Load `theme.conf` from a theme directory.
    ///
    /// A missing file yields an empty table. An unreadable file is logged and
    /// also yields an empty table.
    pub fn load(theme_dir: &Path) -> Self {
        let path = theme_dir.join(Self::FILE_NAME);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(e) => {
                log::warn!("Failed to read {:?}: {}", path, e);
                Self::new()
            },
        }
    }

    /// Resolve a color. Always succeeds.
    ///
    /// For [ColorScope::Button] the chain is: the label's entry for `state`,
    /// the label's normal entry, the general button key for `state`, the
    /// built-in default.
    pub fn lookup(&self, scope: ColorScope<'_>, state: VisualState) -> Rgb {
        match scope {
            ColorScope::General(color) => self.general(color.for_state(state)),
            ColorScope::Button(label) => self
                .button_entry(label, state)
                .unwrap_or_else(|| self.general(GeneralColor::Button.for_state(state))),
        }
    }

    /// A general color, overridden or built-in.
    pub fn general(&self, color: GeneralColor) -> Rgb {
        self.general
            .get(&color)
            .copied()
            .unwrap_or_else(|| color.builtin())
    }

    /// Shorthand for a button lookup.
    pub fn button(&self, label: &str, state: VisualState) -> Rgb {
        self.lookup(ColorScope::Button(label), state)
    }

    /// Whether the table holds any per-button entry for `label`.
    pub fn has_button(&self, label: &str) -> bool {
        self.buttons.contains_key(&normalize_label(label))
    }

    /// Whether no override was parsed at all.
    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.buttons.is_empty()
    }

    fn button_entry(&self, label: &str, state: VisualState) -> Option<Rgb> {
        let entry = self.buttons.get(&normalize_label(label))?;
        entry
            .get(&state)
            .or_else(|| entry.get(&VisualState::Normal))
            .copied()
    }

    fn apply_general(&mut self, key: &str, value: &str) {
        let Some(color) = GeneralColor::from_key(key) else {
            log::debug!("theme.conf: ignoring unknown color key '{}'", key);
            return;
        };
        match Rgb::parse(value) {
            Some(rgb) => {
                self.general.insert(color, rgb);
            },
            None => log::debug!("theme.conf: discarding invalid value '{}' for '{}'", value, key),
        }
    }

    fn apply_button(&mut self, key: &str, value: &str) {
        let Some(rgb) = Rgb::parse(value) else {
            log::debug!("theme.conf: discarding invalid value '{}' for button '{}'", value, key);
            return;
        };

        let raw = normalize_label(key);
        let (base, state) = if let Some(base) = raw.strip_suffix("_hover") {
            (base, VisualState::Hover)
        } else if let Some(base) = raw.strip_suffix("_pressed") {
            (base, VisualState::Pressed)
        } else {
            (raw.as_str(), VisualState::Normal)
        };

        self.buttons
            .entry(base.to_string())
            .or_default()
            .insert(state, rgb);
    }
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let split_at = match (line.find('='), line.find(':')) {
        (Some(eq), Some(colon)) => eq.min(colon),
        (Some(eq), None) => eq,
        (None, Some(colon)) => colon,
        (None, None) => return None,
    };
    let key = line[..split_at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[split_at + 1..].trim()))
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# sample theme
[colors]
background = 10,20,30
accent = #FF8800
text = not-a-color
unknown_key = 1,2,3

[button_colors]
CLR = 200,50,50
clr_hover = 255,100,100
ent_pressed = #102030
broken line without separator
credits: 255,215,0
";

    #[test]
    fn test_general_overrides() {
        let table = ColorOverrideTable::parse(DOCUMENT);
        assert_eq!(table.general(GeneralColor::Background), Rgb(10, 20, 30));
        assert_eq!(table.general(GeneralColor::Accent), Rgb(255, 136, 0));
        // Invalid value keeps the built-in default.
        assert_eq!(table.general(GeneralColor::Text), Rgb(255, 255, 255));
        assert_eq!(table.general(GeneralColor::ButtonHover), Rgb(100, 100, 100));
    }

    #[test]
    fn test_button_precedence() {
        let table = ColorOverrideTable::parse(DOCUMENT);

        assert_eq!(table.button("clr", VisualState::Hover), Rgb(255, 100, 100));
        assert_eq!(table.button("Clr", VisualState::Normal), Rgb(200, 50, 50));
        // No explicit pressed entry: the normal entry stands in.
        assert_eq!(table.button("CLR", VisualState::Pressed), Rgb(200, 50, 50));
        // Only a pressed entry: other states fall to the general button keys.
        assert_eq!(table.button("ent", VisualState::Pressed), Rgb(16, 32, 48));
        assert_eq!(table.button("ent", VisualState::Hover), Rgb(100, 100, 100));
        assert_eq!(table.button("credits", VisualState::Normal), Rgb(255, 215, 0));
        assert_eq!(table.button("unknown", VisualState::Normal), Rgb(64, 64, 64));
    }

    #[test]
    fn test_pressed_falls_back_to_general_button_pressed() {
        let table = ColorOverrideTable::parse("[colors]\nbutton_pressed = 1,2,3\n[buttons]\nok_hover = 9,9,9\n");
        assert_eq!(table.button("ok", VisualState::Pressed), Rgb(1, 2, 3));
        assert_eq!(table.button("ok", VisualState::Hover), Rgb(9, 9, 9));
    }

    #[test]
    fn test_general_scope_respects_state() {
        let table = ColorOverrideTable::new();
        assert_eq!(
            table.lookup(ColorScope::General(GeneralColor::Button), VisualState::Pressed),
            Rgb(50, 50, 50)
        );
        assert_eq!(
            table.lookup(ColorScope::General(GeneralColor::Accent), VisualState::Hover),
            Rgb(100, 200, 100)
        );
    }

    #[test]
    fn test_entries_outside_known_sections_are_ignored() {
        let table = ColorOverrideTable::parse("accent = 1,1,1\n[extra]\naccent = 2,2,2\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ColorOverrideTable::load(dir.path()).is_empty());
    }
}
