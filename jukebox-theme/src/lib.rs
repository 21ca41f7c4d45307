#![warn(missing_docs)]

//! # Jukebox Skin System
//!
//! Directory-based themes for the jukebox interface: asset lookup with a
//! fixed PNG → SVG → fallback chain, per-theme color overrides, rollover
//! highlighting and a generation-tagged render cache.
//!
//! ## Overview
//!
//! - **[ThemeCatalog](catalog::ThemeCatalog)**: discovered themes, the active
//!   selection and its persistence
//! - **[AssetResolver](resolver::AssetResolver)**: theme + [AssetKey](asset::AssetKey)
//!   → decoded image or nothing
//! - **[ColorOverrideTable](overrides::ColorOverrideTable)**: `theme.conf`
//!   parsing and color lookup precedence
//! - **[RenderCache](cache::RenderCache)**: memoized surfaces keyed by content,
//!   size and theme generation
//! - **[brighten](compositor::brighten)**: the rollover highlight
//! - **[Skin](skin::Skin)**: one handle owning all of the above
//! - **[SkinConfig](config::SkinConfig)**: configuration from environment
//!   variables and TOML files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jukebox_services::MemorySettings;
//! use jukebox_theme::config::SkinConfig;
//! use jukebox_theme::overrides::GeneralColor;
//! use jukebox_theme::skin::Skin;
//!
//! let config = SkinConfig::new().with_themes_dir("themes");
//! let mut skin = Skin::from_config(&config, MemorySettings::new());
//!
//! if !skin.activate("light") {
//!     log::warn!("light theme missing, keeping {:?}", skin.catalog().current_name());
//! }
//!
//! let accent = skin.colors().general(GeneralColor::Accent);
//! ```
//!
//! ## Theme Layout
//!
//! ```text
//! themes/
//! ├── dark/
//! │   ├── background.png
//! │   ├── play_button.png
//! │   ├── play_button_hover.png
//! │   ├── slider_knob.svg
//! │   └── theme.conf
//! └── light/
//!     └── ...
//! ```
//!
//! Every file is optional. Missing or corrupt assets fall back to colors and
//! procedural drawing.
//!
//! ## Cargo Features
//!
//! - `svg` (default): rasterize `.svg` assets with `resvg`

/// Logical asset roles and their file naming.
pub mod asset;
/// Generation-tagged render cache.
pub mod cache;
/// Theme discovery and selection.
pub mod catalog;
/// RGB colors.
pub mod color;
/// Rollover highlighting and scaling.
pub mod compositor;
/// Skin configuration.
pub mod config;
/// Error types.
pub mod error;
/// Per-theme color overrides.
pub mod overrides;
/// Per-widget visual derivation.
pub mod rendering;
/// Asset lookup with fallback.
pub mod resolver;
/// The skin facade.
pub mod skin;
/// Vector rasterization.
pub mod svg;
/// A single theme directory.
pub mod theme;

pub use asset::{AssetKey, IconKind, VisualState};
pub use cache::{RenderCache, Surface};
pub use catalog::ThemeCatalog;
pub use color::Rgb;
pub use config::SkinConfig;
pub use error::{ThemeError, ThemeResult};
pub use overrides::{ColorOverrideTable, ColorScope, GeneralColor};
pub use skin::{FontId, Skin, TextRasterizer};
pub use theme::Theme;
