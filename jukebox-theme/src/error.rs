//! # Theme Error Types
//!
//! Almost everything in the skin is a soft condition that falls through a
//! priority chain. These errors cover the few fallible helpers (reading a
//! configuration file, rasterizing an SVG, decoding an image) whose callers
//! decide whether to log and continue.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// A configuration or override file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// An asset file exists but could not be decoded.
    #[error("Failed to decode asset {path:?}: {source}")]
    AssetDecode {
        /// The asset that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// An SVG asset could not be rasterized.
    #[error("Failed to rasterize SVG {path:?}: {details}")]
    SvgRaster {
        /// The SVG that failed.
        path: PathBuf,
        /// What went wrong.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an asset decode error.
    pub fn decode_error(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::AssetDecode {
            path: path.into(),
            source,
        }
    }

    /// Create an SVG rasterization error.
    pub fn svg_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::SvgRaster {
            path: path.into(),
            details: details.into(),
        }
    }
}
