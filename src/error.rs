//! Crate-level error types.

use std::fmt;

/// Errors produced by the venue-atlas crate.
///
/// Only configuration errors are meant to reach the application boundary;
/// fetch and asset failures are downgraded to fallbacks by the layers that
/// produce them.
#[derive(Debug)]
pub enum VenueAtlasError {
    /// Missing or malformed CMS / studio configuration.
    Config(String),
    /// CMS request failed (transport, status code, timeout).
    Http(String),
    /// CMS response was not the JSON shape we expected.
    Decode(serde_json::Error),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn the background content loader.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Unusable media asset (bad asset reference, non-SVG line art).
    Asset(String),
    /// WGSL program failed to parse or validate.
    Shader(String),
}

impl fmt::Display for VenueAtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Http(msg) => write!(f, "CMS request failed: {msg}"),
            Self::Decode(e) => write!(f, "CMS response decode error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Asset(msg) => write!(f, "asset error: {msg}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
        }
    }
}

impl std::error::Error for VenueAtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for VenueAtlasError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

impl From<std::io::Error> for VenueAtlasError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "http")]
impl From<ureq::Error> for VenueAtlasError {
    fn from(e: ureq::Error) -> Self {
        Self::Http(e.to_string())
    }
}
