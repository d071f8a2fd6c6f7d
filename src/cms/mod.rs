//! Content fetch layer.
//!
//! Venues and site settings come from a hosted headless CMS queried with
//! GROQ. The layer is deliberately forgiving: [`fetch_venues`] and
//! [`fetch_site_settings`] never return errors, they log and fall back.
//! Only malformed configuration ([`CmsConfig::from_env`]) is reported to the
//! caller.
//!
//! The HTTP client ([`SanityClient`]) is behind the `http` feature; anything
//! implementing [`ContentSource`] can stand in for it.

mod config;
pub mod documents;
mod fallback;
mod fetch;
mod image;
mod loader;
pub mod queries;
mod settings;
mod source;

pub use config::{
    studio_host_from_lookup, validate_studio_host, CmsConfig,
    DEFAULT_API_VERSION, DEFAULT_DATASET, DEFAULT_STUDIO_HOST,
};
pub use fallback::bundled_documents;
pub use fetch::{
    fetch_site_settings, fetch_venues, fetch_venues_with_status, FallbackPolicy,
    FetchStatus,
};
pub use image::{
    ImageAsset, ImageUrlBuilder, ResponsiveImage, DEFAULT_QUALITY,
    DEFAULT_SRC_WIDTH, SRCSET_WIDTHS,
};
pub use loader::{CancelToken, LoadedContent, PendingLoad, VenueLoader};
pub use settings::SiteSettings;
#[cfg(feature = "http")]
pub use source::SanityClient;
pub use source::ContentSource;
