//! Raw document shapes returned by the CMS queries.
//!
//! Every field is optional: editors save half-finished documents and the
//! query projections return `null` for anything missing. Validation happens
//! when a document is turned into a [`crate::venue::VenuePoint`].

use serde::{Deserialize, Serialize};

/// Geopoint as stored by the CMS (`{ lat, lng, alt }`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GeoDocument {
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lng: Option<f64>,
}

/// Manual gallery placement, in percent of the gallery block.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryPositionDocument {
    /// Distance from the top edge.
    pub top: Option<f32>,
    /// Distance from the left edge.
    pub left: Option<f32>,
    /// Distance from the bottom edge.
    pub bottom: Option<f32>,
    /// Distance from the right edge.
    pub right: Option<f32>,
    /// Rendered width in pixels.
    pub width: Option<f32>,
}

/// One gallery entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDocument {
    /// Array key assigned by the CMS.
    #[serde(rename = "_key")]
    pub key: Option<String>,
    /// Caption.
    pub title: Option<String>,
    /// Resolved asset URL.
    pub image_url: Option<String>,
    /// Optional manual placement.
    pub position: Option<GalleryPositionDocument>,
}

/// Name + role pair used for partners and crew.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreditDocument {
    /// Person or company name.
    pub name: Option<String>,
    /// Role.
    pub title: Option<String>,
}

/// Nested "about" module of a venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutDocument {
    /// Feature video URL.
    pub video_url: Option<String>,
    /// Poster frame URL.
    pub video_poster_url: Option<String>,
    /// Portable-text blocks.
    pub description: Option<Vec<serde_json::Value>>,
    /// Service names.
    pub services: Option<Vec<Option<String>>>,
    /// Partner credits.
    pub partners: Option<Vec<CreditDocument>>,
    /// Crew credits.
    pub crew: Option<Vec<CreditDocument>>,
}

/// Venue ("map point") document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueDocument {
    /// Document id.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    /// Display title.
    pub title: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// US state name.
    pub state: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Region key (`west`, `central`, `east`).
    pub region: Option<String>,
    /// Map location.
    pub location: Option<GeoDocument>,
    /// Short description.
    pub description: Option<String>,
    /// Hero image URL.
    pub hero_image_url: Option<String>,
    /// Hero line-art SVG URL.
    pub hero_line_animation_url: Option<String>,
    /// 3D model URL.
    pub model_url: Option<String>,
    /// Flashlight logo texture URL.
    pub logo_url: Option<String>,
    /// Gallery items.
    pub gallery: Option<Vec<GalleryDocument>>,
    /// About module.
    pub about_module: Option<AboutDocument>,
}

/// Singleton site-settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDocument {
    /// Site title.
    pub site_title: Option<String>,
    /// Meta description.
    pub site_description: Option<String>,
    /// Social share image URL.
    pub social_share_image_url: Option<String>,
    /// Static map image for small screens.
    pub mobile_map_image_url: Option<String>,
}
