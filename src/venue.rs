//! Venue data model.
//!
//! A [`VenuePoint`] is one marker on the map plus everything the detail view
//! shows about it. Points are built once per load from CMS documents (or
//! the bundled fallback) and shared as `Arc<VenuePoint>`; relaxation hands
//! back new points rather than mutating shared ones.

use glam::Vec2;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::cms::documents::{
    AboutDocument, CreditDocument, GalleryDocument, GalleryPositionDocument,
    VenueDocument,
};
use crate::cms::ResponsiveImage;
use crate::projection::Bounds;

/// Validated geographic location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Coarse region used by the list view on small screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Pacific and mountain states.
    West,
    /// Everything not tagged otherwise.
    #[default]
    Central,
    /// Atlantic states.
    East,
}

impl Region {
    /// All regions in display order.
    pub const ALL: [Region; 3] = [Region::West, Region::Central, Region::East];

    /// Parse a CMS region key. Unknown or missing keys fall into
    /// [`Region::Central`].
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(|k| k.trim().to_ascii_lowercase()).as_deref() {
            Some("west") => Self::West,
            Some("east") => Self::East,
            _ => Self::Central,
        }
    }

    /// Upper-case heading shown above the region's venues.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::West => "WEST",
            Self::Central => "CENTRAL",
            Self::East => "EAST",
        }
    }
}

/// Manual placement of a gallery image, in percent of its block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GalleryPosition {
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

impl GalleryPosition {
    /// Whether any edge was pinned by an editor.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.top.is_some()
            || self.left.is_some()
            || self.bottom.is_some()
            || self.right.is_some()
    }
}

impl From<GalleryPositionDocument> for GalleryPosition {
    fn from(doc: GalleryPositionDocument) -> Self {
        Self {
            top: doc.top,
            left: doc.left,
            bottom: doc.bottom,
            right: doc.right,
            width: doc.width,
        }
    }
}

/// One image of the venue gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    /// Stable key (CMS array key, or the image URL when absent).
    pub key: String,
    /// Caption, possibly empty.
    pub title: String,
    /// Image URL.
    pub image_url: String,
    /// Placement inside the gallery block.
    pub position: GalleryPosition,
}

impl GalleryItem {
    /// Responsive sources for the image, capped at `max_width`.
    #[must_use]
    pub fn image(&self, max_width: Option<u32>) -> ResponsiveImage {
        ResponsiveImage::from_url(&self.image_url, max_width)
    }

    /// Items without an image are dropped.
    fn from_document(doc: GalleryDocument) -> Option<Self> {
        let image_url = doc.image_url.filter(|u| !u.is_empty())?;
        Some(Self {
            key: doc.key.unwrap_or_else(|| image_url.clone()),
            title: doc.title.unwrap_or_default(),
            image_url,
            position: doc.position.map(Into::into).unwrap_or_default(),
        })
    }
}

/// Name + role credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credit {
    /// Person or company.
    pub name: String,
    /// Role, if given.
    pub title: Option<String>,
}

/// Long-form "about" section of a venue page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AboutModule {
    /// Feature video URL.
    pub video_url: Option<String>,
    /// Poster frame URL.
    pub video_poster_url: Option<String>,
    /// Description paragraphs, flattened from portable text.
    pub paragraphs: Vec<String>,
    /// Services offered.
    pub services: Vec<String>,
    /// Partner credits.
    pub partners: Vec<Credit>,
    /// Crew credits.
    pub crew: Vec<Credit>,
}

impl AboutModule {
    /// Whether the section has anything worth rendering.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.video_url.is_some()
            || !self.paragraphs.is_empty()
            || !self.services.is_empty()
            || !self.partners.is_empty()
            || !self.crew.is_empty()
    }

    fn from_document(doc: AboutDocument) -> Self {
        let credits = |list: Option<Vec<CreditDocument>>| -> Vec<Credit> {
            list.unwrap_or_default()
                .into_iter()
                .filter_map(|c| {
                    let name = c.name.filter(|n| !n.trim().is_empty())?;
                    Some(Credit {
                        name,
                        title: c.title.filter(|t| !t.trim().is_empty()),
                    })
                })
                .collect()
        };
        Self {
            video_url: doc.video_url,
            video_poster_url: doc.video_poster_url,
            paragraphs: doc
                .description
                .unwrap_or_default()
                .iter()
                .filter_map(block_text)
                .collect(),
            services: doc
                .services
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .filter(|s| !s.trim().is_empty())
                .collect(),
            partners: credits(doc.partners),
            crew: credits(doc.crew),
        }
    }
}

/// Concatenate the span texts of one portable-text block.
fn block_text(block: &serde_json::Value) -> Option<String> {
    let children = block.get("children")?.as_array()?;
    let text: String = children
        .iter()
        .filter_map(|span| span.get("text").and_then(serde_json::Value::as_str))
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

/// Media references of a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VenueMedia {
    /// Hero background image.
    pub hero_image_url: Option<String>,
    /// SVG line art drawn over the hero.
    pub hero_line_animation_url: Option<String>,
    /// Texture for the flashlight logo plane.
    pub logo_url: Option<String>,
    /// 3D model of the building.
    pub model_url: Option<String>,
    /// Gallery images.
    pub gallery: Vec<GalleryItem>,
}

impl VenueMedia {
    /// Responsive sources for the hero background, if there is one.
    #[must_use]
    pub fn hero_image(
        &self,
        max_width: Option<u32>,
    ) -> Option<ResponsiveImage> {
        self.hero_image_url
            .as_deref()
            .map(|url| ResponsiveImage::from_url(url, max_width))
    }
}

/// A single map marker representing one physical venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuePoint {
    /// CMS document id.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// US state.
    pub state: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Region for the list view.
    pub region: Region,
    /// Geographic location.
    pub location: GeoPoint,
    /// Projected map-plane position.
    pub position: Vec2,
    /// Position after marker relaxation, when it moved.
    pub adjusted_position: Option<Vec2>,
    /// Short description.
    pub description: Option<String>,
    /// Media references.
    pub media: VenueMedia,
    /// About section, when the document has one.
    pub about: Option<AboutModule>,
}

impl VenuePoint {
    /// Build a renderable point from a CMS document.
    ///
    /// Returns `None` when the document has no usable location (both `lat`
    /// and `lng` present and finite), or no slug or title to route and
    /// label it by.
    #[must_use]
    pub fn from_document(doc: VenueDocument, bounds: &Bounds) -> Option<Self> {
        let geo = doc.location?;
        let (lat, lng) = (geo.lat?, geo.lng?);
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        let slug = non_blank(doc.slug)?;
        let title = non_blank(doc.title)?;

        let id = doc.id.unwrap_or_else(|| slug.clone());
        Some(Self {
            id,
            slug,
            title,
            region: Region::from_key(doc.region.as_deref()),
            state: doc.state,
            city: doc.city,
            location: GeoPoint { lat, lng },
            position: bounds.project(lng, lat),
            adjusted_position: None,
            description: doc.description,
            media: VenueMedia {
                hero_image_url: doc.hero_image_url,
                hero_line_animation_url: doc.hero_line_animation_url,
                logo_url: doc.logo_url,
                model_url: doc.model_url,
                gallery: doc
                    .gallery
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(GalleryItem::from_document)
                    .collect(),
            },
            about: doc
                .about_module
                .map(AboutModule::from_document)
                .filter(AboutModule::has_content),
        })
    }

    /// Where the marker is drawn: the relaxed position if any, else the
    /// projected one.
    #[inline]
    #[must_use]
    pub fn display_position(&self) -> Vec2 {
        self.adjusted_position.unwrap_or(self.position)
    }

    /// Copy of this point drawn at `adjusted`.
    #[must_use]
    pub fn with_adjusted_position(&self, adjusted: Vec2) -> Self {
        Self {
            adjusted_position: Some(adjusted),
            ..self.clone()
        }
    }

    /// Subtitle under the venue name: "CITY, STATE", the state alone, or
    /// "UNITED STATES".
    #[must_use]
    pub fn subtitle(&self) -> String {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => {
                format!("{city}, {state}").to_uppercase()
            }
            (None, Some(state)) => state.to_uppercase(),
            _ => "UNITED STATES".to_owned(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Keep the first venue for each slug. Later duplicates are dropped with a
/// warning so slug lookups and list order agree.
#[must_use]
pub fn dedup_by_slug(venues: Vec<VenuePoint>) -> Vec<VenuePoint> {
    let mut seen = FxHashSet::default();
    venues
        .into_iter()
        .filter(|venue| {
            let first = seen.insert(venue.slug.clone());
            if !first {
                log::warn!(
                    "dropping venue {:?}: slug {:?} already taken",
                    venue.id,
                    venue.slug
                );
            }
            first
        })
        .collect()
}
