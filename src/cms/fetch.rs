//! Venue and settings fetches that never fail.
//!
//! Every failure is logged and replaced by a fallback, so the map always has
//! something to show. Each fetch is a single attempt.

use serde_json::Value;

use crate::cms::documents::{SiteSettingsDocument, VenueDocument};
use crate::cms::fallback::bundled_documents;
use crate::cms::queries;
use crate::cms::settings::SiteSettings;
use crate::cms::source::ContentSource;
use crate::projection::Bounds;
use crate::venue::{dedup_by_slug, VenuePoint};

/// What [`fetch_venues`] returns when the CMS cannot provide venues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// The bundled venue list.
    #[default]
    Bundled,
    /// Nothing; the map shows an empty state.
    Empty,
}

impl FallbackPolicy {
    fn venues(self, bounds: &Bounds) -> Vec<VenuePoint> {
        match self {
            Self::Bundled => points(bundled_documents(), bounds),
            Self::Empty => Vec::new(),
        }
    }
}

fn points(documents: Vec<VenueDocument>, bounds: &Bounds) -> Vec<VenuePoint> {
    dedup_by_slug(
        documents
            .into_iter()
            .filter_map(|doc| VenuePoint::from_document(doc, bounds))
            .collect(),
    )
}

/// Decode the result array one document at a time so a single malformed
/// document does not hide the rest.
fn decode_documents(result: Value) -> Option<Vec<VenueDocument>> {
    let Value::Array(items) = result else {
        return None;
    };
    let total = items.len();
    let documents: Vec<VenueDocument> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("skipping malformed venue document: {e}");
                None
            }
        })
        .collect();
    if documents.len() < total {
        log::debug!("decoded {} of {total} venue documents", documents.len());
    }
    Some(documents)
}

/// Where a venue list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Live CMS data.
    Live,
    /// No CMS configured; the fallback was used.
    Unconfigured,
    /// The CMS failed or had nothing to show; the fallback was used.
    Offline,
}

/// Fetch all venues and project them into `bounds`.
///
/// `source` is `None` when the CMS is not configured. Unconfigured sources,
/// request or decoding failures, and empty results all yield `policy`'s
/// fallback. Documents without a usable location are dropped.
#[must_use]
pub fn fetch_venues(
    source: Option<&dyn ContentSource>,
    bounds: &Bounds,
    policy: FallbackPolicy,
) -> Vec<VenuePoint> {
    fetch_venues_with_status(source, bounds, policy).0
}

/// [`fetch_venues`], also reporting whether the fallback was used.
#[must_use]
pub fn fetch_venues_with_status(
    source: Option<&dyn ContentSource>,
    bounds: &Bounds,
    policy: FallbackPolicy,
) -> (Vec<VenuePoint>, FetchStatus) {
    let Some(source) = source else {
        log::warn!("CMS not configured; using {policy:?} venues");
        return (policy.venues(bounds), FetchStatus::Unconfigured);
    };
    match fetch_live(source, bounds) {
        Some(venues) => {
            log::info!("loaded {} venues from the CMS", venues.len());
            (venues, FetchStatus::Live)
        }
        None => {
            log::warn!("using {policy:?} venues");
            (policy.venues(bounds), FetchStatus::Offline)
        }
    }
}

fn fetch_live(
    source: &dyn ContentSource,
    bounds: &Bounds,
) -> Option<Vec<VenuePoint>> {
    let result = match source.query(queries::VENUES) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("venue fetch failed: {e}");
            return None;
        }
    };
    let Some(documents) = decode_documents(result) else {
        log::warn!("venue query did not return a list");
        return None;
    };
    let venues = points(documents, bounds);
    if venues.is_empty() {
        log::warn!("CMS returned no mappable venues");
        return None;
    }
    Some(venues)
}

/// Fetch the site-settings singleton. `None` on any failure or when the
/// document is missing or empty.
#[must_use]
pub fn fetch_site_settings(
    source: Option<&dyn ContentSource>,
) -> Option<SiteSettings> {
    let source = source?;
    let result = match source.query(queries::SITE_SETTINGS) {
        Ok(Value::Null) => return None,
        Ok(result) => result,
        Err(e) => {
            log::warn!("site settings fetch failed: {e}");
            return None;
        }
    };
    match serde_json::from_value::<SiteSettingsDocument>(result) {
        Ok(doc) => Some(SiteSettings::from(doc)).filter(|s| !s.is_empty()),
        Err(e) => {
            log::warn!("malformed site settings: {e}");
            None
        }
    }
}
