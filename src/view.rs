//! Which view the site shows for a location, and the venue lists those
//! views derive.

use std::sync::Arc;

use crate::venue::{Region, VenuePoint};

/// Public path the site is mounted under.
pub const BASE_PATH: &str = "/map/";

/// The two logical views plus the not-found state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Interactive map (or region list on small screens).
    Map,
    /// Venue detail page for a slug.
    Venue(String),
    /// Anything else.
    NotFound,
}

impl View {
    /// Resolve a location path. Query strings and fragments are ignored,
    /// as are the [`BASE_PATH`] prefix and a trailing slash.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let base = BASE_PATH.trim_end_matches('/');
        let path = match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };

        if path.is_empty() {
            return Self::Map;
        }
        match path.strip_prefix("/venue/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                Self::Venue(slug.to_owned())
            }
            _ => Self::NotFound,
        }
    }

    /// Path of the view relative to [`BASE_PATH`]; `None` for
    /// [`View::NotFound`].
    #[must_use]
    pub fn path(&self) -> Option<String> {
        match self {
            Self::Map => Some("/".to_owned()),
            Self::Venue(slug) => Some(format!("/venue/{slug}")),
            Self::NotFound => None,
        }
    }
}

/// State of a venue detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum VenuePage<'a> {
    /// The venue is known.
    Found(&'a Arc<VenuePoint>),
    /// Not known yet; venues are still loading.
    Loading,
    /// No such venue.
    NotFound,
}

impl<'a> VenuePage<'a> {
    /// Look `slug` up among `venues`. An unknown slug is only reported as
    /// missing once loading has finished.
    #[must_use]
    pub fn resolve(
        slug: &str,
        venues: &'a [Arc<VenuePoint>],
        loading: bool,
    ) -> Self {
        match venues.iter().find(|v| v.slug == slug) {
            Some(venue) => Self::Found(venue),
            None if loading => Self::Loading,
            None => Self::NotFound,
        }
    }
}

/// Venues grouped for the region list, in [`Region::ALL`] order. Order
/// within a region follows `venues`.
#[must_use]
pub fn group_by_region(
    venues: &[Arc<VenuePoint>],
) -> Vec<(Region, Vec<Arc<VenuePoint>>)> {
    Region::ALL
        .iter()
        .map(|&region| {
            let members = venues
                .iter()
                .filter(|v| v.region == region)
                .cloned()
                .collect();
            (region, members)
        })
        .collect()
}

/// The venue after `current_slug` in alphabetical title order, wrapping
/// around at the end. An unknown slug yields the first venue.
#[must_use]
pub fn next_up<'a>(
    venues: &'a [Arc<VenuePoint>],
    current_slug: &str,
) -> Option<&'a Arc<VenuePoint>> {
    let mut sorted: Vec<&Arc<VenuePoint>> = venues.iter().collect();
    sorted.sort_by_cached_key(|v| v.title.to_lowercase());

    let next = sorted
        .iter()
        .position(|v| v.slug == current_slug)
        .map_or(0, |i| (i + 1) % sorted.len());
    sorted.get(next).copied()
}
