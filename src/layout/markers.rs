use std::sync::Arc;

use crate::layout::relax::{min_distance_for_viewport, Relaxation};
use crate::options::LayoutOptions;
use crate::projection::Bounds;
use crate::venue::VenuePoint;

/// Marker positions for the current viewport, recomputed only when the
/// derived spacing changes.
///
/// Relaxation always starts from the projected positions of the current
/// venue set, so shrinking and re-growing the window lands on the same
/// layout.
#[derive(Debug)]
pub struct MarkerLayout {
    options: LayoutOptions,
    bounds: Bounds,
    venues: Vec<Arc<VenuePoint>>,
    cached: Option<(f32, Vec<Arc<VenuePoint>>)>,
}

impl MarkerLayout {
    /// Empty layout.
    #[must_use]
    pub fn new(options: LayoutOptions, bounds: Bounds) -> Self {
        Self {
            options,
            bounds,
            venues: Vec::new(),
            cached: None,
        }
    }

    /// Replace the venue set and drop the cached layout.
    pub fn set_venues(&mut self, venues: Vec<Arc<VenuePoint>>) {
        self.venues = venues;
        self.cached = None;
    }

    /// Replace the layout options and drop the cached layout.
    pub fn set_options(&mut self, options: LayoutOptions) {
        if self.options != options {
            self.options = options;
            self.cached = None;
        }
    }

    /// Venues as loaded, before relaxation.
    #[must_use]
    pub fn venues(&self) -> &[Arc<VenuePoint>] {
        &self.venues
    }

    /// Marker spacing for a viewport width, per the current options.
    #[must_use]
    pub fn min_distance(&self, viewport_width: f32) -> f32 {
        min_distance_for_viewport(
            self.options.base_distance,
            self.options.world_width,
            viewport_width,
            self.options.min_distance_floor,
        )
    }

    /// Relaxed markers for a viewport width.
    pub fn layout_for_viewport(
        &mut self,
        viewport_width: f32,
    ) -> &[Arc<VenuePoint>] {
        let min_distance = self.min_distance(viewport_width);
        let stale = self
            .cached
            .as_ref()
            .is_none_or(|(cached, _)| *cached != min_distance);
        if stale {
            let relaxation = Relaxation {
                iterations: self.options.iterations,
                epsilon: self.options.epsilon,
            };
            let relaxed =
                relaxation.run(&self.venues, min_distance, &self.bounds);
            self.cached = Some((min_distance, relaxed));
        }
        self.cached
            .as_ref()
            .map_or(&self.venues[..], |(_, relaxed)| &relaxed[..])
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::venue::{GeoPoint, Region, VenueMedia};

    fn venue(slug: &str, x: f32) -> Arc<VenuePoint> {
        Arc::new(VenuePoint {
            id: slug.to_owned(),
            slug: slug.to_owned(),
            title: slug.to_owned(),
            state: None,
            city: None,
            region: Region::East,
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            position: Vec2::new(x, 0.0),
            adjusted_position: None,
            description: None,
            media: VenueMedia::default(),
            about: None,
        })
    }

    #[test]
    fn layout_is_cached_per_spacing() {
        let mut layout =
            MarkerLayout::new(LayoutOptions::default(), Bounds::default());
        layout.set_venues(vec![venue("a", 0.0), venue("b", 10.0)]);

        let first = layout.layout_for_viewport(1920.0).to_vec();
        let again = layout.layout_for_viewport(1920.0).to_vec();
        assert!(Arc::ptr_eq(&first[0], &again[0]));

        let narrow = layout.layout_for_viewport(400.0).to_vec();
        let gap = narrow[0]
            .display_position()
            .distance(narrow[1].display_position());
        let wide_gap = first[0]
            .display_position()
            .distance(first[1].display_position());
        assert!(gap > wide_gap);
    }

    #[test]
    fn new_venues_invalidate_cache() {
        let mut layout =
            MarkerLayout::new(LayoutOptions::default(), Bounds::default());
        layout.set_venues(vec![venue("a", 0.0)]);
        assert_eq!(layout.layout_for_viewport(1440.0).len(), 1);
        layout.set_venues(vec![venue("a", 0.0), venue("b", 100.0)]);
        assert_eq!(layout.layout_for_viewport(1440.0).len(), 2);
        assert_eq!(layout.venues().len(), 2);
    }
}
