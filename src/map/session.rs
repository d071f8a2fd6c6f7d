use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::camera::{
    Camera, CameraController, CameraEvent, CameraTarget, OrbitControls,
};
use crate::cms::{FetchStatus, LoadedContent, SiteSettings};
use crate::layout::MarkerLayout;
use crate::map::overlay::{world_to_screen, LeaderLine};
use crate::options::{CameraOptions, MapOptions, Options};
use crate::projection::planar_to_world;
use crate::venue::{dedup_by_slug, VenuePoint};
use crate::view::View;

/// Where venue data stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// First load still in flight.
    Loading,
    /// Venues are in, from wherever `FetchStatus` says.
    Ready(FetchStatus),
}

impl LoadStatus {
    /// Notice shown over the map, if any.
    #[must_use]
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Syncing map data…"),
            Self::Ready(FetchStatus::Unconfigured) => {
                Some("Configure the CMS environment to load live map data.")
            }
            Self::Ready(FetchStatus::Offline) => {
                Some("Showing cached map data (CMS offline)")
            }
            Self::Ready(FetchStatus::Live) => None,
        }
    }
}

/// Progress of a see-more request.
#[derive(Debug, Clone, PartialEq)]
enum Navigation {
    /// Camera is flying to the venue.
    Flying { slug: String },
    /// Flight done; navigating once `remaining` seconds pass.
    Leaving { slug: String, remaining: f32 },
}

/// Interactive state of the map view.
///
/// Holds the loaded venues and their marker layout, the current selection
/// and the see-more sequence: clicking "see more" flies the camera toward
/// the selected marker, and once the flight completes and a short delay
/// passes, [`MapSession::frame`] yields the venue view to navigate to.
/// Selection is frozen while a see-more sequence runs.
#[derive(Debug)]
pub struct MapSession {
    map: MapOptions,
    camera: CameraOptions,
    layout: MarkerLayout,
    index: FxHashMap<String, usize>,
    viewport: Vec2,
    status: LoadStatus,
    settings: Option<SiteSettings>,
    selected: Option<String>,
    controller: CameraController,
    navigation: Option<Navigation>,
}

impl MapSession {
    /// Empty session waiting for its first load.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            map: options.map.clone(),
            camera: options.camera.clone(),
            layout: MarkerLayout::new(options.layout.clone(), options.map.bounds),
            index: FxHashMap::default(),
            viewport: Vec2::new(1920.0, 1080.0),
            status: LoadStatus::Loading,
            settings: None,
            selected: None,
            controller: options.camera.controller(),
            navigation: None,
        }
    }

    /// Take in a finished load. A selection whose venue disappeared is
    /// dropped.
    pub fn apply(&mut self, content: LoadedContent) {
        let venues: Vec<Arc<VenuePoint>> = dedup_by_slug(content.venues)
            .into_iter()
            .map(Arc::new)
            .collect();
        self.index = venues
            .iter()
            .enumerate()
            .map(|(i, v)| (v.slug.clone(), i))
            .collect();
        self.layout.set_venues(venues);
        self.status = LoadStatus::Ready(content.status);
        self.settings = content.settings;

        if let Some(slug) = &self.selected {
            if !self.index.contains_key(slug) {
                log::debug!("selected venue {slug} no longer loaded");
                self.selected = None;
            }
        }
        log::info!("map session has {} venues", self.index.len());
    }

    /// Viewport size in pixels; drives marker spacing and projection.
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Load status.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Site metadata from the last load.
    #[must_use]
    pub fn settings(&self) -> Option<&SiteSettings> {
        self.settings.as_ref()
    }

    /// Venues as loaded.
    #[must_use]
    pub fn venues(&self) -> &[Arc<VenuePoint>] {
        self.layout.venues()
    }

    /// Venue by slug.
    #[must_use]
    pub fn venue(&self, slug: &str) -> Option<&Arc<VenuePoint>> {
        self.index.get(slug).and_then(|&i| self.layout.venues().get(i))
    }

    /// Markers relaxed for the current viewport, in load order.
    pub fn markers(&mut self) -> &[Arc<VenuePoint>] {
        self.layout.layout_for_viewport(self.viewport.x)
    }

    /// World position of a marker.
    #[must_use]
    pub fn marker_position(&self, venue: &VenuePoint) -> Vec3 {
        planar_to_world(venue.display_position(), self.map.marker_elevation)
    }

    /// Draw scale of a marker; `hovered` comes from the host's picking.
    #[must_use]
    pub fn marker_scale(&self, slug: &str, hovered: bool) -> f32 {
        let selected = self.selected.as_deref() == Some(slug);
        self.map.marker.scale(hovered || selected)
    }

    /// Click on a marker: selects it, or deselects it if already selected.
    /// Ignored during a see-more sequence and for unknown slugs.
    pub fn toggle(&mut self, slug: &str) {
        if self.is_navigating() {
            return;
        }
        if !self.index.contains_key(slug) {
            log::debug!("ignoring click on unknown venue {slug}");
            return;
        }
        if self.selected.as_deref() == Some(slug) {
            self.selected = None;
        } else {
            self.selected = Some(slug.to_owned());
        }
    }

    /// Dismiss the selection card.
    pub fn close(&mut self) {
        if !self.is_navigating() {
            self.selected = None;
        }
    }

    /// The selected venue, with its relaxed position.
    pub fn selected(&mut self) -> Option<Arc<VenuePoint>> {
        let slug = self.selected.clone()?;
        self.markers().iter().find(|v| v.slug == slug).cloned()
    }

    /// Whether a see-more sequence is running.
    #[must_use]
    pub fn is_navigating(&self) -> bool {
        self.navigation.is_some()
    }

    /// Start the see-more sequence for the selected venue: the camera flies
    /// toward its marker, zooming in by the configured factor. Returns the
    /// flight target, or `None` without a selection or while a sequence is
    /// already running.
    pub fn see_more(
        &mut self,
        camera: &Camera,
        controls: Option<&dyn OrbitControls>,
    ) -> Option<CameraTarget> {
        if self.is_navigating() {
            return None;
        }
        let venue = self.selected()?;
        let target = CameraTarget::look_at(self.marker_position(&venue))
            .with_zoom(self.camera.see_more_zoom);

        self.controller.set_target(&target, camera, controls);
        self.navigation = Some(Navigation::Flying {
            slug: venue.slug.clone(),
        });
        log::info!("see more: {}", venue.slug);
        Some(target)
    }

    /// Abandon a see-more sequence, leaving the camera where it is.
    pub fn cancel_navigation(&mut self) {
        self.controller.cancel();
        self.navigation = None;
    }

    /// Per-frame update. Moves the camera while a flight runs and returns
    /// the view to navigate to once the sequence finishes.
    pub fn frame(
        &mut self,
        dt: f32,
        camera: &mut Camera,
        controls: Option<&mut dyn OrbitControls>,
    ) -> Option<View> {
        let event = self.controller.update(dt, camera, controls);

        match self.navigation.take()? {
            Navigation::Flying { slug } => {
                let remaining = self.camera.navigation_delay;
                let landed = event == CameraEvent::Completed
                    || !self.controller.is_animating();
                if landed {
                    self.navigation =
                        Some(Navigation::Leaving { slug, remaining });
                } else {
                    self.navigation = Some(Navigation::Flying { slug });
                }
                None
            }
            Navigation::Leaving { slug, remaining } => {
                let remaining = remaining - dt.max(0.0);
                if remaining > 0.0 {
                    self.navigation =
                        Some(Navigation::Leaving { slug, remaining });
                    return None;
                }
                self.selected = None;
                Some(View::Venue(slug))
            }
        }
    }

    /// Leader line from the selection card's `anchor` to the selected
    /// marker on screen. `None` without a selection or when the marker is
    /// behind the camera.
    pub fn leader_line(
        &mut self,
        anchor: Vec2,
        view_proj: Mat4,
    ) -> Option<LeaderLine> {
        let venue = self.selected()?;
        let world = self.marker_position(&venue);
        let marker = world_to_screen(world, view_proj, self.viewport)?;
        Some(LeaderLine::route(anchor, marker))
    }
}
