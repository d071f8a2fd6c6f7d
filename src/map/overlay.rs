//! Screen-space geometry for the selection overlay.
//!
//! The selected venue's card is tied to its marker by an elbow "leader"
//! line: a horizontal run out of the card, a vertical drop at the elbow,
//! and a horizontal tail into the marker.

use glam::{Mat4, Vec2, Vec3};

/// Minimum horizontal run from the card anchor before the elbow.
pub const LEADER_RUN: f32 = 80.0;
/// Tails shorter than this are not drawn.
pub const MIN_TAIL: f32 = 0.5;

/// Project a world point to pixel coordinates (origin top-left, y down).
///
/// `None` for points behind the camera.
#[must_use]
pub fn world_to_screen(world: Vec3, view_proj: Mat4, viewport: Vec2) -> Option<Vec2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.x,
        (-ndc.y * 0.5 + 0.5) * viewport.y,
    ))
}

/// Axis-aligned line segment in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Top or left end.
    pub start: Vec2,
    /// Bottom or right end.
    pub end: Vec2,
}

impl Segment {
    /// Segment length in pixels.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Elbow line from a card anchor to a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderLine {
    /// Horizontal run out of the card.
    pub run: Segment,
    /// Vertical drop at the elbow; absent when anchor and marker share a row.
    pub drop: Option<Segment>,
    /// Horizontal tail to the marker; absent when the elbow is on it.
    pub tail: Option<Segment>,
    /// Marker position, where the end dot is centred.
    pub endpoint: Vec2,
}

impl LeaderLine {
    /// Route a line from `anchor` to `marker`. The elbow sits at least
    /// [`LEADER_RUN`] right of the anchor, or under the marker if that is
    /// further right.
    #[must_use]
    pub fn route(anchor: Vec2, marker: Vec2) -> Self {
        let elbow_x = (anchor.x + LEADER_RUN).max(marker.x);

        let run = Segment {
            start: anchor,
            end: Vec2::new(elbow_x, anchor.y),
        };

        let drop = ((anchor.y - marker.y).abs() > 0.0).then(|| Segment {
            start: Vec2::new(elbow_x, anchor.y.min(marker.y)),
            end: Vec2::new(elbow_x, anchor.y.max(marker.y)),
        });

        let tail = ((marker.x - elbow_x).abs() > MIN_TAIL).then(|| Segment {
            start: Vec2::new(marker.x.min(elbow_x), marker.y),
            end: Vec2::new(marker.x.max(elbow_x), marker.y),
        });

        Self {
            run,
            drop,
            tail,
            endpoint: marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    #[test]
    fn look_at_point_projects_to_viewport_centre() {
        let camera = Camera::default();
        let viewport = Vec2::new(1600.0, 900.0);
        let screen =
            world_to_screen(camera.target, camera.build_matrix(), viewport)
                .unwrap();
        assert!((screen - viewport * 0.5).length() < 1e-2);
    }

    #[test]
    fn points_behind_camera_are_hidden() {
        let camera = Camera::default();
        let behind = camera.eye + (camera.eye - camera.target);
        assert_eq!(
            world_to_screen(behind, camera.build_matrix(), Vec2::new(800.0, 600.0)),
            None
        );
    }

    #[test]
    fn marker_far_right_gets_no_tail() {
        let line = LeaderLine::route(Vec2::new(100.0, 50.0), Vec2::new(400.0, 300.0));
        assert_eq!(line.run.end, Vec2::new(400.0, 50.0));
        let drop = line.drop.unwrap();
        assert_eq!((drop.start.y, drop.end.y), (50.0, 300.0));
        assert_eq!(line.tail, None);
        assert_eq!(line.endpoint, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn marker_left_of_elbow_gets_tail_back() {
        let line = LeaderLine::route(Vec2::new(100.0, 400.0), Vec2::new(120.0, 200.0));
        assert_eq!(line.run.length(), LEADER_RUN);
        let drop = line.drop.unwrap();
        assert_eq!(drop.start, Vec2::new(180.0, 200.0));
        let tail = line.tail.unwrap();
        assert_eq!(tail.start, Vec2::new(120.0, 200.0));
        assert_eq!(tail.end, Vec2::new(180.0, 200.0));
    }

    #[test]
    fn same_row_has_no_drop() {
        let line = LeaderLine::route(Vec2::new(0.0, 10.0), Vec2::new(300.0, 10.0));
        assert_eq!(line.drop, None);
        assert_eq!(line.tail, None);
    }
}
