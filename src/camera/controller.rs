use glam::Vec3;

use crate::camera::controls::OrbitControls;
use crate::camera::core::Camera;
use crate::camera::target::CameraTarget;
use crate::util::easing::EasingFunction;

/// Default animation speed in progress units per second (about 3 s per
/// flight).
pub const DEFAULT_SPEED: f32 = 0.33;

/// Whether a flight is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    /// No flight; `update` leaves the camera alone.
    Idle,
    /// Flying toward the last target.
    Animating,
}

/// Outcome of one [`CameraController::update`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Nothing to do.
    Idle,
    /// Mid-flight, with raw (un-eased) progress in (0, 1).
    Progress(f32),
    /// The flight reached its end on this frame.
    Completed,
}

/// Look-at point and eye offset at some point of a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Look-at point.
    pub target: Vec3,
    /// Eye minus look-at.
    pub offset: Vec3,
}

impl CameraPose {
    /// Eye position for this pose.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.target + self.offset
    }
}

/// Eased fly-to animation between the current view and a [`CameraTarget`].
///
/// The look-at point and the eye offset are interpolated separately, so a
/// zoom and a pan blend into one smooth move.
pub struct CameraController {
    speed: f32,
    easing: EasingFunction,
    state: CameraState,
    progress: f32,
    start: CameraPose,
    end: CameraPose,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl CameraController {
    /// Idle controller flying at `speed` progress units per second.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        let rest = CameraPose {
            target: Vec3::ZERO,
            offset: Vec3::ZERO,
        };
        Self {
            speed,
            easing: EasingFunction::CubicInOut,
            state: CameraState::Idle,
            progress: 0.0,
            start: rest,
            end: rest,
            on_complete: None,
        }
    }

    /// Register a callback fired once each time a flight completes.
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Raw progress of the current (or last) flight in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a flight is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state == CameraState::Animating
    }

    /// Start a flight from the camera's current view.
    ///
    /// The start look-at comes from the orbit controls when present, else
    /// from a point ahead of the eye. Calling this mid-flight restarts from
    /// wherever the camera currently is.
    pub fn set_target(
        &mut self,
        target: &CameraTarget,
        camera: &Camera,
        controls: Option<&dyn OrbitControls>,
    ) {
        let start_target =
            controls.map_or_else(|| camera.look_ahead(), OrbitControls::target);
        let start_offset = camera.eye - start_target;

        self.start = CameraPose {
            target: start_target,
            offset: start_offset,
        };
        self.end = CameraPose {
            target: target.resolved_position().unwrap_or(start_target),
            offset: target.end_offset(start_offset),
        };
        self.progress = 0.0;
        self.state = CameraState::Animating;
        log::debug!(
            "camera flight {:?} -> {:?} (offset {:?} -> {:?})",
            self.start.target,
            self.end.target,
            self.start.offset,
            self.end.offset
        );
    }

    /// Stop the current flight where it is without firing completion.
    pub fn cancel(&mut self) {
        self.state = CameraState::Idle;
    }

    /// Pose at raw progress `progress` of the current flight. Progress 1
    /// returns the end pose exactly.
    #[must_use]
    pub fn interpolated_at(&self, progress: f32) -> CameraPose {
        let t = self.easing.evaluate(progress);
        if t >= 1.0 {
            return self.end;
        }
        CameraPose {
            target: self.start.target.lerp(self.end.target, t),
            offset: self.start.offset.lerp(self.end.offset, t),
        }
    }

    /// Advance the flight by `dt` seconds and move the camera.
    pub fn update(
        &mut self,
        dt: f32,
        camera: &mut Camera,
        controls: Option<&mut dyn OrbitControls>,
    ) -> CameraEvent {
        if self.state == CameraState::Idle {
            return CameraEvent::Idle;
        }

        self.progress = (self.progress + dt.max(0.0) * self.speed).min(1.0);
        let pose = self.interpolated_at(self.progress);

        camera.eye = pose.eye();
        match controls {
            Some(controls) => {
                controls.set_target(pose.target);
                controls.update(camera);
            }
            None => camera.look_at(pose.target),
        }

        if self.progress < 1.0 {
            return CameraEvent::Progress(self.progress);
        }

        self.state = CameraState::Idle;
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        CameraEvent::Completed
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl std::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("speed", &self.speed)
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
