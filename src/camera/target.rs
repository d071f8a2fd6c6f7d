use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A vector in one of the loose shapes hosts hand to the camera: a
/// 3-element array or an `{x, y, z}` object whose missing axes are 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetVector {
    /// `[x, y, z]`; extra elements are ignored.
    Array(Vec<f32>),
    /// `{x, y, z}` with optional axes.
    Object {
        /// X component.
        #[serde(default)]
        x: Option<f32>,
        /// Y component.
        #[serde(default)]
        y: Option<f32>,
        /// Z component.
        #[serde(default)]
        z: Option<f32>,
    },
}

impl TargetVector {
    /// Resolve to a vector. Arrays shorter than three elements resolve to
    /// `None`.
    #[must_use]
    pub fn resolve(&self) -> Option<Vec3> {
        match self {
            Self::Array(values) => match values.as_slice() {
                [x, y, z, ..] => Some(Vec3::new(*x, *y, *z)),
                _ => None,
            },
            Self::Object { x, y, z } => Some(Vec3::new(
                x.unwrap_or(0.0),
                y.unwrap_or(0.0),
                z.unwrap_or(0.0),
            )),
        }
    }
}

impl From<Vec3> for TargetVector {
    fn from(v: Vec3) -> Self {
        Self::Array(v.to_array().to_vec())
    }
}

impl From<[f32; 3]> for TargetVector {
    fn from(v: [f32; 3]) -> Self {
        Self::Array(v.to_vec())
    }
}

/// Where the next fly-to should end.
///
/// The end eye offset (eye minus look-at) is `offset` when given, else the
/// current offset scaled by `zoom_factor`, else the current offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraTarget {
    /// End look-at point. `None` keeps the current look-at.
    #[serde(default)]
    pub position: Option<TargetVector>,
    /// Explicit end eye offset.
    #[serde(default)]
    pub offset: Option<TargetVector>,
    /// Scale applied to the current eye offset.
    #[serde(default)]
    pub zoom_factor: Option<f32>,
}

impl CameraTarget {
    /// Fly to look at `position`, keeping the current offset.
    #[must_use]
    pub fn look_at(position: Vec3) -> Self {
        Self {
            position: Some(position.into()),
            ..Self::default()
        }
    }

    /// Scale the current offset by `factor` on arrival.
    #[must_use]
    pub fn with_zoom(mut self, factor: f32) -> Self {
        self.zoom_factor = Some(factor);
        self
    }

    /// Arrive at an explicit offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Resolved end look-at point, if any.
    #[must_use]
    pub fn resolved_position(&self) -> Option<Vec3> {
        self.position.as_ref().and_then(TargetVector::resolve)
    }

    /// End eye offset given the offset at the start of the flight.
    #[must_use]
    pub fn end_offset(&self, start_offset: Vec3) -> Vec3 {
        let explicit = self.offset.as_ref().and_then(TargetVector::resolve);
        if let Some(offset) = explicit {
            return offset;
        }
        match self.zoom_factor {
            Some(factor) if factor.is_finite() => start_offset * factor,
            _ => start_offset,
        }
    }
}

impl From<Vec3> for CameraTarget {
    fn from(position: Vec3) -> Self {
        Self::look_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_and_object_forms() {
        let array: TargetVector = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(array.resolve(), Some(Vec3::new(1.0, 2.0, 3.0)));

        let partial: TargetVector = serde_json::from_str(r#"{"x": 4}"#).unwrap();
        assert_eq!(partial.resolve(), Some(Vec3::new(4.0, 0.0, 0.0)));

        let short: TargetVector = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(short.resolve(), None);
    }

    #[test]
    fn end_offset_precedence() {
        let start = Vec3::new(0.0, 90.0, 180.0);
        let explicit = CameraTarget::look_at(Vec3::ZERO)
            .with_zoom(0.5)
            .with_offset(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(explicit.end_offset(start), Vec3::new(1.0, 2.0, 3.0));

        let zoomed = CameraTarget::look_at(Vec3::ZERO).with_zoom(0.5);
        assert_eq!(zoomed.end_offset(start), Vec3::new(0.0, 45.0, 90.0));

        assert_eq!(CameraTarget::look_at(Vec3::ZERO).end_offset(start), start);
    }

    #[test]
    fn deserializes_camel_case_target() {
        let target: CameraTarget =
            serde_json::from_str(r#"{"position": [10, 0, 10], "zoomFactor": 0.3}"#).unwrap();
        assert_eq!(target.resolved_position(), Some(Vec3::new(10.0, 0.0, 10.0)));
        assert_eq!(target.zoom_factor, Some(0.3));
    }
}
