use std::f32::consts::TAU;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest sweep speed, radius and feather handed to the shader.
const MIN_POSITIVE: f32 = 1e-4;

/// Tunables of the flashlight reveal on the venue logo plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flashlight", inline)]
#[serde(default)]
pub struct FlashlightParams {
    /// Beam radius in UV units.
    #[schemars(title = "Radius", range(min = 0.05, max = 1.5), extend("step" = 0.01))]
    pub radius: f32,
    /// Width of the beam's soft edge in UV units.
    #[schemars(title = "Feather", range(min = 0.01, max = 1.5), extend("step" = 0.01))]
    pub feather: f32,
    /// Brightness multiplier inside the beam.
    #[schemars(title = "Intensity", range(min = 0.0, max = 6.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Alpha outside the beam.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Sweep cycles per second.
    #[schemars(title = "Sweep Speed", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub sweep_speed: f32,
    /// Leftmost beam position (UV x).
    #[schemars(title = "Sweep Min", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub sweep_min: f32,
    /// Rightmost beam position (UV x).
    #[schemars(title = "Sweep Max", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub sweep_max: f32,
    /// Beam height (UV y).
    #[schemars(title = "Sweep Y", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub sweep_y: f32,
    /// Sweep back and forth instead of wrapping around.
    #[schemars(title = "Ping Pong")]
    pub ping_pong: bool,
}

impl Default for FlashlightParams {
    fn default() -> Self {
        Self {
            radius: 0.63,
            feather: 0.83,
            intensity: 3.0,
            ambient: 0.09,
            sweep_speed: 0.18,
            sweep_min: 0.0,
            sweep_max: 1.0,
            sweep_y: 0.5,
            ping_pong: true,
        }
    }
}

impl FlashlightParams {
    /// Tighter, slower preset used on the detail page header logo.
    #[must_use]
    pub fn logo() -> Self {
        Self {
            radius: 0.58,
            feather: 0.75,
            intensity: 2.7,
            ambient: 0.12,
            sweep_speed: 0.22,
            sweep_min: 0.05,
            sweep_max: 0.95,
            sweep_y: 0.45,
            ping_pong: true,
        }
    }

    /// Sweep phase in [0, 1] at `elapsed` seconds.
    #[must_use]
    pub fn phase_at(&self, elapsed: f32) -> f32 {
        let t = elapsed * self.sweep_speed.max(MIN_POSITIVE);
        if self.ping_pong {
            0.5 * ((t * TAU).sin() + 1.0)
        } else {
            t.fract()
        }
    }

    /// Uniform block for the frame at `elapsed` seconds.
    ///
    /// Out-of-range parameters are sanitised here rather than in the shader:
    /// sweep bounds are ordered and clamped to [0, 1], radius and feather
    /// stay positive, intensity non-negative, ambient within [0, 1].
    #[must_use]
    pub fn uniform_at(&self, elapsed: f32) -> FlashlightUniform {
        let min_x = self.sweep_min.min(self.sweep_max).clamp(0.0, 1.0);
        let max_x = self.sweep_min.max(self.sweep_max).clamp(0.0, 1.0);
        let phase = self.phase_at(elapsed);

        FlashlightUniform {
            pointer: [
                min_x + (max_x - min_x) * phase,
                self.sweep_y.clamp(0.0, 1.0),
            ],
            radius: self.radius.max(MIN_POSITIVE),
            feather: self.feather.max(MIN_POSITIVE),
            intensity: self.intensity.max(0.0),
            ambient: self.ambient.clamp(0.0, 1.0),
            time: elapsed,
            _pad: 0.0,
        }
    }
}

/// GPU uniform for `flashlight.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlashlightUniform {
    /// Beam centre in UV space.
    pub pointer: [f32; 2],
    /// Beam radius.
    pub radius: f32,
    /// Soft edge width.
    pub feather: f32,
    /// Brightness inside the beam.
    pub intensity: f32,
    /// Alpha outside the beam.
    pub ambient: f32,
    /// Elapsed seconds.
    pub time: f32,
    pub(crate) _pad: f32,
}
