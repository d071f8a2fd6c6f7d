use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MIN_POSITIVE: f32 = 1e-4;

/// Tunables of the headline text shader: a four-stop vertical gradient lit
/// by a beam sweeping left to right.
///
/// Colors are 0-255 RGB triples as edited in design tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Text Flashlight", inline)]
#[serde(default)]
pub struct TextFlashlightParams {
    /// Gradient colour at the top of the text block.
    #[schemars(skip)]
    pub color_top: [u8; 3],
    /// Gradient colour at `mid_position`.
    #[schemars(skip)]
    pub color_mid: [u8; 3],
    /// Gradient colour at `low_position`.
    #[schemars(skip)]
    pub color_low: [u8; 3],
    /// Gradient colour at the bottom.
    #[schemars(skip)]
    pub color_bottom: [u8; 3],
    /// Height of the mid stop, clamped to [0.05, 0.95].
    #[schemars(title = "Mid Position", range(min = 0.05, max = 0.95), extend("step" = 0.01))]
    pub mid_position: f32,
    /// Height of the low stop, kept below the mid stop.
    #[schemars(title = "Low Position", range(min = 0.0, max = 0.9), extend("step" = 0.01))]
    pub low_position: f32,
    /// Exponent applied to the gradient coordinate.
    #[schemars(title = "Exponent", range(min = 0.1, max = 3.0), extend("step" = 0.01))]
    pub color_exponent: f32,
    /// Sweep cycles per second.
    #[schemars(title = "Sweep Speed", range(min = 0.05, max = 2.0), extend("step" = 0.01))]
    pub sweep_speed: f32,
    /// Vertical beam offset in NDC.
    #[schemars(title = "Vertical Offset", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub sweep_y: f32,
    /// Beam half-width in block UV units.
    #[schemars(title = "Radius", range(min = 0.05, max = 1.5), extend("step" = 0.01))]
    pub radius: f32,
    /// Beam soft edge width.
    #[schemars(title = "Feather", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub feather: f32,
    /// Beam brightness.
    #[schemars(title = "Intensity", range(min = 0.2, max = 5.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Beam colour.
    #[schemars(skip)]
    pub beam_color: [u8; 3],
    /// Glyph alpha away from the beam.
    #[schemars(title = "Ambient Alpha", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient_alpha: f32,
}

impl Default for TextFlashlightParams {
    fn default() -> Self {
        Self {
            color_top: [255, 255, 255],
            color_mid: [160, 160, 160],
            color_low: [40, 40, 40],
            color_bottom: [80, 80, 80],
            mid_position: 0.45,
            low_position: 0.2,
            color_exponent: 1.0,
            sweep_speed: 0.3,
            sweep_y: 0.0,
            radius: 0.4,
            feather: 0.25,
            intensity: 1.8,
            beam_color: [255, 255, 255],
            ambient_alpha: 0.3,
        }
    }
}

fn normalized(rgb: [u8; 3]) -> [f32; 4] {
    [
        f32::from(rgb[0]) / 255.0,
        f32::from(rgb[1]) / 255.0,
        f32::from(rgb[2]) / 255.0,
        1.0,
    ]
}

impl TextFlashlightParams {
    /// Gradient stops `(mid, low)` after clamping.
    #[must_use]
    pub fn stops(&self) -> (f32, f32) {
        let mid = self.mid_position.clamp(0.05, 0.95);
        let low = self.low_position.clamp(0.0, mid - 0.01);
        (mid, low)
    }

    /// Beam centre in NDC at `elapsed` seconds: x sweeps -1 to 1 once per
    /// cycle, y holds at the clamped vertical offset.
    #[must_use]
    pub fn pointer_at(&self, elapsed: f32) -> Vec2 {
        let phase = (elapsed * self.sweep_speed.max(MIN_POSITIVE)).fract();
        Vec2::new(-1.0 + 2.0 * phase, self.sweep_y.clamp(-1.0, 1.0))
    }

    /// Uniform block for the frame at `elapsed` seconds on a surface of
    /// `resolution` pixels.
    #[must_use]
    pub fn uniform_at(&self, elapsed: f32, resolution: Vec2) -> TextFlashlightUniform {
        let (mid, low) = self.stops();
        TextFlashlightUniform {
            color_top: normalized(self.color_top),
            color_mid: normalized(self.color_mid),
            color_low: normalized(self.color_low),
            color_bottom: normalized(self.color_bottom),
            beam_color: normalized(self.beam_color),
            pointer_ndc: self.pointer_at(elapsed).to_array(),
            resolution: resolution.to_array(),
            exponent: self.color_exponent.max(MIN_POSITIVE),
            mid_position: mid,
            low_position: low,
            ambient_alpha: self.ambient_alpha,
            radius: self.radius,
            feather: self.feather,
            intensity: self.intensity,
            time: elapsed,
        }
    }
}

/// GPU uniform for `text_flashlight.wgsl`. Colors are RGBA with alpha 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextFlashlightUniform {
    /// Top gradient colour.
    pub color_top: [f32; 4],
    /// Mid gradient colour.
    pub color_mid: [f32; 4],
    /// Low gradient colour.
    pub color_low: [f32; 4],
    /// Bottom gradient colour.
    pub color_bottom: [f32; 4],
    /// Beam colour.
    pub beam_color: [f32; 4],
    /// Beam centre in NDC.
    pub pointer_ndc: [f32; 2],
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    /// Gradient exponent.
    pub exponent: f32,
    /// Mid stop height.
    pub mid_position: f32,
    /// Low stop height.
    pub low_position: f32,
    /// Alpha away from the beam.
    pub ambient_alpha: f32,
    /// Beam half-width.
    pub radius: f32,
    /// Beam soft edge.
    pub feather: f32,
    /// Beam brightness.
    pub intensity: f32,
    /// Elapsed seconds.
    pub time: f32,
}
