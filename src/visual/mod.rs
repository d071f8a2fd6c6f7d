//! Per-frame parameters for the map's custom visual effects.
//!
//! Nothing here touches a GPU. The host owns its pipelines and textures and
//! uploads the plain uniform blocks produced here each frame; the WGSL
//! programs that consume them are exposed through [`ShaderProgram`].

mod flashlight;
mod hero;
mod shaders;
mod stroke;
mod text;

pub use flashlight::{FlashlightParams, FlashlightUniform};
pub use hero::{HeroAsset, HeroBackground};
pub use shaders::ShaderProgram;
pub use stroke::{StrokeDraw, StrokeFrame, StrokeGroup, MASK_REVEAL_HEIGHT};
pub use text::{TextFlashlightParams, TextFlashlightUniform};
