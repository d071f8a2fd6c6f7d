use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::VenueAtlasError;

/// Self-contained WGSL programs for the map's custom materials.
///
/// Every program has a `vs_main` vertex and an `fs_main` fragment entry
/// point. Group 0 binds a `Transform` uniform (view-projection and model
/// matrices), the program's parameter uniform, a texture and a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderProgram {
    /// Flashlight reveal over a textured plane; pairs with
    /// [`FlashlightUniform`](crate::visual::FlashlightUniform).
    Flashlight,
    /// Gradient text with a sweeping beam; pairs with
    /// [`TextFlashlightUniform`](crate::visual::TextFlashlightUniform).
    TextFlashlight,
}

impl ShaderProgram {
    /// Every program.
    pub const ALL: [ShaderProgram; 2] =
        [ShaderProgram::Flashlight, ShaderProgram::TextFlashlight];

    /// Vertex entry point name.
    pub const VERTEX_ENTRY: &'static str = "vs_main";
    /// Fragment entry point name.
    pub const FRAGMENT_ENTRY: &'static str = "fs_main";

    /// WGSL source.
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            Self::Flashlight => {
                include_str!("../../assets/shaders/flashlight.wgsl")
            }
            Self::TextFlashlight => {
                include_str!("../../assets/shaders/text_flashlight.wgsl")
            }
        }
    }

    /// File name, for labels and diagnostics.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Flashlight => "flashlight.wgsl",
            Self::TextFlashlight => "text_flashlight.wgsl",
        }
    }

    /// Parse and validate the program.
    ///
    /// # Errors
    ///
    /// Returns [`VenueAtlasError::Shader`] with a rendered diagnostic when
    /// the source fails to parse or validate.
    pub fn module(self) -> Result<naga::Module, VenueAtlasError> {
        let source = self.source();
        let module = naga::front::wgsl::parse_str(source).map_err(|e| {
            VenueAtlasError::Shader(format!(
                "{}: {}",
                self.file_name(),
                e.emit_to_string(source)
            ))
        })?;
        let _info =
            Validator::new(ValidationFlags::all(), Capabilities::default())
                .validate(&module)
                .map_err(|e| {
                    VenueAtlasError::Shader(format!(
                        "{}: {}",
                        self.file_name(),
                        e.into_inner()
                    ))
                })?;
        Ok(module)
    }
}
