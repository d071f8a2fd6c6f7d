//! Centralized map options with TOML preset support.
//!
//! All tweakable settings (map extent, marker layout, camera, flashlight
//! effects) are consolidated here. Options serialize to/from TOML for presets
//! stored in `assets/presets/`. CMS connection settings are not options; they
//! come from the environment (see [`crate::cms::CmsConfig`]).

mod camera;
mod layout;
mod map;

use std::path::Path;

pub use camera::CameraOptions;
pub use layout::LayoutOptions;
pub use map::{MapOptions, MarkerOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VenueAtlasError;
use crate::visual::{FlashlightParams, TextFlashlightParams};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[flashlight]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Map extent and marker geometry.
    pub map: MapOptions,
    /// Marker spacing and relaxation.
    pub layout: LayoutOptions,
    /// Camera projection, fly-to and orbit limits.
    pub camera: CameraOptions,
    /// Logo plane flashlight.
    pub flashlight: FlashlightParams,
    /// Headline text flashlight.
    pub text_flashlight: TextFlashlightParams,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Io`] if the file cannot be read,
    /// [`VenueAtlasError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, VenueAtlasError> {
        let content =
            std::fs::read_to_string(path).map_err(VenueAtlasError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::OptionsParse`] if the text is not valid options
    /// TOML.
    pub fn from_toml(content: &str) -> Result<Self, VenueAtlasError> {
        toml::from_str(content)
            .map_err(|e| VenueAtlasError::OptionsParse(e.to_string()))
    }

    /// Render options as pretty TOML.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, VenueAtlasError> {
        toml::to_string_pretty(self)
            .map_err(|e| VenueAtlasError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::OptionsParse`] if serialization fails,
    /// [`VenueAtlasError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VenueAtlasError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VenueAtlasError::Io)?;
        }
        std::fs::write(path, content).map_err(VenueAtlasError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[flashlight]
radius = 0.5

[camera]
speed = 0.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.flashlight.radius, 0.5);
        assert_eq!(opts.camera.speed, 0.5);
        // Everything else should be default
        assert_eq!(opts.flashlight.feather, 0.83);
        assert_eq!(opts.camera.see_more_zoom, 0.3);
        assert_eq!(opts.layout.iterations, 8);
        assert_eq!(opts.map.bounds.width, 600.0);
        assert_eq!(opts.map.marker_elevation, 12.5);
    }

    #[test]
    fn shipped_presets_parse() {
        let dir =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/presets");
        let names = Options::list_presets(&dir);
        assert!(names.contains(&"compact".to_owned()));
        for name in names {
            let opts = Options::load(&dir.join(format!("{name}.toml")))
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(opts.layout.base_distance > 0.0, "{name}");
        }
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nspeed = \"fast\"").unwrap_err();
        assert!(matches!(err, VenueAtlasError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("venue-atlas-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.layout.base_distance = 64.0;
        opts.save(&dir.join("dense.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["calm", "dense"]);
        let loaded = Options::load(&dir.join("dense.toml")).unwrap();
        assert_eq!(loaded.layout.base_distance, 64.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("map"));
        assert!(props.contains_key("layout"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("flashlight"));
        assert!(props.contains_key("text_flashlight"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("speed").is_some());
        assert!(camera.get("start_position").is_none());
        let text = &props["text_flashlight"]["properties"];
        assert!(text.get("mid_position").is_some());
        assert!(text.get("color_top").is_none());
    }

    #[test]
    fn camera_options_build_the_opening_view() {
        let opts = CameraOptions::default();
        let camera = opts.camera(2.0);
        assert_eq!(camera.eye, glam::Vec3::new(0.0, 400.0, 400.0));
        assert_eq!(camera.fovy, 50.0);
        let rig = opts.orbit_rig();
        assert_eq!(rig.min_distance, 200.0);
        assert_eq!(rig.max_distance, 800.0);
        assert_eq!(opts.controller().progress(), 0.0);
    }
}
