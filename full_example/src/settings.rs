use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use softraster::BlurConfig;

/// Render settings, read once at startup from a TOML file.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub model_path: PathBuf,
    pub result_path: PathBuf,
    pub camera_position: [f32; 3],
    /// Yaw in degrees
    pub camera_theta: f32,
    /// Pitch in degrees
    pub camera_phi: f32,
    /// Vertical field of view in degrees
    pub camera_angle_of_view: f32,
    pub camera_z_near: f32,
    pub camera_z_far: f32,
    pub blur_radius: u32,
    pub blur_sigma: f32,
    /// Rescale the blur kernel to sum to one, `false` gives the darker raw Gaussian
    pub blur_normalize: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 1920,
            height: 1080,
            model_path: PathBuf::from("models/cube.obj"),
            result_path: PathBuf::from("result.png"),
            camera_position: [0.0, 0.0, 3.0],
            camera_theta: 0.0,
            camera_phi: 0.0,
            camera_angle_of_view: 60.0,
            camera_z_near: 0.1,
            camera_z_far: 100.0,
            blur_radius: 5,
            blur_sigma: 5.0,
            blur_normalize: true,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).with_context(|| format!("reading settings from {}", path.display()))?;

        Settings::parse(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Settings> {
        Ok(toml::from_str(text)?)
    }

    pub fn blur_config(&self) -> Result<BlurConfig> {
        Ok(BlurConfig::new(self.blur_radius, self.blur_sigma)?.with_normalize(self.blur_normalize))
    }
}
