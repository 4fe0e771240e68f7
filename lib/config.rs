//! Render settings

use std::path::PathBuf;

use crate::error::{RenderError, Result};

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Degrees.
    pub vertical_fov: f32,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: 600, height: 400, vertical_fov: 20.0, output: PathBuf::from("image.ppm") }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn vertical_fov(mut self, degrees: f32) -> Self {
        self.vertical_fov = degrees;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.vertical_fov > 0.0 && self.vertical_fov < 180.0) {
            return Err(RenderError::InvalidConfig(format!(
                "vertical fov must be in (0, 180) degrees, got {}",
                self.vertical_fov
            )));
        }
        Ok(())
    }
}
