use crate::Color;
use glam::Vec3;

/// Point light with separate ambient, diffuse and specular intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Vec3, ambient: Color, diffuse: Color, specular: Color) -> Light {
        Light { position, ambient, diffuse, specular }
    }

    /// White light of unit diffuse and specular intensity.
    pub fn white(position: Vec3, ambient: Color) -> Light {
        Light { position, ambient, diffuse: Color::ONE, specular: Color::ONE }
    }
}
