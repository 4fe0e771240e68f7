pub mod camera;
pub mod config;
pub mod error;
pub mod image;
pub mod light;
pub mod material;
pub mod plane;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod stats;
pub mod surface;
pub mod util;
pub mod world;

/// Linear RGB radiance.
pub type Color = glam::Vec3;
