use crate::light::Light;
use crate::stats::RayStats;
use crate::surface::Surface;
use crate::Color;
use glam::Vec3;

/// What the shader needs from the scene it is shading.
pub trait Scene {
    fn lights(&self) -> &[Light];

    fn surfaces(&self) -> &[Box<dyn Surface>];

    fn max_depth(&self) -> u32;

    fn stats(&self) -> &RayStats;

    /// Radiance arriving at `origin` from `direction`, shading whatever is hit at `depth`.
    fn trace(&self, origin: Vec3, direction: Vec3, depth: u32) -> Color;
}

/// Per-hit input to [`Material::shade`](crate::material::Material::shade).
pub struct ShadingContext<'a> {
    /// Unit direction the incoming ray travels along.
    pub ray_dir: Vec3,
    pub point: Vec3,
    /// Unit outward surface normal.
    pub normal: Vec3,
    pub depth: u32,
    pub scene: &'a dyn Scene,
}
