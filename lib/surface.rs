use std::sync::Arc;

use crate::material::Material;
use crate::ray::Ray;
use crate::util::TMIN;
use glam::Vec3;

pub trait Surface: Send + Sync {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection>;

    fn material(&self) -> &Material;

    /// Distance to the nearest intersection along `direction` beyond [`TMIN`], if any.
    ///
    /// A ray leaving a surface skips its own origin and reports the next crossing.
    fn nearest_int(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        self.raycast(&Ray::new(origin, direction), TMIN, f32::INFINITY).map(|hit| hit.t)
    }
}

pub struct SurfaceIntersection {
    pub p: Vec3,
    /// Outward geometric normal; the shader decides which side is lit.
    pub normal: Vec3,
    pub material: Arc<Material>,
    pub t: f32,
}
