use glam::Vec3;
use std::sync::Arc;

use crate::material::Material;
use crate::ray::Ray;
use crate::surface::{Surface, SurfaceIntersection};

/// Infinite plane through `point`, facing along `normal`.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Plane {
        Plane { point, normal: normal.normalize(), material }
    }
}

impl Surface for Plane {
    fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let denom = self.normal.dot(r.direction);
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.point - r.origin).dot(self.normal) / denom;
        if t < t_min || t_max < t {
            return None;
        }

        Some(SurfaceIntersection { p: r.at(t), t, normal: self.normal, material: self.material.clone() })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
