use glam::Vec3;

use crate::ray::Ray;

/// Pinhole look-at camera.
pub struct Camera {
    pub origin: Vec3,
    llc: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    pub fn new(origin: Vec3, target: Vec3, up: Vec3, vertical_fov: f32, aspect_ratio: f32) -> Camera {
        let theta = vertical_fov.to_radians();

        let viewport_h = 2.0 * (theta * 0.5).tan();
        let viewport_w = viewport_h * aspect_ratio;

        let cw = (origin - target).normalize();
        let cu = up.cross(cw).normalize();
        let cv = cw.cross(cu);

        let h = viewport_w * cu;
        let v = viewport_h * cv;

        let llc = origin - (h * 0.5) - (v * 0.5) - cw;

        return Camera { origin, llc, horizontal: h, vertical: v };
    }

    /// Ray through the viewport point `(s, t)`, both in `[0, 1]` from the lower left corner.
    pub fn create_ray(&self, s: f32, t: f32) -> Ray {
        return Ray::new(self.origin, (self.llc + s * self.horizontal + t * self.vertical - self.origin).normalize());
    }
}
