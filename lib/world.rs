use crate::light::Light;
use crate::ray::Ray;
use crate::scene::{Scene, ShadingContext};
use crate::stats::RayStats;
use crate::surface::{Surface, SurfaceIntersection};
use crate::util::TMIN;
use crate::Color;
use glam::Vec3;

pub struct World {
    pub surfaces: Vec<Box<dyn Surface>>,
    pub lights: Vec<Light>,
    pub max_depth: u32,
    /// Returned for rays that escape the scene.
    pub background: Color,
    pub stats: RayStats,
}

impl World {
    pub fn new() -> World {
        World { surfaces: Vec::new(), lights: Vec::new(), max_depth: 5, background: Color::ZERO, stats: RayStats::new() }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> World {
        self.max_depth = max_depth;
        self
    }

    pub fn with_background(mut self, background: Color) -> World {
        self.background = background;
        self
    }

    pub fn add_surface(&mut self, surface: impl Surface + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn raycast(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<SurfaceIntersection> {
        let mut result = None;
        let mut t_nearest = t_max;

        for obj in &self.surfaces {
            if let Some(intersection) = obj.raycast(r, t_min, t_nearest) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}

impl Scene for World {
    fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn stats(&self) -> &RayStats {
        &self.stats
    }

    fn trace(&self, origin: Vec3, direction: Vec3, depth: u32) -> Color {
        let ray = Ray::new(origin, direction.normalize());

        return match self.raycast(&ray, TMIN, f32::INFINITY) {
            Some(hit) => {
                let ctx = ShadingContext { ray_dir: ray.direction, point: hit.p, normal: hit.normal, depth, scene: self };
                hit.material.shade(&ctx)
            }
            None => self.background,
        };
    }
}
