use crate::material::Material;
use crate::scene::{Scene, ShadingContext};
use crate::util::{phong, reflect, refract, TMIN};
use crate::Color;
use glam::Vec3;

impl Material {
    /// Radiance leaving the hit point towards the viewer.
    ///
    /// Sums ambient, shadowed diffuse/specular (and their transmitted
    /// counterparts for light arriving from behind a transparent surface) and
    /// emission, then spawns mirror and refracted rays through the scene until
    /// its maximum depth is reached.
    pub fn shade(&self, ctx: &ShadingContext) -> Color {
        let scene = ctx.scene;
        let mut color = Color::ZERO;

        let v = -ctx.ray_dir;
        let mut normal = ctx.normal;
        let mut v_dot_n = v.dot(normal);

        if v_dot_n < 0.0 {
            if !self.is_transparent() {
                return color;
            }
            normal = -normal;
            v_dot_n = -v_dot_n;
        }

        // Objects are treated as hollow, so rays always enter from vacuum.
        let ratio = self.is_transparent().then(|| 1.0 / self.ior);

        let lights = scene.lights();

        if self.ka != Color::ZERO && !lights.is_empty() {
            let ambient = lights.iter().fold(Color::ZERO, |sum, light| sum + light.ambient);
            color += self.ka * ambient;
        }

        let do_diffuse = self.kd != Color::ZERO;
        let do_specular = self.ks != Color::ZERO;

        if (do_diffuse || do_specular) && !lights.is_empty() {
            let mut diffuse = Color::ZERO;
            let mut specular = Color::ZERO;
            let mut diffuse_trans = Color::ZERO;
            let mut specular_trans = Color::ZERO;

            for light in lights {
                let l = (light.position - ctx.point).normalize();
                let dot_n = l.dot(normal);

                if dot_n > 0.0 {
                    let filter = shadow_filter(scene, ctx.point, l);
                    if filter == Color::ZERO {
                        continue;
                    }

                    if do_diffuse {
                        diffuse += filter * light.diffuse * dot_n;
                    }
                    if do_specular {
                        let r = reflect(l, normal, dot_n);
                        specular += filter * light.specular * phong(r.dot(v), self.n);
                    }
                } else if let Some(ratio) = ratio {
                    let filter = shadow_filter(scene, ctx.point, l);
                    if filter == Color::ZERO {
                        continue;
                    }

                    if self.kdt != Color::ZERO {
                        diffuse_trans += filter * light.diffuse * -dot_n;
                    }
                    if self.kst != Color::ZERO {
                        if let Some(t) = refract(-l, -normal, -dot_n, ratio) {
                            specular_trans += filter * light.specular * phong(t.dot(v), self.n);
                        }
                    }
                }
            }

            color += (self.kd * diffuse) + (self.ks * specular) + (self.kdt * diffuse_trans) + (self.kst * specular_trans);
        }

        color += self.ie;

        if ctx.depth >= scene.max_depth() {
            return color;
        }

        if self.kr != Color::ZERO {
            let rv = reflect(v, normal, v_dot_n);
            color += self.kr * scene.trace(ctx.point, rv, ctx.depth + 1);
            scene.stats().count_reflection_ray();
        }

        if let Some(ratio) = ratio {
            if let Some(tv) = refract(ctx.ray_dir, normal, v_dot_n, ratio) {
                color += self.kt * scene.trace(ctx.point, tv, ctx.depth + 1);
                scene.stats().count_refraction_ray();
            }
        }

        color
    }
}

/// Fraction of light that survives the trip from `point` along `to_light`.
///
/// Every surface hit beyond [`TMIN`] attenuates the light by its
/// transmissivity; the first opaque one blocks it entirely. Counts as one
/// shadow ray no matter how many surfaces were examined.
fn shadow_filter(scene: &dyn Scene, point: Vec3, to_light: Vec3) -> Color {
    let mut filter = Color::ONE;

    for surface in scene.surfaces() {
        let Some(t) = surface.nearest_int(point, to_light) else {
            continue;
        };
        if TMIN < t {
            let kt = surface.material().transmissivity();
            if kt == Color::ZERO {
                filter = Color::ZERO;
                break;
            }
            filter *= kt;
        }
    }

    scene.stats().count_shadow_ray();
    filter
}
