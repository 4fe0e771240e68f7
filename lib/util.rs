use glam::Vec3;

/// Intersections closer than this to a ray origin are treated as self-hits.
pub const TMIN: f32 = 0.001;

/// Mirrors `v` about `normal`, where `v_dot_n` is `v.dot(normal)` and `v` points away from the surface.
pub fn reflect(v: Vec3, normal: Vec3, v_dot_n: f32) -> Vec3 {
    return (2.0 * v_dot_n * normal) - v;
}

/// Transmitted direction of `incident` through a surface by Snell's law.
///
/// `cos_i` is the cosine between the reversed incident direction and `normal`,
/// and `ratio` is the relative index of refraction (eta_i / eta_t). Returns `None`
/// on total internal reflection, i.e. when the radical is not strictly positive.
pub fn refract(incident: Vec3, normal: Vec3, cos_i: f32, ratio: f32) -> Option<Vec3> {
    let radical = 1.0 + (ratio * ratio) * ((cos_i * cos_i) - 1.0);
    if radical <= 0.0 {
        return None;
    }
    return Some((ratio * incident + (ratio * cos_i - radical.sqrt()) * normal).normalize());
}

/// Phong lobe; negative cosines are clamped before exponentiation.
pub fn phong(cos: f32, n: u32) -> f32 {
    return cos.max(0.0).powi(i32::try_from(n).unwrap_or(i32::MAX));
}
