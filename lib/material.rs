use crate::Color;

/// Reflectance and transmittance coefficients of a surface.
///
/// A material is transparent exactly when its transmissivity `kt` is not the
/// zero color. The index of refraction is only consulted for transparent
/// materials. No coefficient is validated; channels are conventionally in
/// `[0, 1]` and `ior` must be positive whenever `kt` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub(crate) ka: Color,
    pub(crate) kd: Color,
    pub(crate) kdt: Color,
    pub(crate) ks: Color,
    pub(crate) kst: Color,
    pub(crate) n: u32,
    pub(crate) ie: Color,
    pub(crate) kr: Color,
    pub(crate) kt: Color,
    pub(crate) ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ka: Color::ZERO,
            kd: Color::ZERO,
            kdt: Color::ZERO,
            ks: Color::ZERO,
            kst: Color::ZERO,
            n: 0,
            ie: Color::ZERO,
            kr: Color::ZERO,
            kt: Color::ZERO,
            ior: 0.0,
        }
    }
}

impl Material {
    /// Purely diffuse opaque material.
    pub fn diffuse(kd: Color) -> Material {
        Material { kd, ..Material::default() }
    }

    pub fn with_ambient(mut self, ka: Color) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_diffuse(mut self, kd: Color) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_diffuse_transmission(mut self, kdt: Color) -> Self {
        self.kdt = kdt;
        self
    }

    pub fn with_specular(mut self, ks: Color, shininess: u32) -> Self {
        self.ks = ks;
        self.n = shininess;
        self
    }

    pub fn with_specular_transmission(mut self, kst: Color) -> Self {
        self.kst = kst;
        self
    }

    pub fn with_emission(mut self, ie: Color) -> Self {
        self.ie = ie;
        self
    }

    pub fn with_reflectivity(mut self, kr: Color) -> Self {
        self.kr = kr;
        self
    }

    /// Makes the material transparent with transmissivity `kt` and index of refraction `ior`.
    pub fn with_transmission(mut self, kt: Color, ior: f32) -> Self {
        self.kt = kt;
        self.ior = ior;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.kt != Color::ZERO
    }

    pub fn transmissivity(&self) -> Color {
        self.kt
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black_and_opaque() {
        let m = Material::default();
        assert!(!m.is_transparent());
        assert_eq!(m.ie, Color::ZERO);
        assert_eq!(m.n, 0);
    }

    #[test]
    fn diffuse_sets_only_kd() {
        let m = Material::diffuse(Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.kd, Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.ka, Color::ZERO);
        assert_eq!(m.ks, Color::ZERO);
        assert!(!m.is_transparent());
    }

    #[test]
    fn any_non_zero_channel_of_kt_makes_transparent() {
        let m = Material::default().with_transmission(Color::new(0.0, 0.0, 0.1), 1.5);
        assert!(m.is_transparent());
        assert_eq!(m.ior, 1.5);
        assert_eq!(m.transmissivity(), Color::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn builder_sets_every_coefficient() {
        let m = Material::default()
            .with_ambient(Color::splat(0.1))
            .with_diffuse(Color::splat(0.2))
            .with_diffuse_transmission(Color::splat(0.3))
            .with_specular(Color::splat(0.4), 32)
            .with_specular_transmission(Color::splat(0.5))
            .with_emission(Color::splat(0.6))
            .with_reflectivity(Color::splat(0.7));

        assert_eq!(m.ka, Color::splat(0.1));
        assert_eq!(m.kd, Color::splat(0.2));
        assert_eq!(m.kdt, Color::splat(0.3));
        assert_eq!(m.ks, Color::splat(0.4));
        assert_eq!(m.n, 32);
        assert_eq!(m.kst, Color::splat(0.5));
        assert_eq!(m.ie, Color::splat(0.6));
        assert_eq!(m.kr, Color::splat(0.7));
        assert!(!m.is_transparent());
    }
}
