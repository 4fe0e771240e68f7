use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Secondary ray counters, shared by every shading call of a render.
#[derive(Debug, Default)]
pub struct RayStats {
    shadow: AtomicU64,
    reflection: AtomicU64,
    refraction: AtomicU64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RayCounts {
    pub shadow: u64,
    pub reflection: u64,
    pub refraction: u64,
}

impl RayStats {
    pub fn new() -> RayStats {
        RayStats::default()
    }

    pub fn count_shadow_ray(&self) {
        self.shadow.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_reflection_ray(&self) {
        self.reflection.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_refraction_ray(&self) {
        self.refraction.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RayCounts {
        RayCounts {
            shadow: self.shadow.load(Ordering::Relaxed),
            reflection: self.reflection.load(Ordering::Relaxed),
            refraction: self.refraction.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.shadow.store(0, Ordering::Relaxed);
        self.reflection.store(0, Ordering::Relaxed);
        self.refraction.store(0, Ordering::Relaxed);
    }
}

impl fmt::Display for RayCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shadow={} reflection={} refraction={}", self.shadow, self.reflection, self.refraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn counts_each_kind_separately() {
        let stats = RayStats::new();
        stats.count_shadow_ray();
        stats.count_shadow_ray();
        stats.count_reflection_ray();

        assert_eq!(stats.snapshot(), RayCounts { shadow: 2, reflection: 1, refraction: 0 });
    }

    #[test]
    fn no_updates_lost_across_threads() {
        let stats = RayStats::new();
        (0..10_000).into_par_iter().for_each(|_| stats.count_refraction_ray());

        assert_eq!(stats.snapshot().refraction, 10_000);
    }

    #[test]
    fn reset_clears_counts() {
        let stats = RayStats::new();
        stats.count_shadow_ray();
        stats.reset();

        assert_eq!(stats.snapshot(), RayCounts::default());
        assert_eq!(stats.snapshot().to_string(), "shadow=0 reflection=0 refraction=0");
    }
}
