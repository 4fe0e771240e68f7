use glam::Vec3;
use rand::Rng;
use rand_distr::{Distribution, UnitSphere};

use std::sync::Arc;

use whitted_tracer::camera::Camera;
use whitted_tracer::config::RenderConfig;
use whitted_tracer::light::Light;
use whitted_tracer::material::Material;
use whitted_tracer::plane::Plane;
use whitted_tracer::render::render;
use whitted_tracer::sphere::Sphere;
use whitted_tracer::world::World;
use whitted_tracer::Color;

const MAX_DEPTH: u32 = 5;

fn rand_on_unit_sphere() -> Vec3 {
    return Vec3::from(UnitSphere.sample(&mut rand::thread_rng()));
}

fn create_world() -> World {
    let mut rng = rand::thread_rng();
    let mut world = World::new().with_max_depth(MAX_DEPTH).with_background(Color::new(0.05, 0.07, 0.1));

    world.add_light(Light::white(Vec3::new(10.0, 15.0, 10.0), Color::splat(0.1)));
    world.add_light(Light::new(
        Vec3::new(-8.0, 10.0, 4.0),
        Color::splat(0.05),
        Color::splat(0.5),
        Color::splat(0.5),
    ));

    world.add_surface({
        let mat = Arc::new(
            Material::diffuse(Color::splat(0.5)).with_ambient(Color::splat(0.5)).with_reflectivity(Color::splat(0.1)),
        );
        Plane::new(Vec3::ZERO, Vec3::Y, mat)
    });

    for a in -6..6 {
        for b in -6..6 {
            let choose: f32 = rng.gen();
            let albedo = (rand_on_unit_sphere() * rand_on_unit_sphere()).abs();

            let mat = if choose < 0.8 {
                Material::diffuse(albedo).with_ambient(albedo).with_specular(Color::splat(0.3), 16)
            } else {
                Material::diffuse(albedo * 0.2).with_specular(Color::ONE, 64).with_reflectivity(Color::splat(0.6))
            };

            let center = Vec3::new((a as f32) + rng.gen_range(0.0..0.9), 0.2, (b as f32) + rng.gen_range(0.0..0.9));

            world.add_surface(Sphere::new(center, 0.2, Arc::new(mat)));
        }
    }

    world.add_surface({
        let mat = Material::default()
            .with_specular(Color::ONE, 128)
            .with_diffuse_transmission(Color::splat(0.1))
            .with_specular_transmission(Color::splat(0.6))
            .with_reflectivity(Color::splat(0.1))
            .with_transmission(Color::splat(0.85), 1.5);
        Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Arc::new(mat))
    });

    world.add_surface({
        let mat = Material::diffuse(Color::new(0.4, 0.2, 0.1)).with_ambient(Color::new(0.4, 0.2, 0.1));
        Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, Arc::new(mat))
    });

    world.add_surface({
        let mat = Material::diffuse(Color::new(0.07, 0.06, 0.05))
            .with_specular(Color::splat(0.8), 256)
            .with_reflectivity(Color::new(0.7, 0.6, 0.5));
        Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, Arc::new(mat))
    });

    return world;
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = RenderConfig::new();
    if let Some(path) = std::env::args().nth(1) {
        config = config.output(path);
    }
    config.validate()?;

    let world = create_world();

    let camera = Camera::new(
        Vec3::new(13.0, 2.0, 3.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::Y,
        config.vertical_fov,
        config.aspect_ratio(),
    );

    let image = render(&world, &camera, &config);
    image.save(&config.output)?;

    log::info!("Wrote {}", config.output.display());

    Ok(())
}
