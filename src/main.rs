//! Command line entry point: builds the scene, renders it and writes the
//! image in the format implied by the output file extension.

use clap::Parser;
use log::info;
use rand::Rng;

use lumenpath::camera::Camera;
use lumenpath::cli::Args;
use lumenpath::hittable::HittableList;
use lumenpath::logger::init_logger;
use lumenpath::material::MaterialType;
use lumenpath::output::{save_image_as_exr, save_image_as_png, save_image_as_ppm};
use lumenpath::random;
use lumenpath::sphere::Sphere;
use lumenpath::vec3::{Color, Point3, Vec3};

/// Create the cover scene: a gray ground sphere, a grid of small random
/// spheres and three large feature spheres.
fn create_scene(rng: &mut impl Rng) -> HittableList {
    let mut world = HittableList::new();

    // Ground sphere
    let ground_material = MaterialType::Lambertian {
        albedo: Color::new(0.5, 0.5, 0.5),
    };
    world.add(Box::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground_material,
    )));

    // 22x22 grid of small spheres with jittered centers
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random::random_f64(rng),
                0.2,
                b as f64 + 0.9 * random::random_f64(rng),
            );

            // Keep clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() > 0.9 {
                let sphere_material = if choose_mat < 0.8 {
                    let albedo = random::random_color(rng) * random::random_color(rng);
                    MaterialType::Lambertian { albedo }
                } else if choose_mat < 0.95 {
                    let albedo = random::random_color_range(rng, 0.5, 1.0);
                    let fuzz = random::random_f64_range(rng, 0.0, 0.5);
                    MaterialType::Metal { albedo, fuzz }
                } else {
                    MaterialType::Dielectric {
                        refraction_index: 1.5,
                    }
                };

                world.add(Box::new(Sphere::new(center, 0.2, sphere_material)));
            }
        }
    }

    // Three large feature spheres: glass, diffuse, polished metal
    let material1 = MaterialType::Dielectric {
        refraction_index: 1.5,
    };
    world.add(Box::new(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, material1)));

    let material2 = MaterialType::Lambertian {
        albedo: Color::new(0.4, 0.2, 0.1),
    };
    world.add(Box::new(Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0, material2)));

    let material3 = MaterialType::Metal {
        albedo: Color::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    };
    world.add(Box::new(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, material3)));

    world
}

/// Create the camera for the cover shot.
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.aspect_ratio = args.aspect_ratio;
    camera.image_width = args.width;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.max_depth = args.max_depth;
    camera.vfov = 20.0;
    camera.lookfrom = Point3::new(13.0, 2.0, 3.0);
    camera.lookat = Point3::new(0.0, 0.0, 0.0);
    camera.vup = Vec3::new(0.0, 1.0, 0.0);
    camera.defocus_angle = 0.6;
    camera.focus_dist = 10.0;
    camera
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!(
        "lumenpath - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );
    info!(
        "Image width: {}, aspect ratio: {:.4}, samples per pixel: {}",
        args.width, args.aspect_ratio, args.samples_per_pixel
    );

    let mut rng = random::seeded_rng(args.seed);
    if let Some(seed) = args.seed {
        info!("Using fixed RNG seed {}", seed);
    }

    let world = create_scene(&mut rng);
    let mut camera = create_camera(&args);

    let image = camera.render(&world, &mut rng);

    // Pick the output format from the file extension
    if args.output.ends_with(".ppm") {
        save_image_as_ppm(&image, &args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .ppm, .png and .exr formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
