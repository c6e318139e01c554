//! Camera for ray generation and scene rendering.
//!
//! A pinhole camera with optional defocus blur. Rendering walks pixels in
//! row-major order, averages jittered samples per pixel and evaluates each
//! sample's color by following scattered rays up to a depth budget.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;

use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::random;
use crate::ray::Ray;
use crate::vec3::{self, Color, Point3, Vec3};

/// Camera configuration and derived viewport geometry.
///
/// Public fields are set before the first render call and read-only during
/// it; the private fields are derived once by `initialize`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Number of random samples for each pixel (anti-aliasing)
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces per sample
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Point the camera is looking from
    pub lookfrom: Point3,
    /// Point the camera is looking at
    pub lookat: Point3,
    /// Camera-relative "up" direction
    pub vup: Vec3,
    /// Variation angle of rays through each pixel; 0 disables defocus blur
    pub defocus_angle: f64,
    /// Distance from lookfrom to the plane of perfect focus
    pub focus_dist: f64,

    /// Rendered image height, derived from width and aspect ratio
    image_height: u32,
    /// Color scale factor for a sum of pixel samples
    pixel_samples_scale: f64,
    /// Camera position in world space
    center: Point3,
    /// World position of pixel (0, 0)
    pixel00_loc: Point3,
    /// Offset from pixel to pixel horizontally
    pixel_delta_u: Vec3,
    /// Offset from pixel to pixel vertically
    pixel_delta_v: Vec3,
    /// Camera frame basis vector pointing right
    u: Vec3,
    /// Camera frame basis vector pointing up
    v: Vec3,
    /// Camera frame basis vector opposite the view direction
    w: Vec3,
    /// Defocus disk horizontal radius vector
    defocus_disk_u: Vec3,
    /// Defocus disk vertical radius vector
    defocus_disk_v: Vec3,
    /// Whether the derived fields above are valid
    initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with default settings: 100 pixels square, 50
    /// samples, 50 bounces, 90 degree FOV, no defocus blur.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 50,
            max_depth: 50,
            vfov: 90.0,
            lookfrom: Point3::ZERO,
            lookat: Point3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
            image_height: 0,
            pixel_samples_scale: 0.0,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::ZERO,
            v: Vec3::ZERO,
            w: Vec3::ZERO,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            initialized: false,
        }
    }

    /// Image height derived from the configured width and aspect ratio.
    pub fn image_height(&mut self) -> u32 {
        self.initialize();
        self.image_height
    }

    /// Render the scene, single-threaded, in row-major scan order.
    ///
    /// Returns a linear (not gamma-corrected) f32 RGB buffer; the output
    /// module handles tone mapping and quantization.
    pub fn render(
        &mut self,
        world: &dyn Hittable,
        rng: &mut impl Rng,
    ) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        self.initialize();

        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} at {} samples per pixel, depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let mut pixel_color = Color::ZERO;
                for _sample in 0..self.samples_per_pixel {
                    let r = self.get_ray(i, j, rng);
                    pixel_color += self.ray_color(&r, world, self.max_depth, rng);
                }
                pixel_color *= self.pixel_samples_scale;
                image.put_pixel(
                    i,
                    j,
                    Rgb([pixel_color.x as f32, pixel_color.y as f32, pixel_color.z as f32]),
                );
            }
            pb.inc(1);
        }

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Derive the viewport geometry from the configuration.
    ///
    /// Runs once; later calls are no-ops so renders reuse the same frame.
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);

        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f64;

        self.center = self.lookfrom;

        // Viewport dimensions from the vertical FOV at the focus distance
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Orthonormal camera frame: w opposes the view direction
        self.w = vec3::unit_vector(self.lookfrom - self.lookat);
        self.u = vec3::unit_vector(self.vup.cross(self.w));
        self.v = self.w.cross(self.u);

        // Vectors spanning the viewport edges, v pointing down the image
        let viewport_u = viewport_width * self.u;
        let viewport_v = viewport_height * -self.v;

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        // Upper-left pixel center, half a pixel step in from the corner
        let viewport_upper_left =
            self.center - (self.focus_dist * self.w) - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Defocus disk spanning the lens aperture
        let defocus_radius = self.focus_dist * (self.defocus_angle.to_radians() / 2.0).tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        self.initialized = true;
    }

    /// Build a ray toward a jittered point inside pixel (i, j), starting
    /// from the defocus disk when blur is enabled.
    fn get_ray(&self, i: u32, j: u32, rng: &mut impl Rng) -> Ray {
        let offset = Self::sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + offset.x) * self.pixel_delta_u)
            + ((j as f64 + offset.y) * self.pixel_delta_v);

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };
        let ray_direction = pixel_sample - ray_origin;

        Ray::new(ray_origin, ray_direction)
    }

    /// Random offset in the [-0.5, 0.5) unit square (box filter).
    fn sample_square(rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            random::random_f64(rng) - 0.5,
            random::random_f64(rng) - 0.5,
            0.0,
        )
    }

    /// Random point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut impl Rng) -> Point3 {
        let p = random::random_in_unit_disk(rng);
        self.center + (p.x * self.defocus_disk_u) + (p.y * self.defocus_disk_v)
    }

    /// Evaluate the color carried by a ray, following scattered rays for
    /// up to `depth` bounces.
    ///
    /// Written as a loop with a throughput accumulator instead of actual
    /// recursion so a large depth budget cannot grow the call stack. Each
    /// bounce multiplies the throughput by the material's attenuation;
    /// a miss pays out the background, absorption or an exhausted budget
    /// pays out black.
    fn ray_color(&self, r: &Ray, world: &dyn Hittable, depth: u32, rng: &mut impl Rng) -> Color {
        let mut ray = *r;
        let mut throughput = Color::ONE;

        for _ in 0..depth {
            // The 0.001 lower bound suppresses self-intersection of
            // bounced rays with the surface they left (shadow acne)
            match world.hit(&ray, Interval::new(0.001, f64::INFINITY)) {
                Some(rec) => match rec.material.scatter(&ray, &rec, rng) {
                    Some((attenuation, scattered)) => {
                        throughput *= attenuation;
                        ray = scattered;
                    }
                    None => return Color::ZERO,
                },
                None => {
                    // Sky: vertical blend from white to light blue
                    let unit_direction = vec3::unit_vector(ray.direction);
                    let a = 0.5 * (unit_direction.y + 1.0);
                    let sky =
                        (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0);
                    return throughput * sky;
                }
            }
        }

        // Bounce budget exhausted: no more light is gathered
        Color::ZERO
    }
}
