//! CPU mirror of the raymarch shader math.
//!
//! The fragment stage in `shaders/raymarch.wgsl` implements exactly this
//! module, constant for constant. Keeping the reference implementation on the
//! CPU lets us unit-test the scene function, the normal estimator, and the
//! sphere-tracing loop without touching a GPU.

use glam::{Vec2, Vec3};

/// Half-extents of the animated box.
pub const BOX_HALF_EXTENTS: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Fixed pinhole camera origin in scene space.
pub const RAY_ORIGIN: Vec3 = Vec3::new(0.0, 0.0, -2.0);

/// Focal length of the pinhole camera; larger values narrow the field of view.
pub const FOCAL_LENGTH: f32 = 1.5;

/// Directional light, normalized before use.
pub const LIGHT_DIR: Vec3 = Vec3::new(0.6, 0.7, -0.5);

/// Background color returned for rays that never reach a surface.
pub const BACKGROUND: Vec3 = Vec3::new(0.1, 0.1, 0.15);

/// Sphere-tracing iteration bound.
pub const MAX_STEPS: u32 = 64;

/// Distance below which a sample counts as a surface hit.
pub const HIT_EPSILON: f32 = 0.001;

/// Travel distance beyond which a ray is considered to have missed the scene.
pub const MAX_DISTANCE: f32 = 10.0;

/// Step size for the central-difference normal estimate.
pub const NORMAL_EPSILON: f32 = 0.001;

/// A ray with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point along the ray at distance `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Terminal state of the sphere-tracing loop.
///
/// `Exhausted` is deliberately distinct from `Miss`: falling out of the loop
/// after [`MAX_STEPS`] without either terminal condition is a safety net, not
/// a designed outcome. Shading maps it to the background color, but callers
/// and tests can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    /// The ray reached a surface; `point` is `origin + direction * traveled`.
    Hit { point: Vec3, traveled: f32 },
    /// The ray travelled past [`MAX_DISTANCE`] without touching anything.
    Miss { traveled: f32 },
    /// The iteration bound ran out before a hit or a miss was decided.
    Exhausted { traveled: f32 },
}

fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(p.x, c * p.y - s * p.z, s * p.y + c * p.z)
}

fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(c * p.x + s * p.z, p.y, -s * p.x + c * p.z)
}

/// Exact signed distance to an axis-aligned box with half-extents `b`.
fn sd_box(p: Vec3, b: Vec3) -> f32 {
    let q = p.abs() - b;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Signed distance from `p` to the scene at time `t`.
///
/// The box spins about X at 0.7 rad/s and Y at 0.5 rad/s; the rotation is
/// applied to the sample point, so the field stays 1-Lipschitz and marching
/// by the returned value never overshoots.
pub fn scene_distance(p: Vec3, t: f32) -> f32 {
    let q = rotate_y(rotate_x(p, t * 0.7), t * 0.5);
    sd_box(q, BOX_HALF_EXTENTS)
}

/// Unit surface normal at `p`, estimated by symmetric central differences.
///
/// Six extra scene evaluations. Only meaningful at or near a reported hit;
/// far from any surface the gradient can degenerate and normalization with
/// it, so callers must not invoke this for missed rays.
pub fn scene_normal(p: Vec3, t: f32) -> Vec3 {
    let e = NORMAL_EPSILON;
    let dx = Vec3::new(e, 0.0, 0.0);
    let dy = Vec3::new(0.0, e, 0.0);
    let dz = Vec3::new(0.0, 0.0, e);
    Vec3::new(
        scene_distance(p + dx, t) - scene_distance(p - dx, t),
        scene_distance(p + dy, t) - scene_distance(p - dy, t),
        scene_distance(p + dz, t) - scene_distance(p - dz, t),
    )
    .normalize()
}

/// Builds the primary ray for a render-target pixel.
///
/// Pixel coordinates are remapped to a symmetric range by dividing by
/// `min(w, h)` rather than component-wise, which keeps pixels square on
/// non-square viewports.
pub fn primary_ray(pixel: Vec2, resolution: Vec2) -> Ray {
    let p = (2.0 * pixel - resolution) / resolution.x.min(resolution.y);
    Ray::new(RAY_ORIGIN, Vec3::new(p.x, p.y, FOCAL_LENGTH))
}

/// Sphere-traces `ray` through the scene at time `t`.
pub fn march(ray: Ray, t: f32) -> MarchOutcome {
    let mut traveled = 0.0_f32;
    for _ in 0..MAX_STEPS {
        let point = ray.at(traveled);
        let d = scene_distance(point, t);
        if d < HIT_EPSILON {
            return MarchOutcome::Hit { point, traveled };
        }
        if traveled > MAX_DISTANCE {
            return MarchOutcome::Miss { traveled };
        }
        traveled += d;
    }
    MarchOutcome::Exhausted { traveled }
}

/// Shades a march outcome: normal-visualization color scaled by a diffuse
/// term on hit, background otherwise.
pub fn shade(outcome: MarchOutcome, t: f32) -> Vec3 {
    match outcome {
        MarchOutcome::Hit { point, .. } => {
            let normal = scene_normal(point, t);
            let diffuse = normal.dot(LIGHT_DIR.normalize()).max(0.0);
            (normal * 0.5 + Vec3::splat(0.5)) * diffuse
        }
        MarchOutcome::Miss { .. } | MarchOutcome::Exhausted { .. } => BACKGROUND,
    }
}

/// Full per-pixel evaluation: ray generation, march, shade.
pub fn shade_pixel(pixel: Vec2, resolution: Vec2, t: f32) -> Vec3 {
    let ray = primary_ray(pixel, resolution);
    shade(march(ray, t), t)
}
