//! End-to-end checks of the CPU scene evaluation, pixel to color.

use glam::{Vec2, Vec3};
use renderer::march::{
    self, MarchOutcome, BACKGROUND, HIT_EPSILON, MAX_DISTANCE, MAX_STEPS,
};

#[test]
fn center_pixel_hits_the_box_at_time_zero() {
    let resolution = Vec2::new(800.0, 600.0);
    let pixel = Vec2::new(400.0, 300.0);

    let ray = march::primary_ray(pixel, resolution);
    match march::march(ray, 0.0) {
        MarchOutcome::Hit { traveled, .. } => {
            // Camera sits at z=-2, the unrotated box face at z=-0.5.
            assert!((traveled - 1.5).abs() <= HIT_EPSILON);
        }
        other => panic!("expected center-pixel hit, got {other:?}"),
    }

    let color = march::shade_pixel(pixel, resolution, 0.0);
    assert!(
        color.distance(BACKGROUND) > 0.05,
        "center pixel shaded as background: {color:?}"
    );
}

#[test]
fn corner_pixel_misses_and_shades_background() {
    let resolution = Vec2::new(800.0, 600.0);
    let pixel = Vec2::new(0.0, 0.0);

    let ray = march::primary_ray(pixel, resolution);
    match march::march(ray, 0.0) {
        MarchOutcome::Miss { traveled } => assert!(traveled > MAX_DISTANCE),
        other => panic!("expected corner-pixel miss, got {other:?}"),
    }

    assert_eq!(march::shade_pixel(pixel, resolution, 0.0), BACKGROUND);
}

#[test]
fn every_outcome_terminates_within_the_step_bound() {
    // Sweep a small pixel grid across several timestamps; the march must
    // always land in one of the three terminal states with finite travel.
    let resolution = Vec2::new(320.0, 240.0);
    for time in [0.0, 0.5, 1.7, 9.3] {
        for px in (0..320).step_by(40) {
            for py in (0..240).step_by(40) {
                let ray = march::primary_ray(Vec2::new(px as f32, py as f32), resolution);
                let traveled = match march::march(ray, time) {
                    MarchOutcome::Hit { traveled, .. } => traveled,
                    MarchOutcome::Miss { traveled } => traveled,
                    MarchOutcome::Exhausted { traveled } => traveled,
                };
                assert!(traveled.is_finite());
                // A miss can overshoot by at most one step of the bounded
                // scene, never unboundedly.
                assert!(traveled < MAX_DISTANCE + (MAX_STEPS as f32));
            }
        }
    }
}

#[test]
fn hit_shading_scales_normal_visualization_by_diffuse_term() {
    // Straight-on hit against the front face: normal is -Z, so the
    // visualization base color is (0.5, 0.5, 0.0) before the diffuse term.
    let ray = march::primary_ray(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    let outcome = march::march(ray, 0.0);
    let color = march::shade(outcome, 0.0);

    let normal = Vec3::new(0.0, 0.0, -1.0);
    let diffuse = normal.dot(march::LIGHT_DIR.normalize()).max(0.0);
    let expected = Vec3::new(0.5, 0.5, 0.0) * diffuse;
    assert!(color.distance(expected) < 1e-2, "color was {color:?}");
}
