//! Model-View-Projection composition for the rasterized cube variant.

use glam::{Mat4, Vec3};

/// Rotation axis for the spinning cube, normalized before use.
pub const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);

/// Angular rate of the cube spin in radians per second.
pub const SPIN_RATE: f32 = 0.5;

/// Camera pull-back along Z.
pub const CAMERA_DISTANCE: f32 = 3.0;

/// Vertical field of view in radians (60 degrees).
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_3;

pub const Z_NEAR: f32 = 0.01;
pub const Z_FAR: f32 = 100.0;

/// Combined `projection * view * model` transform for the cube.
///
/// The rotation angle is derived from absolute elapsed time rather than
/// accumulated per frame, so dropped or duplicated frames cannot drift the
/// animation. Recomputed fully every frame; both the angle and the aspect
/// ratio vary continuously.
pub fn model_view_projection(elapsed_seconds: f32, width: u32, height: u32) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    let model = Mat4::from_axis_angle(SPIN_AXIS.normalize(), elapsed_seconds * SPIN_RATE);
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
    let projection = Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR);
    projection * view * model
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn transform_at_time_zero_matches_golden_clip_coordinates() {
        // Angle 0, 4:3 aspect, 60 degree FOV: vertex (0.5, 0.5, 0.5) must
        // land on these clip-space values (regression guard for the matrix
        // convention).
        let mvp = model_view_projection(0.0, 800, 600);
        let clip = mvp * Vec4::new(0.5, 0.5, 0.5, 1.0);
        assert!((clip.x - 0.649_519).abs() < 1e-4, "clip.x = {}", clip.x);
        assert!((clip.y - 0.866_025).abs() < 1e-4, "clip.y = {}", clip.y);
        assert!((clip.z - 2.490_249).abs() < 1e-4, "clip.z = {}", clip.z);
        assert!((clip.w - 2.5).abs() < 1e-4, "clip.w = {}", clip.w);
    }

    #[test]
    fn rotation_angle_scales_with_elapsed_time() {
        // The model rotation is the only time-dependent term; at t and 2t the
        // transforms of an off-axis point must differ.
        let a = model_view_projection(1.0, 800, 600) * Vec4::new(0.5, 0.0, 0.0, 1.0);
        let b = model_view_projection(2.0, 800, 600) * Vec4::new(0.5, 0.0, 0.0, 1.0);
        assert!((a - b).length() > 1e-3);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let mvp = model_view_projection(3.7, 1024, 768);
        let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        assert!((clip.w - CAMERA_DISTANCE).abs() < 1e-5);
    }

    #[test]
    fn aspect_ratio_tracks_surface_size() {
        let wide = model_view_projection(0.0, 1600, 600) * Vec4::new(0.5, 0.5, 0.5, 1.0);
        let narrow = model_view_projection(0.0, 800, 600) * Vec4::new(0.5, 0.5, 0.5, 1.0);
        assert!(wide.x < narrow.x);
        assert!((wide.y - narrow.y).abs() < 1e-6);
    }
}
