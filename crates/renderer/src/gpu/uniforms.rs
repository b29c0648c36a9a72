//! Per-frame uniform records.
//!
//! The byte layout of these structs must match the WGSL `Uniforms` structs
//! exactly; a mismatch renders silently wrong rather than failing, so the
//! layouts are pinned by `offset_of!` tests below.

use bytemuck::{Pod, Zeroable};

use crate::camera;
use crate::runtime::TimeSample;

/// Uniforms for the raymarch scene: elapsed seconds and the surface size.
///
/// WGSL gives `resolution: vec2<f32>` 8-byte alignment, leaving a 4-byte
/// hole after `time`; the explicit padding field mirrors that.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct RaymarchUniforms {
    pub time: f32,
    pub _pad: f32,
    pub resolution: [f32; 2],
}

impl RaymarchUniforms {
    pub fn new(sample: TimeSample, width: u32, height: u32) -> Self {
        Self {
            time: sample.seconds,
            _pad: 0.0,
            resolution: [width.max(1) as f32, height.max(1) as f32],
        }
    }
}

/// Uniforms for the cube scene: one column-major MVP matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct CubeUniforms {
    pub mvp: [[f32; 4]; 4],
}

impl CubeUniforms {
    pub fn new(sample: TimeSample, width: u32, height: u32) -> Self {
        Self {
            mvp: camera::model_view_projection(sample.seconds, width, height).to_cols_array_2d(),
        }
    }
}

/// Largest uniform record either pipeline binds; sizes the shared buffer.
pub(crate) const UNIFORM_BUFFER_SIZE: u64 = {
    let raymarch = std::mem::size_of::<RaymarchUniforms>();
    let cube = std::mem::size_of::<CubeUniforms>();
    if raymarch > cube { raymarch as u64 } else { cube as u64 }
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn raymarch_uniforms_match_wgsl_layout() {
        assert_eq!(size_of::<RaymarchUniforms>(), 16);
        assert_eq!(offset_of!(RaymarchUniforms, time), 0);
        assert_eq!(offset_of!(RaymarchUniforms, resolution), 8);
    }

    #[test]
    fn cube_uniforms_match_wgsl_layout() {
        assert_eq!(size_of::<CubeUniforms>(), 64);
        assert_eq!(offset_of!(CubeUniforms, mvp), 0);
    }

    #[test]
    fn uniform_buffer_fits_both_records() {
        assert_eq!(UNIFORM_BUFFER_SIZE, 64);
    }

    #[test]
    fn raymarch_uniforms_carry_sample_and_resolution() {
        let uniforms = RaymarchUniforms::new(TimeSample::new(2.5, 150), 800, 600);
        assert_eq!(uniforms.time, 2.5);
        assert_eq!(uniforms.resolution, [800.0, 600.0]);
    }

    #[test]
    fn zero_sized_surface_clamps_to_one_pixel() {
        let uniforms = RaymarchUniforms::new(TimeSample::new(0.0, 0), 0, 0);
        assert_eq!(uniforms.resolution, [1.0, 1.0]);
    }

    #[test]
    fn cube_uniforms_hold_the_mvp_of_the_sample_time() {
        let sample = TimeSample::new(1.25, 75);
        let uniforms = CubeUniforms::new(sample, 800, 600);
        let expected = camera::model_view_projection(1.25, 800, 600).to_cols_array_2d();
        assert_eq!(uniforms.mvp, expected);
    }
}
