//! Renderer crate for marchbox.
//!
//! Glues a winit window, a `wgpu` pipeline, and a pair of embedded WGSL
//! programs together. The overall flow is:
//!
//! ```text
//!   CLI / marchbox
//!          │ RendererConfig
//!          ▼
//!   run_windowed ──▶ GpuState::new (bootstrap, once)
//!          │
//!          └─▶ winit event loop ──▶ GpuState::render(TimeSample)
//!                                         │
//!                                         └─▶ uniforms ─▶ draw ─▶ present
//! ```
//!
//! Two scene variants exist: a full-screen-triangle raymarcher whose
//! fragment stage sphere-traces a spinning box SDF, and a rasterized
//! indexed cube driven by a per-frame MVP matrix. The raymarch math is
//! mirrored on the CPU in [`march`] so the scene function, normal
//! estimator, ray generator, and tracing loop are all unit-testable.

pub mod camera;
pub mod march;
pub mod runtime;

mod compile;
mod gpu;
mod types;
mod window;

pub use compile::{load_embedded, ShaderBlob, CUBE_SHADER, RAYMARCH_SHADER};
pub use runtime::{
    time_source_for, BoxedTimeSource, FixedTimeSource, FrameScheduler, SystemTimeSource,
    TimeSample, TimeSource,
};
pub use types::{RendererConfig, SceneVariant, SetupError, ShaderSelection};
pub use window::run_windowed;
