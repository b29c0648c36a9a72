//! GPU-facing internals: bootstrap context, scene pipelines, static
//! geometry, per-frame uniforms, and the frame driver.

mod context;
mod geometry;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
