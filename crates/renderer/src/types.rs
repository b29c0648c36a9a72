use std::path::PathBuf;

use thiserror::Error;

/// Which of the two demo scenes the renderer should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneVariant {
    /// Full-screen triangle; the fragment stage sphere-traces the box SDF.
    #[default]
    Raymarch,
    /// Indexed rasterized cube with per-vertex colors and an MVP transform.
    Cube,
}

impl std::fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneVariant::Raymarch => f.write_str("raymarch"),
            SceneVariant::Cube => f.write_str("cube"),
        }
    }
}

/// Where the shader program comes from.
#[derive(Debug, Clone, Default)]
pub enum ShaderSelection {
    /// Use the WGSL module embedded in the binary for the active scene.
    #[default]
    Embedded,
    /// Load a module from disk; `.spv` files are treated as SPIR-V blobs,
    /// anything else as WGSL source text.
    File(PathBuf),
}

/// Immutable configuration passed to the renderer at start-up.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Scene variant to render.
    pub scene: SceneVariant,
    /// Shader program source for the active scene.
    pub shader: ShaderSelection,
    /// Optional FPS cap; `None` renders every refresh.
    pub target_fps: Option<f32>,
    /// Optional fixed timestamp; freezes the animation for still frames.
    pub fixed_time: Option<f32>,
    /// Window title.
    pub window_title: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            surface_size: (800, 600),
            scene: SceneVariant::default(),
            shader: ShaderSelection::default(),
            target_fps: None,
            fixed_time: None,
            window_title: "marchbox".to_string(),
        }
    }
}

/// Fatal bootstrap failures.
///
/// Each variant names the stage that failed; there is no fallback rendering
/// path, so the host reports the error and terminates. Per-frame surface
/// trouble is *not* represented here; that is recoverable and handled in
/// the run loop.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to acquire window or display handle: {0}")]
    WindowHandle(String),
    #[error("failed to create rendering surface")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    AdapterUnavailable,
    #[error("failed to create GPU device")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),
    #[error("surface is incompatible with the selected adapter")]
    SurfaceUnsupported,
    #[error("embedded shader `{0}` not found")]
    ResourceNotFound(String),
    #[error("failed to read shader at {path}")]
    ShaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader module `{name}` failed to compile: {message}")]
    ShaderCompile { name: String, message: String },
    #[error("render pipeline `{name}` failed validation: {message}")]
    PipelineCreation { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_errors_name_their_stage() {
        let err = SetupError::ResourceNotFound("raymarch".into());
        assert!(err.to_string().contains("raymarch"));

        let err = SetupError::ShaderCompile {
            name: "cube".into(),
            message: "unexpected token".into(),
        };
        let text = err.to_string();
        assert!(text.contains("cube") && text.contains("unexpected token"));
    }

    #[test]
    fn default_config_is_windowed_raymarch() {
        let config = RendererConfig::default();
        assert_eq!(config.scene, SceneVariant::Raymarch);
        assert_eq!(config.surface_size, (800, 600));
        assert!(config.target_fps.is_none());
    }
}
