//! Shader sourcing and compilation.
//!
//! The two built-in WGSL modules are embedded in the binary at build time
//! and looked up by name. Callers may instead point at a file on disk:
//! `.spv` files are treated as precompiled SPIR-V blobs, anything else as
//! WGSL source text.

use std::borrow::Cow;
use std::path::Path;

use crate::types::{SceneVariant, SetupError, ShaderSelection};

/// Name of the embedded raymarch module.
pub const RAYMARCH_SHADER: &str = "raymarch";
/// Name of the embedded cube module.
pub const CUBE_SHADER: &str = "cube";

/// Shader modules bundled into the executable image.
const EMBEDDED_SHADERS: &[(&str, &str)] = &[
    (RAYMARCH_SHADER, include_str!("shaders/raymarch.wgsl")),
    (CUBE_SHADER, include_str!("shaders/cube.wgsl")),
];

/// Looks up an embedded shader by name.
pub fn load_embedded(name: &str) -> Result<&'static str, SetupError> {
    EMBEDDED_SHADERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| SetupError::ResourceNotFound(name.to_string()))
}

/// A shader program ready to hand to the device: source text or binary blob.
#[derive(Debug, Clone)]
pub enum ShaderBlob {
    Wgsl { name: String, source: Cow<'static, str> },
    SpirV { name: String, bytes: Vec<u8> },
}

impl ShaderBlob {
    /// Resolves the configured shader selection for a scene variant.
    pub fn resolve(scene: SceneVariant, selection: &ShaderSelection) -> Result<Self, SetupError> {
        match selection {
            ShaderSelection::Embedded => {
                let name = match scene {
                    SceneVariant::Raymarch => RAYMARCH_SHADER,
                    SceneVariant::Cube => CUBE_SHADER,
                };
                Ok(ShaderBlob::Wgsl {
                    name: name.to_string(),
                    source: Cow::Borrowed(load_embedded(name)?),
                })
            }
            ShaderSelection::File(path) => Self::from_path(path),
        }
    }

    /// Loads a shader module from disk.
    pub fn from_path(path: &Path) -> Result<Self, SetupError> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let is_spirv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("spv"));
        if is_spirv {
            let bytes = std::fs::read(path).map_err(|source| SetupError::ShaderRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(ShaderBlob::SpirV { name, bytes })
        } else {
            let source = std::fs::read_to_string(path).map_err(|source| SetupError::ShaderRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(ShaderBlob::Wgsl {
                name,
                source: Cow::Owned(source),
            })
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ShaderBlob::Wgsl { name, .. } | ShaderBlob::SpirV { name, .. } => name,
        }
    }
}

/// Compiles a shader blob into a module.
///
/// `create_shader_module` reports bad input through the device error queue
/// rather than a return value, so the call runs inside a validation error
/// scope and a captured error becomes a fatal [`SetupError::ShaderCompile`]
/// naming the module.
pub fn compile_shader(device: &wgpu::Device, blob: &ShaderBlob) -> Result<wgpu::ShaderModule, SetupError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = match blob {
        ShaderBlob::Wgsl { name, source } => {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(name),
                source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source.as_ref())),
            })
        }
        ShaderBlob::SpirV { name, bytes } => {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(name),
                source: wgpu::util::make_spirv(bytes),
            })
        }
    };

    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(SetupError::ShaderCompile {
            name: blob.name().to_string(),
            message: error.to_string(),
        });
    }

    Ok(module)
}
