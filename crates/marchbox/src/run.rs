use anyhow::{Context, Result};
use renderer::{RendererConfig, SceneVariant, ShaderSelection};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, SceneArg};

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(args: Args) -> Result<()> {
    let config = renderer_config(&args);
    tracing::info!(
        scene = %config.scene,
        width = config.surface_size.0,
        height = config.surface_size.1,
        fps = ?config.target_fps,
        "starting marchbox"
    );
    renderer::run_windowed(config).context("renderer exited with an error")
}

fn renderer_config(args: &Args) -> RendererConfig {
    let scene = match args.scene {
        SceneArg::Raymarch => SceneVariant::Raymarch,
        SceneArg::Cube => SceneVariant::Cube,
    };
    let shader = match &args.shader {
        Some(path) => ShaderSelection::File(path.clone()),
        None => ShaderSelection::Embedded,
    };
    RendererConfig {
        surface_size: args.size,
        scene,
        shader,
        target_fps: args.fps,
        fixed_time: args.still,
        window_title: format!("marchbox ({scene})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cube_scene_maps_through_to_the_renderer_config() {
        let args = Args::parse_from(["marchbox", "--scene", "cube", "--fps", "30"]);
        let config = renderer_config(&args);
        assert_eq!(config.scene, SceneVariant::Cube);
        assert_eq!(config.target_fps, Some(30.0));
        assert!(matches!(config.shader, ShaderSelection::Embedded));
    }

    #[test]
    fn shader_override_selects_the_file_path() {
        let args = Args::parse_from(["marchbox", "--shader", "/tmp/custom.wgsl"]);
        let config = renderer_config(&args);
        match config.shader {
            ShaderSelection::File(path) => {
                assert_eq!(path, std::path::PathBuf::from("/tmp/custom.wgsl"));
            }
            other => panic!("expected file selection, got {other:?}"),
        }
    }

    #[test]
    fn still_timestamp_becomes_fixed_time() {
        let args = Args::parse_from(["marchbox", "--still", "1.5"]);
        let config = renderer_config(&args);
        assert_eq!(config.fixed_time, Some(1.5));
    }
}
