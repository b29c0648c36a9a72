use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line surface for the marchbox demo renderer.
#[derive(Debug, Parser)]
#[command(name = "marchbox", version, about = "Minimal wgpu SDF/cube demo renderer")]
pub struct Args {
    /// Scene variant to render.
    #[arg(long, value_enum, default_value_t = SceneArg::Raymarch)]
    pub scene: SceneArg,

    /// Window size in physical pixels, e.g. 800x600.
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub size: (u32, u32),

    /// Optional FPS cap; omit to render at the display refresh rate.
    #[arg(long)]
    pub fps: Option<f32>,

    /// Replace the embedded shader with a module from disk (.wgsl source or
    /// a precompiled .spv blob).
    #[arg(long, value_name = "PATH")]
    pub shader: Option<PathBuf>,

    /// Freeze the animation at a fixed timestamp in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub still: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneArg {
    /// Sphere-traced spinning box SDF on a full-screen triangle.
    Raymarch,
    /// Rasterized spinning cube with per-vertex colors.
    Cube,
}

/// Parses `WIDTHxHEIGHT` into a physical pixel size.
fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width in `{value}`"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height in `{value}`"))?;
    if width == 0 || height == 0 {
        return Err(format!("size must be non-zero, got `{value}`"));
    }
    Ok((width, height))
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_raymarch_scene() {
        let args = Args::parse_from(["marchbox"]);
        assert_eq!(args.scene, SceneArg::Raymarch);
        assert_eq!(args.size, (800, 600));
        assert!(args.fps.is_none());
        assert!(args.shader.is_none());
        assert!(args.still.is_none());
    }

    #[test]
    fn scene_and_size_flags_are_honoured() {
        let args = Args::parse_from(["marchbox", "--scene", "cube", "--size", "1280x720"]);
        assert_eq!(args.scene, SceneArg::Cube);
        assert_eq!(args.size, (1280, 720));
    }

    #[test]
    fn size_parser_rejects_malformed_input() {
        assert!(parse_size("800").is_err());
        assert!(parse_size("800xabc").is_err());
        assert!(parse_size("0x600").is_err());
        assert_eq!(parse_size("1920X1080"), Ok((1920, 1080)));
    }

    #[test]
    fn still_flag_takes_a_timestamp() {
        let args = Args::parse_from(["marchbox", "--still", "2.5"]);
        assert_eq!(args.still, Some(2.5));
    }
}
