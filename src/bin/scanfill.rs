// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use scanfill::core::error::Result;
use scanfill::core::{Color, Scene, Shading};

/// Scanline triangle rasterizer
#[derive(Parser)]
#[command(name = "scanfill")]
#[command(about = "Render a triangle scene with flat or Gouraud shading", long_about = None)]
struct Args {
    /// Scene file (.toml or .json)
    scene: PathBuf,

    /// Output image; the format follows the extension (.png, .ppm, .bmp)
    #[arg(short = 'o', long, default_value = "out.png")]
    output: PathBuf,

    /// Shading mode, overriding the scene's
    #[arg(short = 's', long, value_enum)]
    shading: Option<Shading>,

    /// Background color as r,g,b in [0, 1], overriding the scene's
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,
}

/// Parse "r,g,b" with each component in [0, 1]
fn parse_color(s: &str) -> std::result::Result<Color, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color '{}': {}", s, e))?;

    let [r, g, b] = components[..] else {
        return Err(format!("invalid color '{}': expected r,g,b", s));
    };

    let color = Color::new(r, g, b);
    if !color.is_normalized() {
        return Err(format!("invalid color '{}': components must lie in [0, 1]", s));
    }
    Ok(color)
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG and friends)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("scanfill v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut scene = Scene::load(&args.scene).inspect_err(|e| error!("Failed to load scene: {}", e))?;

    if let Some(shading) = args.shading {
        info!("Shading override: {:?}", shading);
        scene.shading = shading;
    }
    if let Some(background) = args.background {
        scene.background = background;
    }

    let canvas = scene
        .render()
        .inspect_err(|e| error!("Failed to render scene: {}", e))?;

    canvas
        .save(&args.output)
        .inspect_err(|e| error!("Failed to write image: {}", e))?;

    info!("Wrote {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("1,0.5,0"), Ok(Color::new(1.0, 0.5, 0.0)));
        assert_eq!(parse_color(" 0 , 0 , 1 "), Ok(Color::BLUE));
        assert!(parse_color("1,0").is_err());
        assert!(parse_color("1,0,0,0").is_err());
        assert!(parse_color("red").is_err());
        assert!(parse_color("2,0,0").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["scanfill", "scene.toml", "-s", "flat", "--background", "0,0,0"])
            .unwrap();
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.shading, Some(Shading::Flat));
        assert_eq!(args.background, Some(Color::BLACK));
    }
}
