// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The stanag-clip Authors

//! stanag-clip CLI

use anyhow::{Context, Result};
use clap::Parser;
use stanag_clip::{build, io, parameter_definitions, ClipParams};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stanag-clip")]
#[command(version)]
#[command(about = "Generate a parametric STANAG rail clip as STL", long_about = None)]
struct Cli {
    /// Output STL file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (stl, stl-ascii)
    #[arg(short, long, default_value = "stl")]
    format: String,

    /// Write rail and ring as separate files instead of one fused assembly
    #[arg(long)]
    split: bool,

    /// JSON parameter file; individual flags below override its values
    #[arg(short, long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Number of high segments along the rail
    #[arg(long, value_name = "N")]
    high_parts: Option<u32>,

    /// End the rail on a low segment (true/false)
    #[arg(long, value_name = "BOOL")]
    ends_with_low: Option<bool>,

    /// Inner bore diameter of the ring [mm]
    #[arg(long, value_name = "MM")]
    ring_diameter: Option<f64>,

    /// Radial wall thickness of the ring [mm]
    #[arg(long, value_name = "MM")]
    ring_strength: Option<f64>,

    /// Angular width of the ring cutaway [deg], 0 for a closed ring
    #[arg(long, value_name = "DEG")]
    ring_hole_angle: Option<f64>,

    /// Print the parameter definition table as JSON and exit
    #[arg(long)]
    definitions: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.definitions {
        println!("{}", serde_json::to_string_pretty(&parameter_definitions())?);
        return Ok(());
    }

    let params = resolve_params(&cli)?;

    let Some(output) = cli.output.as_deref() else {
        eprintln!("Error: output file required");
        eprintln!("Usage: stanag-clip --output <FILE> [OPTIONS]");
        std::process::exit(1);
    };

    if cli.verbose {
        println!("Parameters: {}", serde_json::to_string(&params)?);
    }

    let start = std::time::Instant::now();
    let solids = build(&params)?;
    let build_time = start.elapsed();

    if cli.verbose {
        println!("Built in {:.2?}", build_time);
        println!("Rail polygons: {}", solids.rail.polygons.len());
        println!("Ring polygons: {}", solids.ring.polygons.len());
        println!("Height: {:.2} mm", params.extrusion_height());
    }

    let export = match cli.format.to_lowercase().as_str() {
        "stl" => io::export_stl,
        "stl-ascii" => io::export_stl_ascii,
        other => {
            eprintln!("Error: unsupported format: {}", other);
            eprintln!("Supported formats: stl, stl-ascii");
            std::process::exit(1);
        }
    };

    let export_start = std::time::Instant::now();
    if cli.split {
        let rail_path = with_part_suffix(output, "rail");
        let ring_path = with_part_suffix(output, "ring");
        export(&solids.rail, "rail", &rail_path)?;
        export(&solids.ring, "ring", &ring_path)?;
        println!("Wrote {} and {}", rail_path.display(), ring_path.display());
    } else {
        // The rail is built to touch the ring, so their union is one
        // connected printable body.
        let assembly = solids.rail.union(&solids.ring);
        export(&assembly, "clip", output)?;
        println!("Wrote {}", output.display());
    }

    if cli.verbose {
        println!("Exported in {:.2?}", export_start.elapsed());
    }

    Ok(())
}

/// Load the parameter file if given, then apply flag overrides.
fn resolve_params(cli: &Cli) -> Result<ClipParams> {
    let mut params = match &cli.params {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse parameter file {}", path.display()))?
        }
        None => ClipParams::default(),
    };

    if let Some(n) = cli.high_parts {
        params.count_high_parts = n;
    }
    if let Some(low) = cli.ends_with_low {
        params.ends_with_low = low;
    }
    if let Some(d) = cli.ring_diameter {
        params.ring_diameter = d;
    }
    if let Some(s) = cli.ring_strength {
        params.ring_strength = s;
    }
    if let Some(a) = cli.ring_hole_angle {
        params.ring_hole_angle = a;
    }

    Ok(params)
}

/// `clip.stl` + `rail` -> `clip_rail.stl`
fn with_part_suffix(path: &Path, part: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "clip".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, part, ext.to_string_lossy()),
        None => format!("{}_{}", stem, part),
    };
    path.with_file_name(name)
}
