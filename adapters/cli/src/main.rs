#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and prints Vision Arena layouts.

mod layout_transfer;

use std::{fmt::Write as _, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use glam::EulerRot;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vision_arena_assets::AssetTable;
use vision_arena_core::{GridSize, DEFAULT_GRID_SIDE};
use vision_arena_system_placement::PlacementTuning;
use vision_arena_world::{query, Arena, ArenaConfig, Instance, World, DEFAULT_SEED};

use layout_transfer::ArenaTransfer;

/// Command-line arguments accepted by the Vision Arena binary.
#[derive(Debug, Parser)]
#[command(name = "vision-arena", about = "Generates randomised vision arena layouts")]
struct Cli {
    /// Side length of the square grid; must be odd and at least 5.
    #[arg(long, default_value_t = DEFAULT_GRID_SIDE)]
    size: u32,
    /// Seed for the deterministic random source.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Distance between neighbouring cell centres in world units.
    #[arg(long)]
    step: Option<f32>,
    /// TOML manifest mapping asset keys to resource paths.
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Representation printed to standard output.
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    format: OutputFormat,
    /// Transfer string to verify against the layout regenerated from its seed.
    #[arg(long, conflicts_with_all = ["size", "seed"])]
    decode: Option<String>,
}

/// Output representations supported by the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Encoded integer matrix, one row per line.
    Grid,
    /// Every placed instance with its resolved resource.
    Placements,
    /// Full layout snapshot as JSON.
    Json,
    /// Single-line transfer string.
    Transfer,
}

/// Entry point for the Vision Arena command-line interface.
fn main() -> Result<()> {
    install_tracing();
    let cli = Cli::parse();
    let output = run(&cli)?;
    print!("{output}");
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let mut config = ArenaConfig::default();
    if let Some(step) = cli.step {
        if !(step.is_finite() && step > 0.0) {
            bail!("cell step must be a positive number, got {step}");
        }
        config.placement = PlacementTuning {
            step,
            ..config.placement
        };
    }

    let expected = match &cli.decode {
        Some(encoded) => {
            let transfer =
                ArenaTransfer::decode(encoded).context("failed to decode transfer string")?;
            config.size = transfer.size;
            config.seed = transfer.seed;
            Some(transfer)
        }
        None => {
            config.size = GridSize::new(cli.size).context("invalid --size")?;
            config.seed = cli.seed;
            None
        }
    };

    info!(size = %config.size, seed = config.seed, format = ?cli.format, "generating arena");
    let world = World::with_config(config);
    let arena = query::arena(&world);

    if let Some(transfer) = expected {
        if transfer.encoded != arena.encoded_rows() {
            bail!(
                "transfer string does not match the layout regenerated from seed {}",
                transfer.seed
            );
        }
        info!("transfer string matches regenerated layout");
    }

    let assets = match &cli.manifest {
        Some(path) => AssetTable::from_manifest_path(path)?,
        None => AssetTable::reference(),
    };

    let output = match cli.format {
        OutputFormat::Grid => render_grid(arena),
        OutputFormat::Placements => render_placements(arena, &assets)?,
        OutputFormat::Json => {
            let layout = query::layout(&world);
            let mut json =
                serde_json::to_string_pretty(&layout).context("failed to serialise layout")?;
            json.push('\n');
            json
        }
        OutputFormat::Transfer => {
            let mut line = ArenaTransfer::capture(arena, config.seed).encode();
            line.push('\n');
            line
        }
    };
    Ok(output)
}

fn render_grid(arena: &Arena) -> String {
    let mut output = String::new();
    for row in arena.encoded_rows() {
        let line: Vec<String> = row.iter().map(|value| format!("{value:>3}")).collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }
    output
}

fn render_placements(arena: &Arena, assets: &AssetTable) -> Result<String> {
    let mut output = String::new();
    for cell in arena.cells() {
        let coord = cell.coord();
        for Instance { asset, pose } in cell.instances() {
            let resource = assets
                .resolve(asset)
                .with_context(|| format!("asset `{asset}` missing from table"))?;
            let (_, _, heading) = pose.orientation.to_euler(EulerRot::XYZ);
            writeln!(
                output,
                "({}, {}) {:<21} pos=({:.2}, {:.2}, {:.2}) yaw={:.0} {}",
                coord.row(),
                coord.column(),
                asset.key(),
                pose.position.x,
                pose.position.y,
                pose.position.z,
                heading.to_degrees(),
                resource.display()
            )
            .expect("writing to a string never fails");
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vision-arena").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn defaults_describe_the_reference_arena() {
        let cli = parse(&[]);
        assert_eq!(cli.size, 9);
        assert_eq!(cli.seed, 0);
        assert_eq!(cli.format, OutputFormat::Grid);
        assert!(cli.manifest.is_none());
    }

    #[test]
    fn grid_output_has_one_line_per_row() {
        let output = run(&parse(&["--size", "7", "--seed", "3"])).expect("run succeeds");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        let center: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(center[3], "-1");
    }

    #[test]
    fn even_sizes_are_rejected() {
        let error = run(&parse(&["--size", "8"])).expect_err("even grid");
        assert!(format!("{error:#}").contains("must be odd"));
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        assert!(run(&parse(&["--step", "0"])).is_err());
    }

    #[test]
    fn placements_list_plates_and_markers() {
        let output = run(&parse(&["--format", "placements"])).expect("run succeeds");
        assert!(output.contains("rsc/base plate/base plate white.urdf"));
        assert!(output.contains("rsc/arrow/arrow.urdf"));
        let plates = output.lines().filter(|line| line.contains("plate.")).count();
        assert_eq!(plates, 81);
    }

    #[test]
    fn transfer_output_decodes_back() {
        let line = run(&parse(&["--format", "transfer", "--seed", "21"])).expect("run succeeds");
        let decoded = ArenaTransfer::decode(&line).expect("transfer decodes");
        assert_eq!(decoded.seed, 21);

        let verified = run(&parse(&["--decode", line.trim()])).expect("decode succeeds");
        assert_eq!(verified.lines().count(), 9);
    }

    #[test]
    fn json_output_is_a_layout_snapshot() {
        let output = run(&parse(&["--format", "json", "--size", "5"])).expect("run succeeds");
        let layout: query::ArenaLayout = serde_json::from_str(&output).expect("valid json");
        assert_eq!(layout.cells.len(), 25);
    }
}
