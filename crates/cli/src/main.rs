use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maze::api::{generate_image, solve_image};
use maze::checked_dimensions;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;


#[derive(Parser)]
#[command(name = "maze-cli")]
#[command(about = "Generate pixel mazes and solve them")]
struct Cmd {
    /// Log debug events from carving and solving
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Carve a new maze and write it as a two-value PGM image
    Generate {
        out: PathBuf,
        #[arg(allow_negative_numbers = true)]
        width: i64,
        #[arg(allow_negative_numbers = true)]
        height: i64,
        /// Seed for the maze RNG; drawn at random and logged when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Also write <out-stem>.provenance.json
        #[arg(long)]
        provenance: bool,
    },
    /// Mark the route through a generated maze and write a three-value image
    Solve {
        input: PathBuf,
        out: PathBuf,
        /// Also write <out-stem>.provenance.json
        #[arg(long)]
        provenance: bool,
    },
}

#[derive(Serialize)]
struct GenerateParams {
    width: usize,
    height: usize,
    seed: u64,
}

#[derive(Serialize)]
struct GenerateStats {
    pushes: usize,
    backtracks: usize,
    tunnelled: usize,
}

#[derive(Serialize)]
struct SolveParams<'a> {
    input: &'a Path,
}

#[derive(Serialize)]
struct SolveStats {
    route_length: usize,
    dead_ends: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Generate {
            out,
            width,
            height,
            seed,
            provenance,
        } => run_generate(&out, width, height, seed, provenance),
        Action::Solve {
            input,
            out,
            provenance,
        } => run_solve(&input, &out, provenance),
    }
}

fn run_generate(
    out: &Path,
    width: i64,
    height: i64,
    seed: Option<u64>,
    provenance: bool,
) -> Result<()> {
    let (width, height) = checked_dimensions(width, height)?;
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!(out = %out.display(), width, height, seed, "generate");

    let mut rng = StdRng::seed_from_u64(seed);
    let (image, stats) = generate_image(width, height, &mut rng)?;
    write_output(out, &image)?;
    tracing::info!(
        pushes = stats.pushes,
        backtracks = stats.backtracks,
        tunnelled = stats.tunnelled,
        "maze written"
    );

    if provenance {
        let path = provenance::record(
            out,
            "generate",
            &GenerateParams {
                width,
                height,
                seed,
            },
            &GenerateStats {
                pushes: stats.pushes,
                backtracks: stats.backtracks,
                tunnelled: stats.tunnelled,
            },
        )?;
        tracing::info!(path = %path.display(), "provenance written");
    }
    Ok(())
}

fn run_solve(input: &Path, out: &Path, provenance: bool) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "solve");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let (image, route) =
        solve_image(&text).with_context(|| format!("solving {}", input.display()))?;
    write_output(out, &image)?;
    tracing::info!(
        route_length = route.len(),
        dead_ends = route.dead_ends,
        "route written"
    );

    if provenance {
        let path = provenance::record(
            out,
            "solve",
            &SolveParams { input },
            &SolveStats {
                route_length: route.len(),
                dead_ends: route.dead_ends,
            },
        )?;
        tracing::info!(path = %path.display(), "provenance written");
    }
    Ok(())
}

/// Write the fully encoded image in one step.
fn write_output(out: &Path, image: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, image).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_negative_dimensions() {
        let cmd = Cmd::try_parse_from(["maze-cli", "generate", "m.pgm", "-3", "4"]).unwrap();
        match cmd.action {
            Action::Generate { width, height, .. } => assert_eq!((width, height), (-3, 4)),
            Action::Solve { .. } => panic!("expected generate"),
        }
        assert!(Cmd::try_parse_from(["maze-cli", "solve", "in.pgm"]).is_err());
    }

    #[test]
    fn generate_then_solve_round_trip() {
        let dir = tempdir().unwrap();
        let maze = dir.path().join("out/maze.pgm");
        let solved = dir.path().join("out/solved.pgm");
        run_generate(&maze, 12, 8, Some(3), true).unwrap();
        run_solve(&maze, &solved, true).unwrap();

        let text = fs::read_to_string(&solved).unwrap();
        assert!(text.starts_with("P2\n14 10\n2\n"));
        assert!(text.contains(" 1 "));
        assert!(dir.path().join("out/maze.provenance.json").exists());
        let raw = fs::read(dir.path().join("out/solved.provenance.json")).unwrap();
        let prov: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(prov["command"], "solve");
        assert!(prov["callsite"]["file"].as_str().unwrap().ends_with("main.rs"));
        assert!(prov["stats"]["route_length"].as_u64().unwrap() >= 19);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.pgm");
        let b = dir.path().join("b.pgm");
        run_generate(&a, 20, 20, Some(77), false).unwrap();
        run_generate(&b, 20, 20, Some(77), false).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
        assert!(!dir.path().join("a.provenance.json").exists());
    }

    #[test]
    fn invalid_dimensions_write_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("m.pgm");
        let err = run_generate(&out, 0, 5, None, true).unwrap_err();
        assert!(err.to_string().contains("invalid dimensions"));
        assert!(!out.exists());
        assert!(run_generate(&out, 4, -1, None, false).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn unsolvable_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let out = dir.path().join("out.pgm");
        fs::write(&input, "P2\n4 3\n2\n0 2 0 0\n0 2 0 0\n0 0 2 0\n").unwrap();
        let err = run_solve(&input, &out, false).unwrap_err();
        assert!(format!("{err:#}").contains("is a wall"));
        assert!(!out.exists());

        fs::write(&input, "P2\n3 3\n2\n0 2 0\n0 1 0\n0 2 0\n").unwrap();
        let err = run_solve(&input, &out, false).unwrap_err();
        assert!(format!("{err:#}").contains("invalid image format"));
        assert!(!out.exists());
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nope.pgm");
        let err = run_solve(&input, &dir.path().join("o.pgm"), false).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
