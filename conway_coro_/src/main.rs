// main.rs - Prints successive generations of a bounded Game of Life

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use conway::{Grid, History, PATTERNS, Pattern};
use conway_coro::advance_rows;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "conway_coro",
    version,
    about = "Print generations of Conway's Game of Life on a non-wrapping grid"
)]
struct Cli {
    /// Number of generations to print.
    #[arg(short, long, env = "CONWAY_GENERATIONS", default_value_t = 10)]
    generations: u32,

    /// Built-in pattern to seed the grid with (see --list).
    #[arg(short, long, conflicts_with_all = ["random", "file"])]
    pattern: Option<String>,

    /// Fill the grid pseudo-randomly from this seed.
    #[arg(long, conflicts_with = "file")]
    random: Option<u64>,

    /// Read the seed grid from a file of space-separated 0/1 rows.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Grid height for --pattern and --random.
    #[arg(long, default_value_t = 20, conflicts_with = "file")]
    rows: usize,

    /// Grid width for --pattern and --random.
    #[arg(long, default_value_t = 20, conflicts_with = "file")]
    cols: usize,

    /// Top-left corner of --pattern as ROW,COL; centred when omitted.
    #[arg(long, value_parser = parse_origin, requires = "pattern")]
    origin: Option<(usize, usize)>,

    /// Advance with one task per row instead of sequentially.
    #[arg(long)]
    parallel: bool,

    /// Stop once a generation repeats a recent one.
    #[arg(long)]
    stop_on_cycle: bool,

    /// List the built-in patterns and exit.
    #[arg(long)]
    list: bool,
}

fn parse_origin(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<usize>()
            .map_err(|err| format!("{v:?}: {err}"))
    };
    Ok((parse(row)?, parse(col)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock()).await
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

async fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.list {
        for pattern in PATTERNS {
            let (height, width) = pattern.bounds();
            writeln!(out, "{:<20} {height}x{width}", pattern.name)?;
        }
        return Ok(());
    }

    let mut grid = seed(cli)?;
    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        population = grid.population(),
        "seeded grid"
    );

    let mut history = History::default();
    for generation in 0..cli.generations {
        writeln!(out, "====Generation {generation}====")?;
        writeln!(out, "{grid}")?;
        writeln!(out)?;

        if cli.stop_on_cycle && history.observe(&grid) {
            info!(generation, "generation repeats a recent one, stopping");
            break;
        }

        grid = if cli.parallel {
            advance_rows(Arc::new(grid)).await?
        } else {
            grid.advance()
        };
        debug!(generation = generation + 1, population = grid.population(), "advanced");
    }
    Ok(())
}

fn seed(cli: &Cli) -> Result<Grid> {
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        return text
            .parse()
            .with_context(|| format!("parsing seed file {}", path.display()));
    }

    if let Some(seed) = cli.random {
        return Grid::try_random(cli.rows, cli.cols, seed).context("sizing random grid");
    }

    let Some(name) = &cli.pattern else {
        // The classic 4x4 seed
        let mut grid = Grid::new(4, 4);
        if let Some(plus) = Pattern::find("plus") {
            plus.stamp(&mut grid, (0, 0));
        }
        return Ok(grid);
    };

    let Some(pattern) = Pattern::find(name) else {
        bail!("unknown pattern {name:?}, try --list");
    };
    let mut grid = Grid::try_new(cli.rows, cli.cols).context("sizing pattern grid")?;
    let origin = cli
        .origin
        .unwrap_or_else(|| pattern.centered_origin(cli.rows, cli.cols));
    let placed = pattern.stamp(&mut grid, origin);
    if placed < pattern.cells.len() {
        warn!(
            pattern = pattern.name,
            placed,
            total = pattern.cells.len(),
            "pattern clipped at the grid edge"
        );
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    async fn output(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("conway_coro").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn origin_parses_row_and_column() {
        assert_eq!(parse_origin("3,4"), Ok((3, 4)));
        assert_eq!(parse_origin(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_origin("3").is_err());
        assert!(parse_origin("a,1").is_err());
    }

    #[tokio::test]
    async fn default_seed_prints_labelled_generations() {
        let text = output(&["-g", "2"]).await;
        assert_eq!(
            text,
            "====Generation 0====\n\
             0 1 0 0\n1 1 1 0\n0 1 0 0\n0 0 0 0\n\n\
             ====Generation 1====\n\
             1 1 1 0\n1 0 1 0\n1 1 1 0\n0 0 0 0\n\n"
        );
    }

    #[tokio::test]
    async fn parallel_output_matches_sequential() {
        let args = ["--random", "7", "--rows", "9", "--cols", "13", "-g", "6"];
        let sequential = output(&args).await;
        let parallel = output(&[&args[..], &["--parallel"][..]].concat()).await;
        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn stops_when_a_still_life_repeats() {
        let args = ["-p", "block", "--rows", "4", "--cols", "4", "-g", "10", "--stop-on-cycle"];
        let text = output(&args).await;
        assert_eq!(text.matches("====Generation").count(), 2);

        let parallel = output(&[&args[..], &["--parallel"][..]].concat()).await;
        assert_eq!(parallel, text);
    }

    #[tokio::test]
    async fn oversized_grids_are_reported_not_panicked() {
        for seed_args in [&["--random", "1"][..], &["-p", "glider"][..]] {
            let size = ["--rows", "4294967296", "--cols", "4294967296", "-g", "1"];
            let cli = Cli::try_parse_from(
                std::iter::once("conway_coro")
                    .chain(seed_args.iter().copied())
                    .chain(size),
            )
            .unwrap();
            let mut out = Vec::new();
            let err = run(&cli, &mut out).await.unwrap_err();
            assert!(format!("{err:#}").contains("too large"), "{err:#}");
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn seed_file_is_read_and_advanced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blinker.txt");
        std::fs::write(&path, "0 0 0\n1 1 1\n0 0 0\n").unwrap();
        let path = path.to_str().unwrap();

        let text = output(&["-f", path, "-g", "3"]).await;
        assert_eq!(
            text,
            "====Generation 0====\n0 0 0\n1 1 1\n0 0 0\n\n\
             ====Generation 1====\n0 1 0\n0 1 0\n0 1 0\n\n\
             ====Generation 2====\n0 0 0\n1 1 1\n0 0 0\n\n"
        );
    }

    #[test]
    fn malformed_seed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.txt");
        std::fs::write(&path, "0 1\n1\n").unwrap();
        let cli = Cli::try_parse_from(["conway_coro", "-f", path.to_str().unwrap()]).unwrap();
        let err = seed(&cli).unwrap_err();
        assert!(err.to_string().contains("parsing seed file"));
    }

    #[test]
    fn size_flags_conflict_with_seed_file() {
        assert!(Cli::try_parse_from(["conway_coro", "-f", "seed.txt", "--rows", "5"]).is_err());
        assert!(Cli::try_parse_from(["conway_coro", "-f", "seed.txt", "--cols", "5"]).is_err());
        assert!(Cli::try_parse_from(["conway_coro", "-f", "seed.txt"]).is_ok());
    }

    #[test]
    fn generations_can_come_from_the_environment() {
        let command = Cli::command();
        let generations = command
            .get_arguments()
            .find(|arg| arg.get_id() == "generations")
            .unwrap();
        assert_eq!(generations.get_env(), Some(OsStr::new("CONWAY_GENERATIONS")));
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let cli = Cli::try_parse_from(["conway_coro", "-p", "spaceship-9000"]).unwrap();
        let err = seed(&cli).unwrap_err();
        assert!(err.to_string().contains("unknown pattern"));
    }

    #[test]
    fn pattern_is_stamped_at_origin() {
        let cli = Cli::try_parse_from([
            "conway_coro",
            "-p",
            "blinker",
            "--rows",
            "3",
            "--cols",
            "4",
            "--origin",
            "2,1",
        ])
        .unwrap();
        assert_eq!(seed(&cli).unwrap().render(), "0 0 0 0\n0 0 0 0\n0 1 1 1");
    }

    #[test]
    fn missing_seed_file_reports_path() {
        let cli = Cli::try_parse_from(["conway_coro", "-f", "/nonexistent/seed.txt"]).unwrap();
        let err = seed(&cli).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.txt"));
    }

    #[tokio::test]
    async fn list_flag_prints_every_pattern() {
        let text = output(&["--list"]).await;
        assert_eq!(text.lines().count(), PATTERNS.len());
        assert!(text.contains("Gosper Glider Gun"));
    }
}
