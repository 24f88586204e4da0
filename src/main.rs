use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use glife::io::{load_config, CellColor, DisplayConfig, TerminalRenderer, TextLog};
use glife::{Grid, Simulation, SimulationConfig, SoupSeeder};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DENSITY: f64 = 0.35;
const DEFAULT_SEED: u64 = 0x5EED_1234_ABCD_EF01;
const SOUP_LIVE_CHAR: char = '*';

fn usage() -> String {
    format!(
        "Usage: glife [<options>] <input_cfg_file>\n\
         Simulation options:\n\
         \t--help\t\t\tPrint this help text.\n\
         \t--maxgen <num>\t\tMaximum number of generations to simulate.\n\
         \t--fps <num>\t\tNumber of generations presented per second. Default 2.\n\
         \t--alivecolor <color>\tColor name for representing alive cells. Default RED.\n\
         \t--outfile <filename>\tWrite a text log of the simulation to this file.\n\
         \t--soup <rows>x<cols>\tSimulate a random grid instead of reading a file.\n\
         \t--density <f>\t\tLive cell probability for --soup. Default {DEFAULT_DENSITY}.\n\
         \t--seed <num>\t\tRandom seed for --soup.\n\
         \t--no-pace\t\tDo not sleep between generations.\n\n\
         Available colors are:\n\t{}\n",
        CellColor::NAMES.join(" ")
    )
}

enum Source {
    File(PathBuf),
    Soup {
        rows: usize,
        cols: usize,
        density: f64,
        seed: u64,
    },
}

struct MainArgs {
    source: Source,
    simulation: SimulationConfig,
    display: DisplayConfig,
    outfile: Option<PathBuf>,
}

fn parse_size(value: &str) -> Result<(usize, usize)> {
    let (rows, cols) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("--soup expects <rows>x<cols>, got {value:?}"))?;
    let rows: usize = rows.trim().parse().context("--soup rows must be a positive integer")?;
    let cols: usize = cols.trim().parse().context("--soup cols must be a positive integer")?;
    Grid::check_dimensions(rows, cols).context("--soup dimensions out of range")?;
    Ok((rows, cols))
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{flag} requires a value"))
}

/// Returns `None` when help was requested.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<MainArgs>> {
    let mut args = args.into_iter();
    let mut simulation = SimulationConfig::default();
    let mut display = DisplayConfig::default();
    let mut outfile = None;
    let mut input = None;
    let mut soup = None;
    let mut density = DEFAULT_DENSITY;
    let mut seed = DEFAULT_SEED;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-m" | "--maxgen" => {
                let n = next_value(&mut args, "--maxgen")?
                    .parse()
                    .context("--maxgen requires a non-negative integer")?;
                simulation = simulation.with_max_generations(n);
            }
            "-f" | "--fps" => {
                let fps = next_value(&mut args, "--fps")?
                    .parse()
                    .context("--fps requires a non-negative integer")?;
                display = display.with_fps(fps);
            }
            "-a" | "--alivecolor" => {
                let color: CellColor = next_value(&mut args, "--alivecolor")?.parse()?;
                display = display.with_alive_color(color);
            }
            "-o" | "--outfile" => {
                outfile = Some(PathBuf::from(next_value(&mut args, "--outfile")?));
            }
            "--soup" => {
                soup = Some(parse_size(&next_value(&mut args, "--soup")?)?);
            }
            "--density" => {
                density = next_value(&mut args, "--density")?
                    .parse()
                    .context("--density requires a number between 0 and 1")?;
            }
            "--seed" => {
                seed = next_value(&mut args, "--seed")?
                    .parse()
                    .context("--seed requires a non-negative integer")?;
            }
            "--no-pace" => {
                display = display.without_pacing();
            }
            flag if flag.starts_with('-') => bail!("unknown option {flag}\n\n{}", usage()),
            path => input = Some(PathBuf::from(path)),
        }
    }

    let source = match (input, soup) {
        (Some(path), None) => Source::File(path),
        (None, Some((rows, cols))) => Source::Soup {
            rows,
            cols,
            density,
            seed,
        },
        (Some(_), Some(_)) => bail!("give either an input file or --soup, not both"),
        (None, None) => bail!("missing data file\n\n{}", usage()),
    };

    Ok(Some(MainArgs {
        source,
        simulation,
        display,
        outfile,
    }))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        eprint!("{}", usage());
        return Ok(());
    };

    let (grid, live_char) = match args.source {
        Source::File(path) => {
            let loaded = load_config(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (loaded.grid, loaded.live_char)
        }
        Source::Soup {
            rows,
            cols,
            density,
            seed,
        } => {
            info!(rows, cols, density, seed, "seeding random soup");
            let grid = SoupSeeder::new(seed).soup(rows, cols, density);
            (grid, SOUP_LIVE_CHAR)
        }
    };

    match args.simulation.max_generations {
        Some(max) => info!(
            max,
            "running up to the generation cap, or until extinction or stability"
        ),
        None => info!("running until extinction or stability"),
    }

    let log = match &args.outfile {
        Some(path) => Some(
            TextLog::create(path, live_char)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => None,
    };
    let renderer = TerminalRenderer::stdout(args.display, live_char);

    let mut simulation = Simulation::new(grid, &args.simulation);
    let outcome = simulation.run((renderer, log)).context("simulation output failed")?;

    info!(
        status = %outcome.status,
        generation = outcome.final_generation,
        population = outcome.population,
        "done"
    );
    Ok(())
}
