use clap::Parser;
use env_logger::Builder;
use ggames_cop_win::decision::{CopWinSolution, decide};
use ggames_cop_win::game::{GameConfig, GameGraphConfig};
use ggames_cop_win::graph::EdgePeriodicGraph;
use ggames_cop_win::problem_file::{ProblemFile, VertexLabel};
use ggames_cop_win::sweep::{SweepConfig, SweepOutcome, Verdict, sweep};
use log::{LevelFilter, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cop_win")]
#[command(version)]
#[command(about = "Decide if a (periodic) graph is k-cop-win by reduction to a reachability game")]
struct Args {
    /// Number of cops
    #[arg(value_name = "K")]
    cops: usize,

    /// Path to a JSON graph file ({"V": [...], "E": [[u, v], ...], "tau": [...]})
    #[arg(value_name = "FILE")]
    file: String,

    /// Write the result to the given file instead of the standard output
    #[arg(long = "output", short = 'o', value_name = "PATH", require_equals = true)]
    output: Option<String>,

    /// Ignore `tau` and test every presence mapping with patterns of the given length
    #[arg(long, value_name = "LENGTH", require_equals = true)]
    all: Option<usize>,

    /// Number of worker threads for --all (0 = one per core)
    #[arg(long, default_value_t = 0, require_equals = true)]
    workers: usize,

    /// Time limit in seconds for a single instance
    #[arg(long, value_name = "SECS", require_equals = true)]
    timeout: Option<u64>,

    /// Play the game over the given time horizon (a multiple of the graph period)
    #[arg(long, value_name = "T", require_equals = true)]
    time_horizon: Option<usize>,

    /// Also print every winning cop placement (one per line)
    #[arg(long)]
    placements: bool,

    /// Logging verbosity (use -v for info, or -v=LEVEL for a specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info,
        Some(Some(level)) => level.into(),
    };
    Builder::from_default_env().filter_level(log_level).init();

    let problem = ProblemFile::from_file(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load graph file {}: {}", args.file, e);
        std::process::exit(1);
    });
    let graph = problem.graph().unwrap_or_else(|e| {
        eprintln!("Invalid graph in {}: {}", args.file, e);
        std::process::exit(1);
    });
    info!(
        "Graph loaded ({} vertices; {} edges; period {}).",
        graph.vertex_count(),
        graph.edge_count(),
        graph.time_horizon()
    );

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).unwrap_or_else(|e| {
                eprintln!("Failed to open output file {}: {}", path, e);
                std::process::exit(1);
            });
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut game = GameConfig::new(args.cops);
    if let Some(horizon) = args.time_horizon {
        game = game.time_horizon(horizon);
    }
    let timeout = args.timeout.map(Duration::from_secs);

    let result = match args.all {
        Some(length) => run_sweep(&graph, game, length, args.workers, timeout, &mut output),
        None => run_single(graph, &game, timeout, args.placements, &mut output),
    };
    if let Err(e) = result.and_then(|()| output.flush().map_err(|e| e.to_string())) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_single(
    graph: EdgePeriodicGraph<VertexLabel>,
    game: &GameConfig,
    timeout: Option<Duration>,
    placements: bool,
    output: &mut dyn Write,
) -> Result<(), String> {
    let config = GameGraphConfig::new(graph, game).map_err(|e| e.to_string())?;
    let solution: CopWinSolution<VertexLabel> = match timeout {
        Some(timeout) => cancel_this::on_timeout(timeout, || decide(config.clone())),
        None => decide(config),
    }
    .map_err(|e| format!("Computation cancelled: {e}"))?;

    writeln!(output, "{}", solution.is_cop_win()).map_err(|e| e.to_string())?;
    if placements {
        for placement in solution.winning_placements() {
            let line = serde_json::to_string(&placement).map_err(|e| e.to_string())?;
            writeln!(output, "{line}").map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn run_sweep(
    footprint: &EdgePeriodicGraph<VertexLabel>,
    game: GameConfig,
    length: usize,
    workers: usize,
    timeout: Option<Duration>,
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut config = SweepConfig::new(game, length).workers(workers);
    config.timeout = timeout;

    let edges: Vec<(VertexLabel, VertexLabel)> = footprint
        .edges()
        .map(|(u, v, _)| (u.clone(), v.clone()))
        .collect();
    let summary = sweep(footprint, &config, |outcome: &SweepOutcome| {
        if outcome.verdict != Verdict::CopWin {
            return Ok(());
        }
        let mapping: Vec<(&VertexLabel, &VertexLabel, String)> = edges
            .iter()
            .zip(&outcome.patterns)
            .map(|((u, v), pattern)| (u, v, pattern.to_string()))
            .collect();
        writeln!(output, "{}", serde_json::to_string(&mapping)?)
    })
    .map_err(|e| e.to_string())?;

    info!(
        "{} of {} presence mappings are {}-cop-win ({} timed out).",
        summary.cop_wins,
        summary.instances,
        config.game.cops,
        summary.timed_out
    );
    Ok(())
}
