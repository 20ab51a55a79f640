use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use khs::bench::{BenchConfig, run_bench};
use khs::generator::{GeneratorConfig, generate};
use khs::parser::{load_instance_with_header, write_instance};
use khs::search::{Heuristic, SearchConfig, SearchOutcome, SearchStatistics, run_search};
use khs::validation::check_solution;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "khs")]
#[command(about = "khs - exact k-Hitting-Set solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// CLI heuristic selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliHeuristic {
    /// Random subset, random element order
    Random,
    /// Random subset, most frequent elements first
    Critical,
    /// Smallest subset, stored element order
    Smallest,
    /// Smallest subset, most frequent elements first
    SmallestCritical,
    /// Legacy single-branch critical element (incomplete)
    GreedyCritical,
}

impl From<CliHeuristic> for Heuristic {
    fn from(cli: CliHeuristic) -> Self {
        match cli {
            CliHeuristic::Random => Heuristic::Random,
            CliHeuristic::Critical => Heuristic::Critical,
            CliHeuristic::Smallest => Heuristic::Smallest,
            CliHeuristic::SmallestCritical => Heuristic::SmallestCritical,
            CliHeuristic::GreedyCritical => Heuristic::GreedyCritical,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance file
    Solve {
        /// Path to the instance file
        instance: PathBuf,
        /// Branching heuristic
        #[arg(long, value_enum, default_value = "smallest-critical")]
        heuristic: CliHeuristic,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Timeout in seconds for the search
        #[arg(long)]
        timeout: Option<u64>,
        /// Override the budget k from the file
        #[arg(long)]
        budget: Option<u32>,
    },
    /// Generate an instance with a planted hitting set
    Generate {
        /// Output file
        #[arg(long, short)]
        output: PathBuf,
        /// Universe size n
        #[arg(long, default_value = "100")]
        universe: u32,
        /// Number of subsets m
        #[arg(long, default_value = "1000")]
        subsets: u32,
        /// Smallest subset size
        #[arg(long, default_value = "4")]
        min_size: u32,
        /// Largest subset size c
        #[arg(long, default_value = "6")]
        max_size: u32,
        /// Size of the planted hitting set
        #[arg(long, default_value = "10")]
        planted: u32,
        /// Upper bound on planted elements per subset
        #[arg(long, default_value = "2")]
        max_planted: u32,
        /// Frequent non-planted elements that mislead frequency-first branching
        #[arg(long, default_value = "0")]
        decoys: u32,
        /// Chance that a non-planted slot takes a decoy
        #[arg(long, default_value = "0.4")]
        decoy_probability: f64,
        /// Budget written to the file (defaults to the planted size)
        #[arg(long)]
        budget: Option<u32>,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Time heuristics against each other on one instance
    Bench {
        /// Path to the instance file
        instance: PathBuf,
        /// Heuristics to compare (repeatable; defaults to the four exhaustive ones)
        #[arg(long, value_enum)]
        heuristic: Vec<CliHeuristic>,
        /// Runs per heuristic
        #[arg(long, default_value = "5")]
        repetitions: u32,
        /// Timeout in seconds per run
        #[arg(long, default_value = "60")]
        timeout: u64,
        /// Base random seed
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Override the budget k from the file
        #[arg(long)]
        budget: Option<u32>,
        /// Also write the report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

/// Options for a single solve
struct SolveOptions {
    heuristic: Heuristic,
    seed: Option<u64>,
    timeout: Option<Duration>,
    budget: Option<u32>,
}

// --- Solve ---

fn solve_instance(path: &Path, options: &SolveOptions) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading instance: {}", path.display());
    let (header, instance) = load_instance_with_header(path)?;
    println!("Loaded {}", header);

    let config = SearchConfig::default()
        .with_heuristic(options.heuristic)
        .with_seed_option(options.seed)
        .with_timeout_option(options.timeout)
        .with_budget_option(options.budget);

    println!("\nRunning {} search...", config.heuristic);
    if config.heuristic.is_randomized() {
        match config.seed {
            Some(seed) => println!("  Seed: {}", seed),
            None => println!("  Seed: from OS entropy"),
        }
    }

    let result = run_search(&instance, &config);

    match &result.outcome {
        SearchOutcome::Found(solution) => {
            let check = check_solution(solution, &instance, result.budget);
            if !check.is_valid() {
                return Err(format!("solver returned an {}", check).into());
            }
            let sorted = result.sorted_solution().unwrap_or_default();
            let text: Vec<String> = sorted.iter().map(|e| e.to_string()).collect();
            println!("Hitting set ({} elements): {}", sorted.len(), text.join(" "));
        }
        SearchOutcome::NoSolution => {
            println!("No hitting set of size ≤ {} found.", result.budget);
            if !config.heuristic.is_exhaustive() {
                println!(
                    "  Note: {} does not explore every branch; a hitting set may still exist.",
                    config.heuristic
                );
            }
        }
        SearchOutcome::TimedOut => {
            println!(
                "Search timed out after {:?}; no answer for k = {}.",
                result.statistics.elapsed_time, result.budget
            );
        }
    }

    print_search_statistics(&result.statistics);
    Ok(())
}

/// Print search statistics
fn print_search_statistics(stats: &SearchStatistics) {
    println!("\nSearch Statistics:");
    println!("  Heuristic: {}", stats.heuristic);
    println!("  Elapsed time: {:?}", stats.elapsed_time);
    println!("  Nodes visited: {}", stats.nodes_visited);
    println!("  Reductions: {}", stats.reductions);
    println!("  Backtracks: {}", stats.backtracks);
    println!("  Duplicates skipped: {}", stats.duplicates_skipped);
    println!("  Max depth: {}", stats.max_depth);
    println!("  Average branching: {:.2}", stats.average_branching());
}

// --- Generate ---

fn generate_instance(
    output: &Path,
    config: &GeneratorConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let generated = generate(config)?;
    write_instance(output, &generated.instance)?;

    println!(
        "Wrote {} subsets over [1, {}] to {}",
        generated.instance.subset_count(),
        generated.instance.universe_size(),
        output.display()
    );
    let planted: Vec<String> = generated.planted.iter().map(|e| e.to_string()).collect();
    println!(
        "Planted hitting set (size {}): {}",
        generated.planted.len(),
        planted.join(" ")
    );
    if !generated.decoys.is_empty() {
        let decoys: Vec<String> = generated.decoys.iter().map(|e| e.to_string()).collect();
        println!("Decoys: {}", decoys.join(" "));
    }
    Ok(())
}

// --- Bench ---

fn bench_instance(
    path: &Path,
    config: &BenchConfig,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading instance: {}", path.display());
    let (header, instance) = load_instance_with_header(path)?;
    println!("Loaded {}\n", header);

    let report = run_bench(&instance, config);
    print!("{}", report);

    if let Some(report_path) = report_path {
        fs::write(report_path, report.to_string())?;
        println!("\nReport written to {}", report_path.display());
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match args.command {
        Commands::Solve {
            instance,
            heuristic,
            seed,
            timeout,
            budget,
        } => {
            let options = SolveOptions {
                heuristic: heuristic.into(),
                seed,
                timeout: timeout.map(Duration::from_secs),
                budget,
            };
            solve_instance(&instance, &options)
        }
        Commands::Generate {
            output,
            universe,
            subsets,
            min_size,
            max_size,
            planted,
            max_planted,
            decoys,
            decoy_probability,
            budget,
            seed,
        } => {
            let mut config = GeneratorConfig::default()
                .with_universe_size(universe)
                .with_subset_count(subsets)
                .with_subset_size(min_size, max_size)
                .with_planted_size(planted)
                .with_max_planted_per_subset(max_planted)
                .with_decoys(decoys, decoy_probability)
                .with_seed_option(seed);
            config.budget = budget;
            generate_instance(&output, &config)
        }
        Commands::Bench {
            instance,
            heuristic,
            repetitions,
            timeout,
            seed,
            budget,
            report,
        } => {
            let mut config = BenchConfig::default()
                .with_repetitions(repetitions)
                .with_timeout_option(Some(Duration::from_secs(timeout)))
                .with_seed(seed)
                .with_budget_option(budget);
            if !heuristic.is_empty() {
                config = config.with_heuristics(heuristic.into_iter().map(Heuristic::from).collect());
            }
            bench_instance(&instance, &config, report.as_deref())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
