//! Repetition harness comparing heuristics on one instance
//!
//! Each heuristic runs `repetitions` times; repetition `i` uses seed
//! `seed + i` so randomized heuristics see different but reproducible
//! streams. Every solution found is certified before it is counted.

use crate::instance::Instance;
use crate::search::{Heuristic, SearchConfig, SearchOutcome, SearchStatistics, run_search};
use crate::validation::check_solution;
use log::{info, warn};
use std::fmt;
use std::time::Duration;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Heuristics to compare, in report order
    pub heuristics: Vec<Heuristic>,
    /// Runs per heuristic
    pub repetitions: u32,
    /// Wall-clock budget per run (None = unbounded)
    pub timeout: Option<Duration>,
    /// Base seed for the random source
    pub seed: u64,
    /// Overrides the instance's budget when set
    pub budget: Option<u32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            heuristics: Heuristic::EXHAUSTIVE.to_vec(),
            repetitions: 5,
            timeout: Some(Duration::from_secs(60)),
            seed: 0,
            budget: None,
        }
    }
}

impl BenchConfig {
    pub fn with_heuristics(mut self, heuristics: Vec<Heuristic>) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_budget_option(mut self, budget: Option<u32>) -> Self {
        self.budget = budget;
        self
    }
}

/// Aggregated runs of one heuristic
#[derive(Debug, Clone)]
pub struct HeuristicSummary {
    pub heuristic: Heuristic,
    pub runs: u32,
    pub found: u32,
    pub no_solution: u32,
    pub timed_out: u32,
    /// Solutions that failed certification
    pub invalid: u32,
    pub min_time: Duration,
    pub max_time: Duration,
    /// Statistics summed over every run
    pub totals: SearchStatistics,
}

impl HeuristicSummary {
    fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            runs: 0,
            found: 0,
            no_solution: 0,
            timed_out: 0,
            invalid: 0,
            min_time: Duration::MAX,
            max_time: Duration::ZERO,
            totals: SearchStatistics::new(heuristic),
        }
    }

    pub fn mean_time(&self) -> Duration {
        if self.runs == 0 {
            Duration::ZERO
        } else {
            self.totals.elapsed_time / self.runs
        }
    }

    pub fn mean_nodes(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.totals.nodes_visited as f64 / self.runs as f64
        }
    }

    fn record(&mut self, statistics: &SearchStatistics) {
        self.runs += 1;
        self.min_time = self.min_time.min(statistics.elapsed_time);
        self.max_time = self.max_time.max(statistics.elapsed_time);
        self.totals.merge(statistics);
    }
}

/// Timing report over all heuristics
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub universe_size: u32,
    pub subset_count: usize,
    pub max_subset_size: usize,
    pub budget: u32,
    pub repetitions: u32,
    pub summaries: Vec<HeuristicSummary>,
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Instance: n:{} m:{} c:{} k:{} ({} repetitions)",
            self.universe_size, self.subset_count, self.max_subset_size, self.budget, self.repetitions
        )?;
        writeln!(
            f,
            "{:<18} {:>5} {:>5} {:>5} {:>5} {:>12} {:>12} {:>12} {:>14}",
            "heuristic", "runs", "found", "none", "t/o", "min (ms)", "mean (ms)", "max (ms)", "mean nodes"
        )?;
        for s in &self.summaries {
            let min = if s.runs == 0 { Duration::ZERO } else { s.min_time };
            writeln!(
                f,
                "{:<18} {:>5} {:>5} {:>5} {:>5} {:>12.3} {:>12.3} {:>12.3} {:>14.1}",
                s.heuristic.to_string(),
                s.runs,
                s.found,
                s.no_solution,
                s.timed_out,
                millis(min),
                millis(s.mean_time()),
                millis(s.max_time),
                s.mean_nodes()
            )?;
        }
        Ok(())
    }
}

/// Run every configured heuristic `repetitions` times on `instance`
pub fn run_bench(instance: &Instance, config: &BenchConfig) -> BenchReport {
    let budget = config.budget.unwrap_or_else(|| instance.budget());
    let mut summaries = Vec::with_capacity(config.heuristics.len());

    for &heuristic in &config.heuristics {
        let mut summary = HeuristicSummary::new(heuristic);

        for rep in 0..config.repetitions {
            let search_config = SearchConfig::default()
                .with_heuristic(heuristic)
                .with_seed(config.seed.wrapping_add(u64::from(rep)))
                .with_timeout_option(config.timeout)
                .with_budget(budget);

            let result = run_search(instance, &search_config);
            summary.record(&result.statistics);

            match &result.outcome {
                SearchOutcome::Found(solution) => {
                    let check = check_solution(solution, instance, budget);
                    if check.is_valid() {
                        summary.found += 1;
                    } else {
                        warn!("{} run {}: {}", heuristic, rep, check);
                        summary.invalid += 1;
                    }
                }
                SearchOutcome::NoSolution => summary.no_solution += 1,
                SearchOutcome::TimedOut => summary.timed_out += 1,
            }

            info!(
                "{} run {}: {:?} in {:?}",
                heuristic,
                rep,
                result.outcome,
                result.statistics.elapsed_time
            );
        }

        summaries.push(summary);
    }

    BenchReport {
        universe_size: instance.universe_size(),
        subset_count: instance.subset_count(),
        max_subset_size: instance.max_subset_size(),
        budget,
        repetitions: config.repetitions,
        summaries,
    }
}
