//! `u-jobshop` command-line entry point.
//!
//! Runs a set of solvers on a set of instances and prints a comparison
//! table (runtime, makespan, deviation from the best-known makespan).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_jobshop::benchmark::{Benchmark, CsvReport, SolverCatalog};
use u_jobshop::config::RunConfig;
use u_jobshop::io::{best_known, known_instances};

#[derive(Parser, Debug)]
#[command(name = "u-jobshop", version, about = "Solves job-shop scheduling problems.")]
struct Args {
    /// Solver(s) to use, space separated
    #[arg(long, num_args = 1..)]
    solver: Vec<String>,

    /// Instance(s) to solve, space separated
    #[arg(long, num_args = 1..)]
    instance: Vec<String>,

    /// Solver timeout in seconds for each instance
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Directory holding the instance files
    #[arg(long)]
    instance_dir: Option<PathBuf>,

    /// Write the results as CSV to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML run configuration; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed of the random solver
    #[arg(long)]
    seed: Option<u64>,

    /// List available solvers and instances, then exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn into_config(self) -> u_jobshop::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if !self.solver.is_empty() {
            config.solvers = self.solver;
        }
        if !self.instance.is_empty() {
            config.instances = self.instance;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(dir) = self.instance_dir {
            config.instance_dir = dir;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let list = args.list;
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    if list {
        print_available(&SolverCatalog::from_config(&config));
        return ExitCode::SUCCESS;
    }
    if config.solvers.is_empty() || config.instances.is_empty() {
        eprintln!("ERROR: at least one solver and one instance are required (see --help)");
        return ExitCode::FAILURE;
    }

    let benchmark = Benchmark::new(config);
    match benchmark.run() {
        Ok(report) => {
            print_table(&benchmark.config().solvers, &report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            if matches!(e, u_jobshop::Error::UnknownSolver(_)) {
                let names: Vec<&str> = benchmark.catalog().names().collect();
                eprintln!("       Available solvers: {}", names.join(", "));
            }
            ExitCode::FAILURE
        }
    }
}

fn print_available(catalog: &SolverCatalog) {
    let solvers: Vec<&str> = catalog.names().collect();
    let instances: Vec<&str> = known_instances().collect();
    println!("solvers:   {}", solvers.join(" "));
    println!("instances: {}", instances.join(" "));
}

fn print_table(solvers: &[String], report: &CsvReport) {
    print!("{:25}", "");
    for s in solvers {
        print!("{s:<30}");
    }
    println!();
    print!("instance size  best      ");
    for _ in solvers {
        print!("runtime makespan ecart        ");
    }
    println!();

    // Rows come instance-major: one chunk of `solvers.len()` per instance.
    for chunk in report.rows().chunks(solvers.len().max(1)) {
        let Some(first) = chunk.first() else {
            continue;
        };
        let best = best_known(&first.instance)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".into());
        let size = format!("{}x{}", first.num_jobs, first.num_machines);
        print!("{:<8} {:<5} {:>4}      ", first.instance, size, best);
        for row in chunk {
            let deviation = row
                .deviation_pct
                .map(|d| format!("{d:5.1}"))
                .unwrap_or_else(|| format!("{:>5}", "-"));
            print!("{:7} {:8} {}        ", row.runtime_ms, row.makespan, deviation);
        }
        println!();
    }

    print!("{:<8} {:<5} {:>4}      ", "AVG", "-", "-");
    for summary in report.summaries() {
        let deviation = summary
            .avg_deviation_pct
            .map(|d| format!("{d:5.1}"))
            .unwrap_or_else(|| format!("{:>5}", "-"));
        print!("{:7.1} {:>8} {}        ", summary.avg_runtime_ms, "-", deviation);
    }
    println!();
}
