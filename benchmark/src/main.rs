//! @ai:module:intent CLI for the container micro-benchmark
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexbench::{
    config::{parse_operations, BenchmarkConfig},
    container::ContainerRegistry,
    host::HostInfo,
    metrics::{BenchmarkResults, OperationKind},
    pipeline::run_benchmark,
    report::{JsonReporter, ReportGenerator},
    source::{SourceLoader, SourceLoaderTrait},
};
use lexbench_lexeme::{CategorySelection, LexemeCategory};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexbench")]
#[command(about = "Benchmark add/search/remove latency of lexeme containers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run benchmarks
    Run {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Source file or directory to classify
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Number of workload repetitions
        #[arg(short, long)]
        repeat: Option<u32>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Seed containers from one lexeme category only
        #[arg(long)]
        category: Option<LexemeCategory>,

        /// Workload cycle (comma-separated: add,search,remove)
        #[arg(long)]
        operations: Option<String>,

        /// Output directory for results
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },

    /// Generate reports from existing results
    Report {
        /// Path to results JSON file
        #[arg(short, long)]
        results: PathBuf,

        /// Output directory for reports (defaults to the results file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "lexbench.toml")]
        output: PathBuf,
    },

    /// Print lexeme counts per category for a source file or directory
    Classify {
        /// Source file or directory
        path: PathBuf,

        /// Restrict to one category
        #[arg(long)]
        category: Option<LexemeCategory>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            source,
            repeat,
            seed,
            category,
            operations,
            output,
            no_charts,
        } => run_benchmarks(RunArgs {
            config,
            source,
            repeat,
            seed,
            category,
            operations,
            output,
            no_charts,
        }),
        Commands::Report { results, output } => generate_reports(results, output),
        Commands::Init { output } => init_config(output),
        Commands::Classify { path, category } => classify_source(path, category),
    }
}

struct RunArgs {
    config: Option<PathBuf>,
    source: Option<PathBuf>,
    repeat: Option<u32>,
    seed: Option<u64>,
    category: Option<LexemeCategory>,
    operations: Option<String>,
    output: Option<PathBuf>,
    no_charts: bool,
}

/// @ai:intent Apply CLI overrides on top of the loaded configuration
/// @ai:effects pure
fn apply_overrides(config: &mut BenchmarkConfig, args: RunArgs) -> Result<()> {
    if let Some(source) = args.source {
        config.paths.source_file = source;
    }
    if let Some(repeat) = args.repeat {
        config.run.repeat_count = repeat;
    }
    if args.seed.is_some() {
        config.run.seed = args.seed;
    }
    if args.category.is_some() {
        config.run.category = args.category;
    }
    if let Some(operations) = args.operations {
        config.run.operations = parse_operations(&operations)?;
    }
    if let Some(output) = args.output {
        config.paths.results_dir = output;
    }
    if args.no_charts {
        config.report.charts = false;
    }
    Ok(())
}

/// @ai:intent Run the benchmark and write every enabled report
/// @ai:effects fs:read, fs:write, time
fn run_benchmarks(args: RunArgs) -> Result<()> {
    let mut config = BenchmarkConfig::resolve(args.config.as_deref())?;
    apply_overrides(&mut config, args)?;
    config.validate()?;

    HostInfo::detect().log();

    let registry = ContainerRegistry::with_builtins();
    let results = run_benchmark(&config, &registry)?;

    let output_dir = ReportGenerator::timestamped_dir(&config.paths.results_dir);
    tracing::info!("Output directory: {}", output_dir.display());
    ReportGenerator::from_config(&config.report).generate_all(&results, &output_dir)?;

    print_summary(&results);
    Ok(())
}

/// @ai:intent Generate reports from existing results
/// @ai:effects fs:read, fs:write
fn generate_reports(results_path: PathBuf, output_dir: Option<PathBuf>) -> Result<()> {
    let results = JsonReporter::load(&results_path)?;
    let output_dir = output_dir
        .or_else(|| results_path.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    ReportGenerator::new().generate_all(&results, &output_dir)?;

    println!("Reports generated in {}", output_dir.display());
    Ok(())
}

/// @ai:intent Write the default configuration
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = BenchmarkConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Print per-category lexeme counts
/// @ai:effects fs:read
fn classify_source(path: PathBuf, category: Option<LexemeCategory>) -> Result<()> {
    let source = SourceLoader::new().load(&path)?;
    let tokens = source
        .classify(CategorySelection::from(category))
        .with_context(|| format!("Failed to classify {}", path.display()))?;

    println!("{} ({} file(s))", path.display(), source.files.len());
    println!("{}", "-".repeat(30));
    for (category, lexemes) in tokens.iter() {
        println!("{:<15} {:>10}", format!("{}:", category), lexemes.len());
    }
    println!("{:<15} {:>10}", "Total:", tokens.total());
    Ok(())
}

fn print_summary(results: &BenchmarkResults) {
    println!();
    println!("Container Benchmark Results");
    println!("===========================");
    println!();
    println!(
        "Seeded lexemes: {}, workload calls: {}, seed: {}",
        results.seeded_lexemes,
        results.workload_calls,
        results
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
    );
    println!();

    println!(
        "{:<15} {:<10} {:>8} {:>8} {:>14} {:>30}",
        "Container", "Operation", "Count", "Misses", "Mean (ns)", "95% CI (ns)"
    );
    println!("{}", "-".repeat(90));

    for kind in &results.containers {
        for operation in OperationKind::ALL {
            let Some(summary) = results.summary(kind, operation) else {
                continue;
            };
            println!(
                "{:<15} {:<10} {:>8} {:>8} {:>14.2} {:>30}",
                kind.as_str(),
                operation.label(),
                summary.count,
                summary.misses,
                summary.mean_ns,
                format!("[{:.2}, {:.2}]", summary.ci_lower_ns, summary.ci_upper_ns)
            );
        }
    }
    println!();
}
