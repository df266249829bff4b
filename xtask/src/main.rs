use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "pointgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH_TARGET: &str = "graph_benchmark";
const BASELINE_IMPL: &str = "petgraph";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// `new/benchmark.json` as written by criterion.
#[derive(Debug, Deserialize)]
struct BenchmarkRecord {
    group_id: String,
    #[serde(default)]
    function_id: Option<String>,
    #[serde(default)]
    value_str: Option<String>,
    /// Externally tagged, e.g. `{"Elements": 1024}`; only element counts are reported.
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

/// `new/estimates.json` as written by criterion; times are in nanoseconds.
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// One measured benchmark.
#[derive(Debug)]
struct Measurement {
    mean_ns: f64,
    elements: Option<u64>,
}

/// Rows keyed by `group/parameter`, columns keyed by implementation.
type Results = BTreeMap<String, BTreeMap<String, Measurement>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH_TARGET, "--release"])
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    let start = Instant::now();
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH_TARGET]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to run bench target {BENCH_TARGET}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished benchmarks in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    for dir in measurement_dirs(criterion_dir)? {
        match read_measurement(&dir) {
            Ok((row, column, measurement)) => {
                results.entry(row).or_default().insert(column, measurement);
            }
            Err(err) => eprintln!("Skipping {}: {err:#}", dir.display()),
        }
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Every `.../new` directory holding a criterion estimate.
fn measurement_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))? {
            let path = entry?.path();
            if !path.is_dir() || path.file_name().is_some_and(|n| n == "report") {
                continue;
            }
            if path.file_name().is_some_and(|n| n == "new") && path.join("estimates.json").is_file() {
                found.push(path);
            } else {
                pending.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

fn read_measurement(dir: &Path) -> Result<(String, String, Measurement)> {
    let record: BenchmarkRecord = read_json(&dir.join("benchmark.json"))?;
    let estimates: Estimates = read_json(&dir.join("estimates.json"))?;

    let (row, column) = match (record.function_id, record.value_str) {
        (Some(function), Some(value)) => (format!("{}/{}", record.group_id, value), function),
        (Some(function), None) => (record.group_id, function),
        (None, _) => (record.group_id, "pointgraph".to_owned()),
    };
    let elements = record
        .throughput
        .as_ref()
        .and_then(|t| t.get("Elements"))
        .and_then(serde_json::Value::as_u64);

    Ok((row, column, Measurement { mean_ns: estimates.mean.point_estimate, elements }))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    writeln!(out, "# pointgraph Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "| Benchmark | Implementation | Mean | Throughput | vs {BASELINE_IMPL} |")?;
    writeln!(out, "|---|---|---|---|---|")?;

    for (row, columns) in results {
        let baseline = columns.get(BASELINE_IMPL).map(|m| m.mean_ns);
        for (column, m) in columns {
            let relative = match baseline {
                Some(base) if m.mean_ns > 0.0 && column != BASELINE_IMPL => format!("**{:.2}x**", base / m.mean_ns),
                _ => "-".to_owned(),
            };
            writeln!(
                out,
                "| {row} | {column} | {} | {} | {relative} |",
                format_time(m.mean_ns),
                m.elements.map_or_else(|| "-".to_owned(), |n| format_rate(n as f64 * 1e9 / m.mean_ns)),
            )?;
        }
    }
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(per_sec: f64) -> String {
    if per_sec > 1_000_000.0 {
        format!("{:.2}M elem/s", per_sec / 1_000_000.0)
    } else if per_sec > 1_000.0 {
        format!("{:.2}K elem/s", per_sec / 1_000.0)
    } else {
        format!("{per_sec:.0} elem/s")
    }
}
