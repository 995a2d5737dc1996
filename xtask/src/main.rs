use anyhow::{bail, Context, Result};
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
#[command(about = "classic-dsa workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion suites and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Run only this bench target (default: all of them)
        #[arg(long)]
        bench: Option<String>,

        /// Where to write the report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

const BENCHES: &[&str] = &["graph_benchmark", "collections_benchmark"];

/// The part of criterion's `estimates.json` the report needs.
#[derive(Debug, Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    /// Nanoseconds per iteration.
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            bench,
            output,
        } => {
            if !report_only {
                let targets: Vec<&str> = match bench.as_deref() {
                    Some(name) if BENCHES.contains(&name) => vec![name],
                    Some(name) => bail!("unknown bench target `{name}`; expected one of {BENCHES:?}"),
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick)?;
            }
            generate_report(Path::new("target/criterion"), &output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool) -> Result<()> {
    for target in targets {
        println!("\n>>> Benchmarking {target}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", target]);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run bench {target}"))?;
        if !status.success() {
            bail!("bench {target} failed with {status}");
        }
        println!("Finished {target} in {:.2?}", start.elapsed());
    }

    Ok(())
}

/// Mean nanoseconds per iteration, keyed by group then by benchmark id.
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report(criterion_dir: &Path, report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    for (group, benches) in &results {
        let fastest = benches.values().copied().fold(f64::INFINITY, f64::min);

        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Benchmark | Mean | vs fastest |")?;
        writeln!(file, "|---|---|---|")?;
        for (id, &mean_ns) in benches {
            writeln!(
                file,
                "| {id} | {} | **{:.2}x** |",
                format_time(mean_ns),
                mean_ns / fastest
            )?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Walks criterion's output, reading every `<group>/<id...>/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(root, &path, results)?;
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(relative) = bench_dir.strip_prefix(root) else { continue };

        let mut parts = relative.iter().filter_map(|p| p.to_str());
        let Some(group) = parts.next() else { continue };
        let id = parts.collect::<Vec<_>>().join("/");
        if id.is_empty() {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;
        results
            .entry(group.to_string())
            .or_default()
            .insert(id, estimates.mean.point_estimate);
    }
    Ok(())
}
