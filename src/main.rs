use std::io::Read;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tapewalk::harness::{BenchmarkReport, DecodeReport, Measured};
use tapewalk::util::{group_thousands, magnitude_label};
use tapewalk::{Harness, HarnessConfig, RecursiveOutcome, StackBudget};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tapewalk",
    version,
    about = "Caesar decoder comparing iterative and recursive tape traversal"
)]
struct Cli {
    #[command(flatten)]
    tuning: Tuning,

    /// Print reports as JSON
    #[cfg(feature = "json")]
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Tuning {
    /// Longest interactive input for which recursion is attempted.
    #[arg(long, global = true, default_value_t = tapewalk::harness::DEFAULT_INTERACTIVE_CEILING)]
    interactive_ceiling: usize,
    /// Largest benchmark size for which recursion is attempted.
    #[arg(long, global = true, default_value_t = tapewalk::harness::DEFAULT_BENCHMARK_CEILING)]
    benchmark_ceiling: usize,
    /// Worker stack for the recursive strategy, in MiB.
    #[arg(long, global = true, default_value_t = 64)]
    stack_mib: usize,
    /// Estimated bytes per recursive frame (at least 512).
    #[arg(long, global = true, default_value_t = tapewalk::space::DEFAULT_FRAME_BYTES)]
    frame_bytes: usize,
}

impl Tuning {
    fn into_config(self) -> HarnessConfig {
        let stack = StackBudget::with_stack_bytes(self.stack_mib.saturating_mul(1024 * 1024))
            .frame_bytes(self.frame_bytes);
        HarnessConfig::default()
            .with_interactive_ceiling(self.interactive_ceiling)
            .with_benchmark_ceiling(self.benchmark_ceiling)
            .with_stack(stack)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode text with both strategies.
    Decode {
        /// Cipher text (read from stdin when omitted).
        text: Option<String>,
    },
    /// Benchmark both strategies on one synthetic tape.
    Bench {
        /// Tape length.
        size: usize,
    },
    /// Benchmark every size of the ladder, smallest first.
    Ladder {
        /// Stop after the first size at or above this value.
        #[arg(long)]
        up_to: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tapewalk=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    #[cfg(feature = "json")]
    let json = cli.json;
    #[cfg(not(feature = "json"))]
    let json = false;

    let harness = Harness::new(cli.tuning.into_config()).context("invalid tuning")?;

    match cli.command {
        Commands::Decode { text } => run_decode(&harness, text, json)?,
        Commands::Bench { size } => run_bench(&harness, size, json)?,
        Commands::Ladder { up_to } => run_ladder(&harness, up_to, json)?,
    }

    Ok(())
}

fn run_decode(harness: &Harness, text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text.into_bytes(),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read cipher text from stdin")?;
            // Trailing newline is terminal input, not cipher text
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            buf
        }
    };

    let report = harness
        .decode_interactive(&text)
        .context("decode failed")?;
    if json {
        return print_json(&report);
    }
    print_decode(&report);
    Ok(())
}

fn run_bench(harness: &Harness, size: usize, json: bool) -> Result<()> {
    let report = harness
        .benchmark_size(size)
        .with_context(|| format!("benchmark failed for size {}", size))?;
    if json {
        return print_json(&report);
    }
    print_bench_header();
    print_bench_row(&report);
    Ok(())
}

fn run_ladder(harness: &Harness, up_to: Option<usize>, json: bool) -> Result<()> {
    if !json {
        print_bench_header();
    }
    // One size at a time: concurrent runs would skew timings
    for &size in harness.ladder() {
        let report = harness
            .benchmark_size(size)
            .with_context(|| format!("benchmark failed for size {}", size))?;
        if json {
            print_json(&report)?;
        } else {
            print_bench_row(&report);
        }
        if up_to.is_some_and(|limit| size >= limit) {
            break;
        }
    }
    Ok(())
}

fn print_decode(report: &DecodeReport) {
    println!(
        "iterative\t{:.3} ms\t{}",
        report.iterative.elapsed_ms(),
        report.iterative.output_text()
    );
    match &report.recursive {
        RecursiveOutcome::Completed(run) => {
            println!("recursive\t{:.3} ms\t{}", run.elapsed_ms(), run.output_text())
        }
        RecursiveOutcome::Skipped { reason } => println!("recursive\tSKIPPED\t{}", reason),
        RecursiveOutcome::StackOverflow { depth, limit } => println!(
            "recursive\tFAILED\tstack overflow at depth {} (budget {})",
            depth, limit
        ),
    }
}

fn print_bench_header() {
    println!(
        "{:>6} | {:>13} | {:>14} | {:>14}",
        "size", "cells", "iterative", "recursive"
    );
    println!("{}", "-".repeat(56));
}

fn print_bench_row(report: &BenchmarkReport) {
    println!(
        "{:>6} | {:>13} | {:>14} | {:>14}",
        magnitude_label(report.size),
        group_thousands(report.size),
        format_ms(&report.iterative),
        recursive_cell(&report.recursive)
    );
    if report.outputs_agree() == Some(false) {
        tracing::error!(size = report.size, "strategies produced different tapes");
    }
}

fn recursive_cell(outcome: &RecursiveOutcome<Measured>) -> String {
    match outcome {
        RecursiveOutcome::Completed(run) => format_ms(run),
        RecursiveOutcome::Skipped { .. } => "Skipped (Too Big)".to_string(),
        RecursiveOutcome::StackOverflow { .. } => "Stack Overflow".to_string(),
    }
}

fn format_ms(run: &Measured) -> String {
    format!("{:.3} ms", run.elapsed_ms())
}

#[cfg(feature = "json")]
fn print_json<T: serde::Serialize>(report: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(report).context("failed to encode report")?
    );
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json<T>(_report: &T) -> Result<()> {
    anyhow::bail!("JSON output requires the `json` feature")
}
