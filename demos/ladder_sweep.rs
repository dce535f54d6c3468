//! Ladder Sweep: iterative vs recursive scaling
//!
//! Runs the single-size benchmark over the default ladder, one size at a
//! time, and prints a scaling table. Stops at the first size given on the
//! command line (default: 10 million) to keep the run short.
//!
//! ```text
//! cargo run --release --example ladder_sweep -- 100000000
//! ```

use tapewalk::harness::RecursiveOutcome;
use tapewalk::util::{group_thousands, magnitude_label};
use tapewalk::{Harness, HarnessConfig};

fn main() -> anyhow::Result<()> {
    let up_to: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 10_000_000,
    };

    let harness = Harness::new(HarnessConfig::default())?;
    println!("Ladder Sweep (recursion budget: {} frames)", group_thousands(harness.config().stack.max_depth()));
    println!("=================================================\n");
    println!(
        "{:>6} | {:>12} | {:>12} | {:>10}",
        "size", "iter (ms)", "rec (ms)", "ns/cell"
    );
    println!("{}", "-".repeat(50));

    let mut previous: Option<(usize, f64)> = None;
    for &size in harness.ladder().iter().take_while(|&&size| size <= up_to) {
        let report = harness.benchmark_size(size)?;
        let iter_ms = report.iterative.elapsed_ms();
        let rec = match &report.recursive {
            RecursiveOutcome::Completed(run) => format!("{:.3}", run.elapsed_ms()),
            RecursiveOutcome::Skipped { .. } => "skipped".to_string(),
            RecursiveOutcome::StackOverflow { .. } => "overflow".to_string(),
        };
        println!(
            "{:>6} | {:>12.3} | {:>12} | {:>10.2}",
            magnitude_label(size),
            iter_ms,
            rec,
            iter_ms * 1e6 / size as f64
        );

        if let Some((prev_size, prev_ms)) = previous {
            if prev_ms > 0.0 {
                let growth = (iter_ms / prev_ms) / (size as f64 / prev_size as f64);
                if growth > 2.0 {
                    println!("       iterative time grew {:.1}x faster than size", growth);
                }
            }
        }
        previous = Some((size, iter_ms));
    }

    Ok(())
}
