//! Benchmark harness tests: ceilings, overflow classification, digests

use std::time::Duration;
use tapewalk::harness::{OutputDigest, BENCHMARK_LADDER, DEFAULT_BENCHMARK_CEILING};
use tapewalk::*;
use test_helpers::*;

#[test]
fn test_small_size_both_complete() {
    let report = default_harness().benchmark_size(1_000).unwrap();

    assert_eq!(report.size, 1_000);
    assert_eq!(report.iterative.digest, OutputDigest::of(&decoded_pattern(1_000)));
    assert_eq!(report.outputs_agree(), Some(true));
}

#[test]
fn test_million_overflows_default_budget() {
    let harness = default_harness();
    assert!(1_000_000 <= harness.config().benchmark_ceiling);
    assert!(!harness.config().stack.fits(1_000_000));

    let report = harness.benchmark_size(1_000_000).unwrap();

    assert!(report.iterative.elapsed > Duration::ZERO);
    assert_eq!(
        report.iterative.digest,
        OutputDigest::of(&decoded_pattern(1_000_000))
    );
    let limit = harness.config().stack.max_depth();
    assert_eq!(
        report.recursive,
        RecursiveOutcome::StackOverflow {
            depth: limit + 1,
            limit
        }
    );
    assert_eq!(report.outputs_agree(), None);
}

#[test]
fn test_above_ceiling_is_skipped_not_attempted() {
    // Budget is large enough that an attempt would succeed; it must not happen
    let harness = harness_with_ceilings(10, 100, 1_000);

    for size in [101, 500, 1_000] {
        let report = harness.benchmark_size(size).unwrap();
        assert_eq!(
            report.recursive,
            RecursiveOutcome::Skipped {
                reason: SkipReason::TooLargeForBenchmark { size, ceiling: 100 }
            },
            "size {}",
            size
        );
    }
}

#[test]
fn test_ceiling_is_inclusive() {
    let harness = harness_with_ceilings(10, 100, 1_000);
    let report = harness.benchmark_size(100).unwrap();
    assert_eq!(report.outputs_agree(), Some(true));
}

#[test]
fn test_budget_boundary() {
    let harness = harness_with_depth(4_096);

    let fits = harness.benchmark_size(4_096).unwrap();
    assert!(fits.recursive.is_completed());

    let overflows = harness.benchmark_size(4_097).unwrap();
    assert_eq!(
        overflows.recursive,
        RecursiveOutcome::StackOverflow {
            depth: 4_097,
            limit: 4_096
        }
    );
}

#[test]
fn test_zero_size_rejected() {
    let err = default_harness().benchmark_size(0).unwrap_err();
    assert!(matches!(err, HarnessError::EmptyBenchmark));
}

#[test]
fn test_ladder_defaults() {
    let harness = default_harness();
    assert_eq!(harness.ladder(), &BENCHMARK_LADDER);
    assert!(BENCHMARK_LADDER.windows(2).all(|pair| pair[0] < pair[1]));

    // Sizes past the benchmark ceiling are exactly the ones the driver will see skipped
    let skipped: Vec<usize> = BENCHMARK_LADDER
        .iter()
        .copied()
        .filter(|&size| size > DEFAULT_BENCHMARK_CEILING)
        .collect();
    assert_eq!(skipped, vec![50_000_000, 100_000_000]);
}

#[test]
fn test_ladder_prefix_sequential() {
    let harness = harness_with_depth(20_000);
    let reports: Vec<BenchmarkReport> = harness
        .ladder()
        .iter()
        .take_while(|&&size| size <= 50_000)
        .map(|&size| harness.benchmark_size(size).unwrap())
        .collect();

    let sizes: Vec<usize> = reports.iter().map(|report| report.size).collect();
    assert_eq!(sizes, vec![100, 1_000, 5_000, 10_000, 50_000]);
    for report in &reports[..4] {
        assert_eq!(report.outputs_agree(), Some(true), "size {}", report.size);
    }
    assert!(reports[4].recursive.is_stack_overflow());
}
