//! Correctness tests: both strategies decode caller text identically

use tapewalk::*;
use test_helpers::*;

#[test]
fn test_hello() {
    let report = default_harness().decode_interactive(b"IFMMP").unwrap();

    assert_eq!(report.input_len, 5);
    assert_eq!(report.iterative.output, b"HELLO");
    let recursive = report
        .recursive
        .completed()
        .expect("five frames fit any budget");
    assert_eq!(recursive.output, b"HELLO");
}

#[test]
fn test_empty_input() {
    let report = default_harness().decode_interactive(b"").unwrap();

    assert_eq!(report.input_len, 0);
    assert!(report.iterative.output.is_empty());
    let recursive = report.recursive.completed().expect("no frames needed");
    assert!(recursive.output.is_empty());
}

#[test]
fn test_mixed_case_and_non_letters() {
    let report = default_harness().decode_interactive(b"Ab1").unwrap();
    assert_eq!(report.iterative.output, b"Za1");
    assert_eq!(report.recursive.completed().unwrap().output, b"Za1");

    let report = default_harness()
        .decode_interactive(b"Uif Rvjdl, 42 cspxo gpyft!")
        .unwrap();
    assert_eq!(report.iterative.output_text(), "The Quick, 42 brown foxes!");
    assert_eq!(
        report.recursive.completed().unwrap().output_text(),
        "The Quick, 42 brown foxes!"
    );
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let input = [0xFF, b'b', 0x00, b'B', 0x80];
    let report = default_harness().decode_interactive(&input).unwrap();
    assert_eq!(report.iterative.output, [0xFF, b'a', 0x00, b'A', 0x80]);
    assert_eq!(
        report.recursive.completed().unwrap().output,
        report.iterative.output
    );
}

#[test]
fn test_one_past_interactive_ceiling_is_skipped() {
    let harness = default_harness();
    let ceiling = harness.config().interactive_ceiling;
    let input = vec![b'B'; ceiling + 1];

    let report = harness.decode_interactive(&input).unwrap();

    assert_eq!(report.iterative.output, vec![b'A'; ceiling + 1]);
    assert_eq!(
        report.recursive,
        RecursiveOutcome::Skipped {
            reason: SkipReason::TooLongForInteractive {
                len: ceiling + 1,
                ceiling,
            }
        }
    );
}

#[test]
fn test_at_interactive_ceiling_is_attempted() {
    let harness = default_harness();
    let ceiling = harness.config().interactive_ceiling;
    let input = vec![b'b'; ceiling];

    let report = harness.decode_interactive(&input).unwrap();

    let recursive = report
        .recursive
        .completed()
        .expect("default budget covers the interactive ceiling");
    assert_eq!(recursive.output, report.iterative.output);
}

#[test]
fn test_overflow_under_ceiling_reports_no_output() {
    // Ceiling allows the attempt, budget does not
    let harness = harness_with_ceilings(1_000, 10_000, 100);
    let input = vec![b'z'; 500];

    let report = harness.decode_interactive(&input).unwrap();

    assert_eq!(report.iterative.output, vec![b'y'; 500]);
    assert_eq!(
        report.recursive,
        RecursiveOutcome::StackOverflow {
            depth: 101,
            limit: 100
        }
    );
    assert!(report.recursive.completed().is_none());
}

#[test]
fn test_requests_are_independent() {
    let harness = harness_with_depth(50);
    let overflowed = harness.decode_interactive(&[b'c'; 60]).unwrap();
    let fine = harness.decode_interactive(b"Jepm").unwrap();

    assert!(overflowed.recursive.is_stack_overflow());
    assert_eq!(fine.recursive.completed().unwrap().output, b"Idol");
}
