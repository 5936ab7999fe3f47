//! End-to-end runs of both backends.

mod common;

use std::fs;

use common::{parse_blocks, ScriptedStopwatch};
use simdbench::error::BenchError;
use simdbench::generator::seeded_rng;
use simdbench::{driver, BenchConfig, Simd, Sisd, TEST_SIZES};
use tempfile::tempdir;

fn check_full_run(text: &str, label: &str) {
    let blocks = parse_blocks(text);
    assert_eq!(blocks.len(), 3);

    for (block, expected_count) in blocks.iter().zip(TEST_SIZES) {
        assert_eq!(block.label, label);
        assert_eq!(block.count, expected_count);

        let symbols: String = block.timings.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols, "+-*/");
        assert!(block.timings.iter().all(|&(_, t)| t >= 0.0));
    }
}

/// Test a full SISD run writes one block per size.
#[test]
fn test_sisd_full_run_writes_three_blocks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sisd_wyniki.txt");

    let config = BenchConfig::for_backend::<Sisd>().output(&path);
    driver::run::<Sisd>(&config).unwrap();

    check_full_run(&fs::read_to_string(&path).unwrap(), "SISD");
}

/// Test a full SIMD run writes one block per size.
#[test]
fn test_simd_full_run_writes_three_blocks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("simd_wyniki_asm.txt");

    let config = BenchConfig::for_backend::<Simd>().output(&path);
    driver::run::<Simd>(&config).unwrap();

    check_full_run(&fs::read_to_string(&path).unwrap(), "SIMD");
}

/// Test that an earlier results file is overwritten.
#[test]
fn test_existing_file_is_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "stale contents from an earlier run\n".repeat(100)).unwrap();

    let config = BenchConfig::for_backend::<Sisd>()
        .sizes([8])
        .iterations(1)
        .output(&path);
    driver::run::<Sisd>(&config).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(parse_blocks(&text).len(), 1);
}

/// Test the error returned when the output cannot be created.
#[test]
fn test_unopenable_output_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("wyniki.txt");

    let config = BenchConfig::for_backend::<Simd>().output(&path);
    let err = driver::run::<Simd>(&config).unwrap_err();

    match err {
        BenchError::OutputFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OutputFile error, got {other:?}"),
    }
}

/// Test that blocks follow the configured size order.
#[test]
fn test_run_with_writes_sizes_in_order() {
    let config = BenchConfig::for_backend::<Simd>().sizes([4, 16, 8]).iterations(2);
    let mut stopwatch = ScriptedStopwatch::new((0..24).map(|i| i as f64));
    let mut out = Vec::new();

    driver::run_with::<Simd, _, _, _>(&config, &mut out, &mut seeded_rng(9), &mut stopwatch)
        .unwrap();

    let blocks = parse_blocks(&String::from_utf8(out).unwrap());
    let counts: Vec<usize> = blocks.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![4, 16, 8]);

    // first size: samples 0..8, add gets 0 and 4
    assert_eq!(blocks[0].timings[0], ('+', 2.0));
    assert_eq!(blocks[0].timings[3], ('/', 5.0));
    assert_eq!(stopwatch.calls, 24);
}

/// Test that config validation runs before the file is touched.
#[test]
fn test_zero_iterations_fails_before_creating_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.txt");

    let config = BenchConfig::for_backend::<Sisd>().iterations(0).output(&path);
    let err = driver::run::<Sisd>(&config).unwrap_err();

    assert!(matches!(err, BenchError::ValidationError { .. }));
    assert!(!path.exists());
}
