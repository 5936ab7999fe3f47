#![allow(dead_code)]

use std::collections::VecDeque;

use simdbench::harness::Stopwatch;

/// Stopwatch that runs the closure but reports pre-recorded times.
pub struct ScriptedStopwatch {
    script: VecDeque<f64>,
    pub calls: usize,
}

impl ScriptedStopwatch {
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Stopwatch for ScriptedStopwatch {
    fn measure<F: FnOnce()>(&mut self, f: F) -> f64 {
        f();
        self.calls += 1;
        self.script.pop_front().expect("stopwatch script exhausted")
    }
}

/// One parsed report block.
#[derive(Debug)]
pub struct Block {
    pub label: String,
    pub count: usize,
    pub timings: Vec<(char, f64)>,
}

/// Parses the text written by `write_report`, panicking on any line that
/// does not follow the block layout.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    assert!(text.ends_with("\n\n"), "output must end with a blank line");

    text.split_terminator("\n\n")
        .map(|chunk| {
            let lines: Vec<&str> = chunk.lines().collect();
            assert_eq!(lines.len(), 7, "unexpected block layout: {chunk:?}");

            let label = lines[0]
                .strip_prefix("Typ obliczen: ")
                .expect("label line")
                .to_string();
            let count = lines[1]
                .strip_prefix("Liczba liczb: ")
                .expect("count line")
                .parse()
                .expect("count value");
            assert_eq!(lines[2], "Sredni czas [ms]:");

            let timings = lines[3..]
                .iter()
                .map(|line| {
                    let (symbol, value) = line.split_once(' ').expect("timing line");
                    let decimals = value.split_once('.').map(|(_, d)| d.len());
                    assert_eq!(decimals, Some(6), "six decimals expected in {line:?}");
                    (
                        symbol.chars().next().expect("symbol"),
                        value.parse().expect("timing value"),
                    )
                })
                .collect();

            Block {
                label,
                count,
                timings,
            }
        })
        .collect()
}

/// Bitwise equality that also treats any two NaNs as equal.
pub fn same_float(a: f32, b: f32) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}
