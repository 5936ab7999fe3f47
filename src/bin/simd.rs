use std::process::ExitCode;

use simdbench::{driver, BenchConfig, Simd};

fn main() -> ExitCode {
    env_logger::init();

    let config = BenchConfig::for_backend::<Simd>();

    match driver::run::<Simd>(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
