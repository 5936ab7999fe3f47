use std::process::ExitCode;

use simdbench::{driver, BenchConfig, Sisd};

fn main() -> ExitCode {
    env_logger::init();

    let config = BenchConfig::for_backend::<Sisd>();

    match driver::run::<Sisd>(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
