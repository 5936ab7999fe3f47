use std::path::PathBuf;

use crate::backend::Backend;
use crate::error::{validation_error, Result};
use crate::{ITERATIONS, TEST_SIZES};

/// Parameters of one driver run.
///
/// The binaries always use [`BenchConfig::for_backend`]; the setters exist
/// so tests can shrink a run or redirect its output.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Input sizes, benchmarked and reported in this order
    pub sizes: Vec<usize>,

    /// Timed passes per operation and size
    pub iterations: usize,

    /// Results file, created or truncated at the start of the run
    pub output: PathBuf,
}

impl BenchConfig {
    /// Compiled-in sizes and iteration count, writing to `B`'s default file.
    pub fn for_backend<B: Backend>() -> Self {
        Self {
            sizes: TEST_SIZES.to_vec(),
            iterations: ITERATIONS,
            output: PathBuf::from(B::OUTPUT_FILE),
        }
    }

    /// Set the input sizes
    pub fn sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Set the iteration count
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the results file path
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(validation_error("iteration count must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Simd, Sisd};

    #[test]
    fn test_defaults_per_backend() {
        let sisd = BenchConfig::for_backend::<Sisd>();
        assert_eq!(sisd.sizes, vec![2048, 4096, 8192]);
        assert_eq!(sisd.iterations, 10);
        assert_eq!(sisd.output, PathBuf::from("sisd_wyniki.txt"));

        let simd = BenchConfig::for_backend::<Simd>();
        assert_eq!(simd.sizes, sisd.sizes);
        assert_eq!(simd.output, PathBuf::from("simd_wyniki_asm.txt"));
    }

    #[test]
    fn test_builder_setters() {
        let config = BenchConfig::for_backend::<Sisd>()
            .sizes([4, 8])
            .iterations(1)
            .output("/tmp/out.txt");

        assert_eq!(config.sizes, vec![4, 8]);
        assert_eq!(config.iterations, 1);
        assert_eq!(config.output, PathBuf::from("/tmp/out.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = BenchConfig::for_backend::<Simd>().iterations(0);
        assert!(config.validate().is_err());
    }
}
