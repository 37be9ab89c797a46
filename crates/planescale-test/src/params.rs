//! Regression test parameters and operations

use crate::dump::{read_plane_png, write_plane_png};
use crate::error::TestResult;
use crate::{golden_dir, regout_dir};
use planescale_core::{Plane, Sample};
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and every
/// recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create regression test parameters configured from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two values, allowing a difference of at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two planes for exact equality (padding ignored).
    pub fn compare_planes<T: Sample>(&mut self, expected: &Plane<T>, actual: &Plane<T>) -> bool {
        self.compare_planes_within(expected, actual, 0)
    }

    /// Compare two planes allowing a per-sample difference of `max_diff`.
    pub fn compare_planes_within<T: Sample>(
        &mut self,
        expected: &Plane<T>,
        actual: &Plane<T>,
        max_diff: u32,
    ) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            let msg = format!(
                "Failure in {}_reg: plane comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() {
            let (e, a) = (expected.row(y), actual.row(y));
            if let Some(x) = (0..e.len()).find(|&x| e[x].to_u32().abs_diff(a[x].to_u32()) > max_diff)
            {
                let msg = format!(
                    "Failure in {}_reg: plane comparison for index {} - sample mismatch at \
                     ({}, {}): expected {:?}, got {:?}",
                    self.test_name, self.index, x, y, e[x], a[x]
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Compare two sample slices for exact equality.
    pub fn compare_samples<T: Sample>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: sample comparison for index {}\n\
                 expected {:?}\n\
                 actual   {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Dump a plane as PNG and check it against its golden counterpart.
    pub fn write_plane_and_check<T: Sample>(&mut self, plane: &Plane<T>) -> TestResult<()> {
        self.index += 1;

        let local_path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        write_plane_png(plane, &local_path)?;
        self.check_plane_file::<T>(&local_path)
    }

    /// Write raw data and check it against its golden counterpart.
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        );
        fs::write(&local_path, data)?;
        self.check_file(&local_path, |a, b| fs::read(a).ok() == fs::read(b).ok())
    }

    fn check_plane_file<T: Sample>(&mut self, local_path: &str) -> TestResult<()> {
        self.check_file(local_path, |a, b| {
            match (read_plane_png::<T>(a), read_plane_png::<T>(b)) {
                (Ok(pa), Ok(pb)) => pa == pb,
                _ => false,
            }
        })
    }

    /// Check a file against its golden counterpart.
    ///
    /// Generate mode copies the file to the golden directory. Compare mode
    /// runs `same` when the bytes differ. A missing golden file is logged
    /// and skipped.
    fn check_file(&mut self, local_path: &str, same: impl Fn(&str, &str) -> bool) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    log::warn!(
                        "{}_reg index {}: no golden file at {}, skipping",
                        self.test_name,
                        self.index,
                        golden_path
                    );
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;
                if local_data != golden_data && !same(local_path, &golden_path) {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Report results; `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_planes_within() {
        let mut rp = RegParams::new("params_planes");
        let a = Plane::<u8>::from_fn(3, 2, |x, y| (x + y) as u8).unwrap();
        let b = Plane::<u8>::from_fn(3, 2, |x, y| (x + y + 1) as u8).unwrap();
        assert!(rp.compare_planes(&a, &a.clone()));
        assert!(rp.compare_planes_within(&a, &b, 1));
        assert!(!rp.compare_planes(&a, &b));
        assert_eq!(rp.index(), 3);
    }
}
