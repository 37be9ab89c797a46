//! planescale-test - Regression test framework for planescale
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use planescale_test::RegParams;
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_planes(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod dump;
mod error;
pub mod synth;
mod params;
pub mod reference;

pub use dump::{read_plane_png, write_plane_png};
pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Route `log` output through the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // planescale-test is at crates/planescale-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
