//! pixscale-test - Regression test framework for pixscale
//!
//! This crate provides the helpers shared by every `*_reg.rs` test in the
//! workspace:
//!
//! - [`RegParams`] - indexed comparisons with a pass/fail summary
//! - [`fixtures`] - synthetic source images (solid fields, checkerboards,
//!   lines, seeded palette noise) so no image files are needed
//!
//! # Usage
//!
//! ```ignore
//! use pixscale_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("epx");
//! let src = fixtures::solid(4, 4, 0xff0000ff).unwrap();
//! rp.compare_values(16.0, src.pixels().count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;
