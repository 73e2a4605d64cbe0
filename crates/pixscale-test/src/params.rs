//! Regression test parameters and operations

use pixscale_core::Raster;
use std::fmt::Debug;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status. Comparisons never
/// panic; they record a failure and the test asserts on [`cleanup`]
/// at the end, so one run reports every mismatch at once.
///
/// [`cleanup`]: RegParams::cleanup
pub struct RegParams {
    /// Name of the test (e.g., "hqx")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "hqx")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    ///
    /// # Arguments
    ///
    /// * `condition` - Result of the check
    /// * `what` - Short description used in the failure message
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            ));
        }
        condition
    }

    /// Compare two rasters for exact equality
    ///
    /// Dimensions are compared first, then pixels in row-major order; the
    /// first differing pixel is reported.
    pub fn compare_rasters<S: Copy + PartialEq + Debug>(
        &mut self,
        expected: &Raster<S>,
        actual: &Raster<S>,
    ) -> bool {
        self.index += 1;

        if expected.size() != actual.size() {
            self.fail(format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch \
                 {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.size(),
                actual.size()
            ));
            return false;
        }

        for y in 0..expected.height() {
            let (re, ra) = (expected.row(y), actual.row(y));
            if let Some(x) = (0..re.len()).find(|&x| re[x] != ra[x]) {
                self.fail(format!(
                    "Failure in {}_reg: raster comparison for index {} - pixel mismatch at \
                     ({}, {}): expected {:?}, got {:?}",
                    self.test_name, self.index, x, y, re[x], ra[x]
                ));
                return false;
            }
        }

        true
    }

    /// Compare two slices element by element
    pub fn compare_slices<T: PartialEq + Debug>(&mut self, expected: &[T], actual: &[T]) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: slice comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
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

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
