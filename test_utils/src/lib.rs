//! Utility helpers for tests.
pub mod log_capture;
pub mod sampling;

/// Assert that `observed` lies within `tolerance` of `expected`.
///
/// # Panics
/// Panics with both values and the label when the check fails.
pub fn assert_near(label: &str, observed: f64, expected: f64, tolerance: f64) {
    assert!(
        (observed - expected).abs() <= tolerance,
        "{label}: observed {observed:.4}, expected {expected:.4} ± {tolerance}"
    );
}
