//! Frequency-domain smoothing by spectral magnitude thresholding.
//!
//! The series is mirrored onto itself (`x ++ reverse(x)`) before the forward
//! transform so the implicit periodic extension has no jump at the seam. Bins
//! whose magnitude, normalized by the padded length, falls below the threshold
//! are zeroed; the inverse transform's real part, truncated to the input
//! length, is the smoothed series.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Smooth `series`, keeping only spectral bins with normalized magnitude
/// `>= threshold`.
///
/// The output always has the input's length. A threshold of 0 keeps every
/// bin and reproduces the input up to rounding; a threshold above every bin
/// magnitude yields all zeros. `threshold` must be non-negative.
pub fn smooth_spectrum(series: &[f64], threshold: f64) -> Vec<f64> {
    debug_assert!(threshold >= 0.0, "negative spectral threshold {threshold}");
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    let padded_len = 2 * n;
    let mut buffer: Vec<Complex<f64>> = series
        .iter()
        .chain(series.iter().rev())
        .map(|&v| Complex::new(v, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(padded_len).process(&mut buffer);

    let norm = padded_len as f64;
    let mut kept = 0usize;
    for bin in buffer.iter_mut() {
        if bin.norm() / norm >= threshold {
            kept += 1;
        } else {
            *bin = Complex::new(0.0, 0.0);
        }
    }
    tracing::trace!(
        "spectral filter kept {}/{} bins (threshold {})",
        kept,
        padded_len,
        threshold
    );

    planner.plan_fft_inverse(padded_len).process(&mut buffer);
    // rustfft leaves the inverse unnormalized
    buffer.iter().take(n).map(|c| c.re / norm).collect()
}
