//! Peak normalization with non-finite diagnostics.
//!
//! The wet signal of a long reverb easily exceeds unit amplitude, so the
//! final stage rescales it to a peak of exactly 1. The signal is scanned for
//! NaN and infinity before and after scaling; detections are reported as
//! [`ReverbWarning`]s and never abort.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{NonFiniteKind, Phase, ReverbWarning};

/// Peak-normalized signal plus the diagnostics gathered while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Normalized samples, same length as the input.
    pub samples: Vec<f64>,
    /// Peak absolute value of the signal before normalization.
    pub peak: f64,
    /// Warnings in detection order.
    pub warnings: Vec<ReverbWarning>,
}

/// Largest absolute sample value, or 0 for an empty slice.
///
/// Any NaN sample makes the peak NaN, which in turn turns the whole
/// normalized signal into NaN. That corruption is reported, not repaired.
#[inline]
pub fn peak(signal: &[f64]) -> f64 {
    signal
        .iter()
        .map(|&s| libm::fabs(s))
        .fold(0.0, |acc, s| if acc >= s || acc.is_nan() { acc } else { s })
}

/// Report NaN and infinite samples found in `signal`.
///
/// Returns at most one warning per [`NonFiniteKind`], NaN first.
pub fn scan_non_finite(signal: &[f64], phase: Phase) -> Vec<ReverbWarning> {
    let nan = signal.iter().filter(|s| s.is_nan()).count();
    let inf = signal.iter().filter(|s| s.is_infinite()).count();

    let mut warnings = Vec::new();
    for (kind, count) in [(NonFiniteKind::Nan, nan), (NonFiniteKind::Infinite, inf)] {
        if count > 0 {
            warnings.push(ReverbWarning::NonFinite { phase, kind, count });
        }
    }
    warnings
}

/// Scale `signal` so its peak absolute value is 1.
///
/// An all-zero (or empty) signal cannot be normalized; it is returned
/// unchanged with a [`ReverbWarning::DegenerateSignal`].
///
/// # Example
///
/// ```rust
/// use schroeder_core::normalize;
///
/// let out = normalize(&[0.5, -2.0, 1.0]);
/// assert_eq!(out.samples, vec![0.25, -1.0, 0.5]);
/// assert_eq!(out.peak, 2.0);
/// assert!(out.warnings.is_empty());
/// ```
pub fn normalize(signal: &[f64]) -> Normalized {
    let mut warnings = scan_non_finite(signal, Phase::PreNormalization);

    let max_abs = peak(signal);
    let samples = if max_abs == 0.0 {
        warnings.push(ReverbWarning::DegenerateSignal);
        signal.to_vec()
    } else {
        signal.iter().map(|&s| s / max_abs).collect()
    };

    warnings.extend(scan_non_finite(&samples, Phase::PostNormalization));

    #[cfg(feature = "tracing")]
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    Normalized {
        samples,
        peak: max_abs,
        warnings,
    }
}

/// Root-mean-square level, or 0 for an empty slice.
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    let sum: f64 = signal.iter().map(|s| s * s).sum();
    libm::sqrt(sum / signal.len() as f64)
}

/// Convert linear amplitude to dB, floored at -120 dB.
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * libm::log10(linear)
    }
}
