//! Comb feedback gains derived from reverb time.
//!
//! A comb filter with delay `d` samples and feedback `g` attenuates its
//! recirculating signal by `20·log10(g)` dB every `d / fs` seconds. Requiring
//! a 60 dB drop after `T60` seconds gives the closed form
//!
//! ```text
//! g = 10 ^ (-3 · d / (T60 · fs))
//! ```
//!
//! Longer delays get smaller gains so that every comb in the bank decays at
//! the same rate.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::{validate_reverb_time, validate_sample_rate};
use crate::error::ReverbError;

/// Feedback gain that makes a comb with `delay` samples decay by 60 dB after
/// `reverb_time` seconds at `sample_rate`.
///
/// Inputs are not validated; see [`comb_gains`] for the checked form.
///
/// # Example
///
/// ```rust
/// use schroeder_core::comb_gain;
///
/// // A delay equal to one full T60 decays by exactly 60 dB per pass.
/// let g = comb_gain(48000, 1.0, 48000);
/// assert!((g - 0.001).abs() < 1e-12);
/// ```
#[inline]
pub fn comb_gain(delay: usize, reverb_time: f64, sample_rate: u32) -> f64 {
    libm::pow(
        10.0,
        -3.0 * delay as f64 / (reverb_time * f64::from(sample_rate)),
    )
}

/// One feedback gain per comb delay.
///
/// Fails with a configuration error if `reverb_time <= 0` or
/// `sample_rate == 0`. Every returned gain lies in (0, 1]; a zero delay
/// yields exactly 1.
pub fn comb_gains(
    reverb_time: f64,
    comb_delays: &[usize],
    sample_rate: u32,
) -> Result<Vec<f64>, ReverbError> {
    validate_reverb_time(reverb_time)?;
    validate_sample_rate(sample_rate)?;

    Ok(comb_delays
        .iter()
        .map(|&delay| comb_gain(delay, reverb_time, sample_rate))
        .collect())
}
