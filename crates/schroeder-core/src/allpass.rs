//! Serial chain of Schroeder allpass filters.
//!
//! Allpass filters pass all frequencies at equal amplitude but modify the
//! phase. Placed after the comb bank they smear each echo into a denser,
//! more diffuse tail. Each stage computes
//!
//! ```text
//! y[n] = x[n]                                   n < d
//! y[n] = g·x[n] + x[n - d] - g·y[n - d]          n >= d
//! ```
//!
//! and stage `k`'s complete output is stage `k + 1`'s input. Order matters
//! for the transient response, so stages are never reordered.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::config::{AllpassSpec, ReverbConfig};
use crate::error::ConfigError;

/// Run one allpass filter over `input`.
///
/// As with [`comb_filter`](crate::comb_filter), the output buffer is the
/// history: a zero delay reads an unwritten (zero) cell, so the stage
/// reduces to `(1 + g)·x[n]`.
///
/// # Example
///
/// ```rust
/// use schroeder_core::allpass_filter;
///
/// let y = allpass_filter(&[1.0, 0.0, 0.0, 0.0], 2, -0.5);
/// assert_eq!(y, vec![1.0, 0.0, 1.5, 0.0]);
/// ```
pub fn allpass_filter(input: &[f64], delay: usize, gain: f64) -> Vec<f64> {
    let len = input.len();
    let mut output = vec![0.0; len];

    let head = delay.min(len);
    output[..head].copy_from_slice(&input[..head]);

    for n in head..len {
        let delayed_out = output[n - delay];
        output[n] = gain * input[n] + input[n - delay] - gain * delayed_out;
    }

    output
}

/// M allpass filters applied strictly in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllpassChain {
    stages: Vec<AllpassSpec>,
}

impl AllpassChain {
    /// Create a chain from stages in application order.
    pub fn new(stages: Vec<AllpassSpec>) -> Self {
        Self { stages }
    }

    /// Build the chain described by `config`.
    pub fn from_config(config: &ReverbConfig) -> Result<Self, ConfigError> {
        if config.allpass_gains.len() != config.allpass_delays.len() {
            return Err(ConfigError::AllpassLengthMismatch {
                gains: config.allpass_gains.len(),
                delays: config.allpass_delays.len(),
            });
        }
        Ok(Self::new(config.allpass_specs()))
    }

    /// The stages in application order.
    pub fn stages(&self) -> &[AllpassSpec] {
        &self.stages
    }

    /// Number of allpass filters.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain is empty (identity).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Pass `input` through every stage in order.
    ///
    /// An empty chain returns a copy of the input.
    pub fn process(&self, input: &[f64]) -> Vec<f64> {
        let mut signal = input.to_vec();
        for stage in &self.stages {
            signal = allpass_filter(&signal, stage.delay, stage.gain);
        }
        signal
    }
}
