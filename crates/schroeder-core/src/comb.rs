//! Parallel bank of feedback comb filters.
//!
//! Each comb is a single feedback recursion over the whole buffer:
//!
//! ```text
//! y[n] = x[n]                    n < d
//! y[n] = x[n] + g · y[n - d]     n >= d
//! ```
//!
//! ## DSP Structure
//!
//! ```text
//!          ┌─→ comb(d0, g0) ─→ × w0 ─┐
//! input ───┼─→ comb(d1, g1) ─→ × w1 ─┼─→ (+) ─→ mix
//!          └─→ comb(dN, gN) ─→ × wN ─┘
//! ```
//!
//! Each comb reads the shared input and writes its own buffer, so with the
//! `std` feature the bank evaluates combs on scoped worker threads. The
//! weighted sum is always reduced in stage order, so parallel and sequential
//! evaluation give bit-identical results.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::config::{CombSpec, ReverbConfig};
use crate::error::ReverbError;
use crate::gain::comb_gains;

/// Run one feedback comb filter over `input`.
///
/// The output buffer doubles as the filter history: `y[n - d]` is read
/// before `y[n]` is written, so a zero delay reads an untouched (zero) cell
/// and passes the input through. A delay at or beyond the buffer length
/// never reaches the feedback path.
///
/// # Example
///
/// ```rust
/// use schroeder_core::comb_filter;
///
/// let y = comb_filter(&[1.0, 0.0, 0.0, 0.0, 0.0], 2, 0.5);
/// assert_eq!(y, vec![1.0, 0.0, 0.5, 0.0, 0.25]);
/// ```
pub fn comb_filter(input: &[f64], delay: usize, gain: f64) -> Vec<f64> {
    let len = input.len();
    let mut output = vec![0.0; len];

    let head = delay.min(len);
    output[..head].copy_from_slice(&input[..head]);

    for n in head..len {
        let feedback = output[n - delay];
        output[n] = input[n] + gain * feedback;
    }

    output
}

/// A comb spec paired with its derived feedback gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombStage {
    /// Delay and mix weight.
    pub spec: CombSpec,
    /// Feedback gain, normally from [`comb_gain`](crate::comb_gain).
    pub gain: f64,
}

impl CombStage {
    /// Pair a delay, mix weight and feedback gain.
    pub fn new(delay: usize, mix_weight: f64, gain: f64) -> Self {
        Self {
            spec: CombSpec { delay, mix_weight },
            gain,
        }
    }

    /// Filter `input` through this stage, without the mix weight.
    #[inline]
    pub fn process(&self, input: &[f64]) -> Vec<f64> {
        comb_filter(input, self.spec.delay, self.gain)
    }
}

/// N independent comb filters mixed by weight.
///
/// # Example
///
/// ```rust
/// use schroeder_core::{CombFilterBank, CombStage};
///
/// let bank = CombFilterBank::new(vec![
///     CombStage::new(2, 0.5, 0.5),
///     CombStage::new(3, 0.5, 0.5),
/// ]);
/// let mix = bank.process(&[1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(mix, vec![1.0, 0.0, 0.25, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CombFilterBank {
    stages: Vec<CombStage>,
    parallel: bool,
}

impl CombFilterBank {
    /// Create a bank from explicit stages.
    pub fn new(stages: Vec<CombStage>) -> Self {
        Self {
            stages,
            parallel: true,
        }
    }

    /// Build the bank for `config`, deriving gains from its reverb time.
    ///
    /// Only checks the comb half of the configuration; use
    /// [`ReverbConfig::validate`] for the full set of invariants.
    pub fn from_config(config: &ReverbConfig, sample_rate: u32) -> Result<Self, ReverbError> {
        if config.mixing_params.len() != config.comb_delays.len() {
            return Err(crate::ConfigError::CombLengthMismatch {
                mixing: config.mixing_params.len(),
                delays: config.comb_delays.len(),
            }
            .into());
        }

        let gains = comb_gains(config.reverb_time, &config.comb_delays, sample_rate)?;
        let stages = config
            .comb_specs()
            .into_iter()
            .zip(gains)
            .map(|(spec, gain)| CombStage { spec, gain })
            .collect();

        Ok(Self::new(stages))
    }

    /// Enable or disable threaded evaluation. Has no effect without `std`.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether threaded evaluation is requested.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// The stages in mix order.
    pub fn stages(&self) -> &[CombStage] {
        &self.stages
    }

    /// Number of comb filters.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the bank has no filters (its mix is silence).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Filter `input` through every comb and return the weighted mix.
    pub fn process(&self, input: &[f64]) -> Vec<f64> {
        #[cfg(feature = "std")]
        if self.parallel && self.stages.len() > 1 {
            return self.process_parallel(input);
        }

        self.process_sequential(input)
    }

    /// Single-threaded evaluation, one comb at a time.
    pub fn process_sequential(&self, input: &[f64]) -> Vec<f64> {
        let mut mix = vec![0.0; input.len()];
        for stage in &self.stages {
            accumulate(&mut mix, &stage.process(input), stage.spec.mix_weight);
        }
        mix
    }

    #[cfg(feature = "std")]
    fn process_parallel(&self, input: &[f64]) -> Vec<f64> {
        #[cfg(feature = "tracing")]
        tracing::debug!(combs = self.stages.len(), "comb bank: parallel evaluation");

        let outputs: Vec<Vec<f64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = self
                .stages
                .iter()
                .map(|stage| scope.spawn(move || stage.process(input)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        let mut mix = vec![0.0; input.len()];
        for (stage, output) in self.stages.iter().zip(&outputs) {
            accumulate(&mut mix, output, stage.spec.mix_weight);
        }
        mix
    }
}

#[inline]
fn accumulate(mix: &mut [f64], output: &[f64], weight: f64) {
    for (m, &y) in mix.iter_mut().zip(output) {
        *m += weight * y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(len: usize) -> Vec<f64> {
        let mut x = vec![0.0; len];
        x[0] = 1.0;
        x
    }

    #[test]
    fn test_comb_impulse_response() {
        let y = comb_filter(&impulse(5), 2, 0.5);
        assert_eq!(y, vec![1.0, 0.0, 0.5, 0.0, 0.25]);
    }

    #[test]
    fn test_comb_pre_delay_identity() {
        let input: Vec<f64> = (0..64).map(|i| libm::sin(i as f64 * 0.37) * 0.5).collect();
        let y = comb_filter(&input, 20, 0.9);
        assert_eq!(&y[..20], &input[..20]);
        assert_ne!(&y[20..], &input[20..]);
    }

    #[test]
    fn test_comb_zero_delay_is_identity() {
        let input = vec![0.25, -0.5, 1.0, 0.0];
        assert_eq!(comb_filter(&input, 0, 1.0), input);
    }

    #[test]
    fn test_comb_delay_beyond_length_is_identity() {
        let input = vec![0.1, 0.2, 0.3];
        assert_eq!(comb_filter(&input, 3, 0.9), input);
        assert_eq!(comb_filter(&input, 1000, 0.9), input);
    }

    #[test]
    fn test_comb_empty_input() {
        assert!(comb_filter(&[], 5, 0.5).is_empty());
    }

    #[test]
    fn test_comb_echo_train_decays() {
        let y = comb_filter(&impulse(100), 10, 0.8);
        let echoes: Vec<f64> = y.iter().step_by(10).copied().collect();
        for pair in echoes.windows(2) {
            assert!(pair[1] < pair[0], "echo should decay");
        }
        assert!((echoes[3] - 0.8f64 * 0.8 * 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_bank_weights_mix() {
        let bank = CombFilterBank::new(vec![
            CombStage::new(100, 0.3, 0.9),
            CombStage::new(100, 0.2, 0.9),
        ]);
        let input = vec![1.0, -1.0, 0.5];
        let mix = bank.process(&input);
        for (m, x) in mix.iter().zip(&input) {
            assert!((m - 0.5 * x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_bank_is_silent() {
        let bank = CombFilterBank::new(Vec::new());
        assert!(bank.is_empty());
        assert_eq!(bank.process(&[1.0, 1.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let config = ReverbConfig::default();
        let bank = CombFilterBank::from_config(&config, 44100).unwrap();
        let input: Vec<f64> = (0..8000)
            .map(|i| ((i * 7919) % 2001) as f64 / 1000.0 - 1.0)
            .collect();

        let parallel = bank.process(&input);
        let sequential = bank.clone().with_parallel(false).process(&input);
        assert_eq!(parallel.len(), input.len());
        for (a, b) in parallel.iter().zip(&sequential) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_from_config_derives_gains() {
        let config = ReverbConfig::default();
        let bank = CombFilterBank::from_config(&config, 44100).unwrap();
        assert_eq!(bank.len(), 4);
        for stage in bank.stages() {
            let expected = crate::comb_gain(stage.spec.delay, 1.2, 44100);
            assert_eq!(stage.gain, expected);
        }
    }

    #[test]
    fn test_from_config_rejects_mismatch() {
        let config = ReverbConfig {
            mixing_params: vec![0.5, 0.5],
            ..ReverbConfig::default()
        };
        assert!(matches!(
            CombFilterBank::from_config(&config, 44100),
            Err(ReverbError::Config(crate::ConfigError::CombLengthMismatch {
                mixing: 2,
                delays: 4
            }))
        ));
    }
}
