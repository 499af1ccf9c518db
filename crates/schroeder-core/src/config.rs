//! Reverb configuration and per-stage filter specs.
//!
//! [`ReverbConfig`] is the only input the engine needs besides the signal and
//! its sample rate. It is constructed by the caller (from CLI flags, a preset
//! file, or code), validated once at the boundary, and then passed by
//! reference into a pure engine call.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::ConfigError;

/// One feedback comb filter of the parallel bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombSpec {
    /// Delay in samples.
    pub delay: usize,
    /// Weight of this filter's output in the bank mix.
    pub mix_weight: f64,
}

/// One allpass filter of the serial chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllpassSpec {
    /// Delay in samples.
    pub delay: usize,
    /// Feedback/feedforward gain; conventionally negative, stable for `|gain| < 1`.
    pub gain: f64,
}

impl AllpassSpec {
    /// Create an allpass spec.
    pub fn new(delay: usize, gain: f64) -> Self {
        Self { delay, gain }
    }

    /// Whether the filter is guaranteed not to diverge.
    #[inline]
    pub fn is_stable(&self) -> bool {
        libm::fabs(self.gain) < 1.0
    }
}

/// Full Schroeder reverberator configuration.
///
/// `mixing_params` pairs with `comb_delays`, `allpass_gains` pairs with
/// `allpass_delays`. Comb gains are never supplied: they are derived from
/// `reverb_time` by [`comb_gains`](crate::comb_gains).
///
/// # Example
///
/// ```rust
/// use schroeder_core::ReverbConfig;
///
/// let config = ReverbConfig::default();
/// assert!(config.validate(44100).is_ok());
/// assert_eq!(config.comb_specs().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbConfig {
    /// Mix weight for each comb filter.
    pub mixing_params: Vec<f64>,
    /// Delay in samples for each comb filter.
    pub comb_delays: Vec<usize>,
    /// Delay in samples for each allpass filter, in chain order.
    pub allpass_delays: Vec<usize>,
    /// Gain for each allpass filter, in chain order.
    pub allpass_gains: Vec<f64>,
    /// Target T60 in seconds.
    pub reverb_time: f64,
}

impl Default for ReverbConfig {
    /// Four combs with mutually prime delays around 30 ms at 48 kHz and two
    /// short allpass diffusers.
    fn default() -> Self {
        Self {
            mixing_params: vec![0.3, 0.25, 0.25, 0.20],
            comb_delays: vec![1553, 1613, 1493, 1153],
            allpass_delays: vec![223, 443],
            allpass_gains: vec![-0.7, -0.7],
            reverb_time: 1.2,
        }
    }
}

impl ReverbConfig {
    /// Check the structural invariants against the given sample rate.
    ///
    /// Checks run in a fixed order: allpass lengths, comb lengths, reverb
    /// time, sample rate. The first failure is returned.
    pub fn validate(&self, sample_rate: u32) -> Result<(), ConfigError> {
        if self.allpass_gains.len() != self.allpass_delays.len() {
            return Err(ConfigError::AllpassLengthMismatch {
                gains: self.allpass_gains.len(),
                delays: self.allpass_delays.len(),
            });
        }
        if self.mixing_params.len() != self.comb_delays.len() {
            return Err(ConfigError::CombLengthMismatch {
                mixing: self.mixing_params.len(),
                delays: self.comb_delays.len(),
            });
        }
        validate_reverb_time(self.reverb_time)?;
        validate_sample_rate(sample_rate)
    }

    /// Reject allpass stages that can diverge.
    ///
    /// Derived comb gains always lie in (0, 1], so only the allpass chain
    /// needs checking.
    pub fn validate_stability(&self) -> Result<(), ConfigError> {
        match self
            .allpass_specs()
            .into_iter()
            .enumerate()
            .find(|(_, spec)| !spec.is_stable())
        {
            Some((index, spec)) => Err(ConfigError::UnstableAllpass {
                index,
                gain: spec.gain,
            }),
            None => Ok(()),
        }
    }

    /// Comb stages as (delay, weight) pairs.
    pub fn comb_specs(&self) -> Vec<CombSpec> {
        self.comb_delays
            .iter()
            .zip(&self.mixing_params)
            .map(|(&delay, &mix_weight)| CombSpec { delay, mix_weight })
            .collect()
    }

    /// Allpass stages in chain order.
    pub fn allpass_specs(&self) -> Vec<AllpassSpec> {
        self.allpass_delays
            .iter()
            .zip(&self.allpass_gains)
            .map(|(&delay, &gain)| AllpassSpec { delay, gain })
            .collect()
    }

    /// Sum of all mixing weights.
    ///
    /// When no filter delay is reached within the buffer, the engine output
    /// equals `Σ w_i · input` (up to rounding, since the bank sums stage by stage).
    pub fn mix_sum(&self) -> f64 {
        self.mixing_params.iter().sum()
    }

    /// Longest delay of any stage, in samples.
    pub fn max_delay(&self) -> usize {
        self.comb_delays
            .iter()
            .chain(&self.allpass_delays)
            .copied()
            .max()
            .unwrap_or(0)
    }
}

pub(crate) fn validate_reverb_time(reverb_time: f64) -> Result<(), ConfigError> {
    // NaN fails the comparison too
    if reverb_time > 0.0 && reverb_time.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidReverbTime(reverb_time))
    }
}

pub(crate) fn validate_sample_rate(sample_rate: u32) -> Result<(), ConfigError> {
    if sample_rate == 0 {
        Err(ConfigError::InvalidSampleRate(sample_rate))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ReverbConfig::default();
        assert_eq!(config.validate(44100), Ok(()));
        assert_eq!(config.validate_stability(), Ok(()));
        assert!((config.mix_sum() - 1.0).abs() < 1e-12);
        assert_eq!(config.max_delay(), 1613);
    }

    #[test]
    fn comb_length_mismatch_is_rejected() {
        let config = ReverbConfig {
            mixing_params: vec![0.5, 0.5],
            comb_delays: vec![10, 20, 30],
            ..ReverbConfig::default()
        };
        assert_eq!(
            config.validate(48000),
            Err(ConfigError::CombLengthMismatch {
                mixing: 2,
                delays: 3
            })
        );
    }

    #[test]
    fn allpass_mismatch_is_reported_before_comb_mismatch() {
        let config = ReverbConfig {
            mixing_params: vec![1.0],
            comb_delays: vec![],
            allpass_delays: vec![1, 2],
            allpass_gains: vec![-0.5],
            reverb_time: 1.0,
        };
        assert_eq!(
            config.validate(48000),
            Err(ConfigError::AllpassLengthMismatch {
                gains: 1,
                delays: 2
            })
        );
    }

    #[test]
    fn non_positive_reverb_time_is_rejected() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ReverbConfig {
                reverb_time: t,
                ..ReverbConfig::default()
            };
            assert!(matches!(
                config.validate(48000),
                Err(ConfigError::InvalidReverbTime(_))
            ));
        }
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        assert_eq!(
            ReverbConfig::default().validate(0),
            Err(ConfigError::InvalidSampleRate(0))
        );
    }

    #[test]
    fn unstable_allpass_is_flagged_with_index() {
        let config = ReverbConfig {
            allpass_gains: vec![-0.7, 1.0],
            ..ReverbConfig::default()
        };
        assert_eq!(config.validate(48000), Ok(()));
        assert_eq!(
            config.validate_stability(),
            Err(ConfigError::UnstableAllpass {
                index: 1,
                gain: 1.0
            })
        );
    }

    #[test]
    fn specs_pair_fields_in_order() {
        let config = ReverbConfig::default();
        let combs = config.comb_specs();
        assert_eq!(
            combs[1],
            CombSpec {
                delay: 1613,
                mix_weight: 0.25
            }
        );
        let allpasses = config.allpass_specs();
        assert_eq!(allpasses, vec![AllpassSpec::new(223, -0.7), AllpassSpec::new(443, -0.7)]);
    }
}
