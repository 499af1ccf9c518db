//! Reverb engine: comb bank → allpass chain → peak normalization.
//!
//! [`ReverbEngine`] validates its configuration once, at construction, and
//! then runs as a pure transform: the same input always produces the same
//! output, and nothing is retained between calls.
//!
//! ```text
//!              ┌────────────────┐    ┌───────────────┐    ┌────────────┐
//! input ──────→│ CombFilterBank │───→│ AllpassChain  │───→│ normalize  │──→ output
//!              │  (parallel)    │wet │  (serial)     │raw │ + warnings │
//!              └────────────────┘    └───────────────┘    └────────────┘
//!                     ↑ gains from reverb time
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::allpass::AllpassChain;
use crate::comb::CombFilterBank;
use crate::config::ReverbConfig;
use crate::error::{ReverbError, ReverbWarning};
use crate::normalize::normalize;

/// Behavioural switches that tighten the engine beyond its default policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Reject allpass gains with `|g| >= 1` as a configuration error.
    pub reject_unstable: bool,
    /// Fail with [`ReverbError::NonFinite`] instead of warning.
    pub fail_on_non_finite: bool,
    /// Evaluate comb filters on worker threads (`std` only).
    pub parallel: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reject_unstable: false,
            fail_on_non_finite: false,
            parallel: true,
        }
    }
}

impl EngineOptions {
    /// Both strictness switches enabled.
    pub fn strict() -> Self {
        Self {
            reject_unstable: true,
            fail_on_non_finite: true,
            ..Self::default()
        }
    }
}

/// Result of a successful engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbOutput {
    /// Peak-normalized samples, same length as the input.
    pub samples: Vec<f64>,
    /// Peak absolute value of the wet signal before normalization.
    pub peak: f64,
    /// Non-fatal diagnostics, in detection order.
    pub warnings: Vec<ReverbWarning>,
}

impl ReverbOutput {
    /// Whether any diagnostic was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of output samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the output holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Schroeder reverberator bound to one configuration and sample rate.
///
/// # Example
///
/// ```rust
/// use schroeder_core::{ReverbConfig, ReverbEngine};
///
/// let config = ReverbConfig {
///     mixing_params: vec![1.0],
///     comb_delays: vec![2],
///     allpass_delays: vec![],
///     allpass_gains: vec![],
///     reverb_time: 1.0,
/// };
/// let engine = ReverbEngine::new(&config, 48000).unwrap();
///
/// let out = engine.process(&[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
/// assert_eq!(out.samples.len(), 5);
/// assert_eq!(out.samples[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbEngine {
    combs: CombFilterBank,
    allpasses: AllpassChain,
    sample_rate: u32,
    options: EngineOptions,
}

impl ReverbEngine {
    /// Validate `config` and build an engine with default options.
    pub fn new(config: &ReverbConfig, sample_rate: u32) -> Result<Self, ReverbError> {
        Self::with_options(config, sample_rate, EngineOptions::default())
    }

    /// Validate `config` and build an engine with explicit options.
    pub fn with_options(
        config: &ReverbConfig,
        sample_rate: u32,
        options: EngineOptions,
    ) -> Result<Self, ReverbError> {
        config.validate(sample_rate)?;
        if options.reject_unstable {
            config.validate_stability()?;
        }

        let combs =
            CombFilterBank::from_config(config, sample_rate)?.with_parallel(options.parallel);
        let allpasses = AllpassChain::from_config(config)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            combs = combs.len(),
            allpasses = allpasses.len(),
            reverb_time = config.reverb_time,
            max_delay = config.max_delay(),
            "reverb engine configured"
        );

        Ok(Self {
            combs,
            allpasses,
            sample_rate,
            options,
        })
    }

    /// Sample rate the comb gains were derived for.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The comb bank with its derived gains.
    pub fn combs(&self) -> &CombFilterBank {
        &self.combs
    }

    /// The allpass chain.
    pub fn allpasses(&self) -> &AllpassChain {
        &self.allpasses
    }

    /// Options in effect.
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Raw reverberated signal, before normalization.
    ///
    /// Fails only if `input` is empty.
    pub fn render_wet(&self, input: &[f64]) -> Result<Vec<f64>, ReverbError> {
        if input.is_empty() {
            return Err(ReverbError::InputUnavailable);
        }

        let mix = self.combs.process(input);
        Ok(self.allpasses.process(&mix))
    }

    /// Reverberate and peak-normalize `input`.
    ///
    /// With default options, non-finite samples and a zero peak are recorded
    /// as warnings on the returned [`ReverbOutput`].
    pub fn process(&self, input: &[f64]) -> Result<ReverbOutput, ReverbError> {
        let wet = self.render_wet(input)?;
        let normalized = normalize(&wet);

        if self.options.fail_on_non_finite
            && let Some(&ReverbWarning::NonFinite { phase, kind, .. }) = normalized
                .warnings
                .iter()
                .find(|w| matches!(w, ReverbWarning::NonFinite { .. }))
        {
            return Err(ReverbError::NonFinite { phase, kind });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            samples = normalized.samples.len(),
            peak = normalized.peak,
            warnings = normalized.warnings.len(),
            "reverb rendered"
        );

        Ok(ReverbOutput {
            samples: normalized.samples,
            peak: normalized.peak,
            warnings: normalized.warnings,
        })
    }
}

/// One-shot convenience: validate, build and run an engine.
///
/// # Example
///
/// ```rust
/// use schroeder_core::{apply_reverb, ReverbConfig};
///
/// let input: Vec<f64> = (0..4800).map(|i| if i == 0 { 1.0 } else { 0.0 }).collect();
/// let out = apply_reverb(&input, 48000, &ReverbConfig::default()).unwrap();
/// assert_eq!(out.samples.len(), input.len());
/// ```
pub fn apply_reverb(
    input: &[f64],
    sample_rate: u32,
    config: &ReverbConfig,
) -> Result<ReverbOutput, ReverbError> {
    ReverbEngine::new(config, sample_rate)?.process(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, NonFiniteKind, Phase};

    fn single_comb(delay: usize) -> ReverbConfig {
        ReverbConfig {
            mixing_params: vec![1.0],
            comb_delays: vec![delay],
            allpass_delays: vec![],
            allpass_gains: vec![],
            reverb_time: 1.0,
        }
    }

    #[test]
    fn test_render_wet_matches_comb_formula() {
        let engine = ReverbEngine::new(&single_comb(2), 48000).unwrap();
        let g = engine.combs().stages()[0].gain;
        let wet = engine.render_wet(&[1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(wet, vec![1.0, 0.0, g, 0.0, g * g]);
    }

    #[test]
    fn test_output_length_matches_input() {
        let engine = ReverbEngine::new(&ReverbConfig::default(), 44100).unwrap();
        for len in [1, 10, 1000, 5000] {
            let input = vec![0.1; len];
            assert_eq!(engine.process(&input).unwrap().len(), len);
        }
    }

    #[test]
    fn test_empty_input_is_unavailable() {
        let engine = ReverbEngine::new(&ReverbConfig::default(), 44100).unwrap();
        assert_eq!(engine.process(&[]), Err(ReverbError::InputUnavailable));
    }

    #[test]
    fn test_config_error_precedes_input_check() {
        let config = ReverbConfig {
            mixing_params: vec![0.5, 0.5],
            comb_delays: vec![1, 2, 3],
            ..ReverbConfig::default()
        };
        assert_eq!(
            apply_reverb(&[], 44100, &config),
            Err(ReverbError::Config(ConfigError::CombLengthMismatch {
                mixing: 2,
                delays: 3
            }))
        );
    }

    #[test]
    fn test_silence_yields_degenerate_warning() {
        let out = apply_reverb(&[0.0; 256], 44100, &ReverbConfig::default()).unwrap();
        assert!(out.samples.iter().all(|&s| s == 0.0));
        assert_eq!(out.warnings, vec![ReverbWarning::DegenerateSignal]);
    }

    #[test]
    fn test_unstable_allpass_only_rejected_when_strict() {
        let config = ReverbConfig {
            allpass_gains: vec![-0.7, -1.5],
            ..ReverbConfig::default()
        };
        assert!(ReverbEngine::new(&config, 44100).is_ok());
        assert_eq!(
            ReverbEngine::with_options(&config, 44100, EngineOptions::strict()),
            Err(ReverbError::Config(ConfigError::UnstableAllpass {
                index: 1,
                gain: -1.5
            }))
        );
    }

    #[test]
    fn test_non_finite_input_warns_by_default_and_fails_when_strict() {
        let input = [0.5, f64::NAN, 0.25];
        let lenient = ReverbEngine::new(&single_comb(1), 48000).unwrap();
        let out = lenient.process(&input).unwrap();
        assert!(out.has_warnings());

        let strict =
            ReverbEngine::with_options(&single_comb(1), 48000, EngineOptions::strict()).unwrap();
        assert_eq!(
            strict.process(&input),
            Err(ReverbError::NonFinite {
                phase: Phase::PreNormalization,
                kind: NonFiniteKind::Nan
            })
        );
    }

    #[test]
    fn test_parallel_option_reaches_comb_bank() {
        let options = EngineOptions {
            parallel: false,
            ..EngineOptions::default()
        };
        let engine = ReverbEngine::with_options(&ReverbConfig::default(), 44100, options).unwrap();
        assert!(!engine.combs().is_parallel());
        assert!(ReverbEngine::new(&ReverbConfig::default(), 44100).unwrap().combs().is_parallel());
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = ReverbEngine::new(&ReverbConfig::default(), 44100).unwrap();
        let input: Vec<f64> = (0..3000).map(|i| libm::sin(i as f64 * 0.05) * 0.8).collect();
        assert_eq!(engine.process(&input), engine.process(&input));
    }
}
