//! Error and warning types for the reverb pipeline.
//!
//! Errors abort the pipeline before any sample is produced. Warnings are
//! returned alongside a still-valid output buffer and never abort.
//!
//! | Kind                         | Fatal | Raised by              |
//! |------------------------------|-------|------------------------|
//! | [`ConfigError`]              | yes   | validation, up-front   |
//! | [`ReverbError::InputUnavailable`] | yes | engine entry        |
//! | [`ReverbWarning::NonFinite`] | no*   | output normalizer      |
//! | [`ReverbWarning::DegenerateSignal`] | no | output normalizer  |
//!
//! \* [`EngineOptions::fail_on_non_finite`](crate::EngineOptions) promotes
//! non-finite detections to [`ReverbError::NonFinite`].

use core::fmt;

/// Invalid reverb configuration, detected before any sample is processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Number of mixing weights differs from the number of comb delays.
    CombLengthMismatch {
        /// Number of mixing weights supplied.
        mixing: usize,
        /// Number of comb delays supplied.
        delays: usize,
    },
    /// Number of allpass gains differs from the number of allpass delays.
    AllpassLengthMismatch {
        /// Number of allpass gains supplied.
        gains: usize,
        /// Number of allpass delays supplied.
        delays: usize,
    },
    /// Reverb time must be a finite, strictly positive number of seconds.
    InvalidReverbTime(f64),
    /// Sample rate must be strictly positive.
    InvalidSampleRate(u32),
    /// Allpass gain with `|gain| >= 1` (only checked when stability checks are enabled).
    UnstableAllpass {
        /// Position of the offending filter in the chain.
        index: usize,
        /// The rejected gain.
        gain: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CombLengthMismatch { mixing, delays } => write!(
                f,
                "number of mixing params ({mixing}) must match the number of comb delays ({delays})"
            ),
            Self::AllpassLengthMismatch { gains, delays } => write!(
                f,
                "number of allpass gains ({gains}) must match the number of allpass delays ({delays})"
            ),
            Self::InvalidReverbTime(t) => {
                write!(f, "reverb time must be finite and > 0 seconds, got {t}")
            }
            Self::InvalidSampleRate(sr) => write!(f, "sample rate must be > 0 Hz, got {sr}"),
            Self::UnstableAllpass { index, gain } => write!(
                f,
                "allpass filter {index} has gain {gain}; |gain| must be < 1 for stability"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Pipeline stage at which a non-finite scan ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Raw wet signal, before peak normalization.
    PreNormalization,
    /// Final signal, after peak normalization.
    PostNormalization,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreNormalization => write!(f, "before normalization"),
            Self::PostNormalization => write!(f, "after normalization"),
        }
    }
}

/// Class of non-finite value found in a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFiniteKind {
    /// Not-a-number samples.
    Nan,
    /// Positive or negative infinity.
    Infinite,
}

impl fmt::Display for NonFiniteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nan => write!(f, "NaNs"),
            Self::Infinite => write!(f, "Infs"),
        }
    }
}

/// Errors returned by the reverb engine. No output is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ReverbError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// No input signal was supplied (empty buffer).
    InputUnavailable,
    /// Non-finite output with strict checking enabled.
    NonFinite {
        /// Where the values were detected.
        phase: Phase,
        /// What kind of values were detected.
        kind: NonFiniteKind,
    },
}

impl fmt::Display for ReverbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::InputUnavailable => write!(f, "no input signal supplied"),
            Self::NonFinite { phase, kind } => {
                write!(f, "reverb signal contains {kind} {phase}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReverbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ReverbError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Non-fatal diagnostics recorded while producing an output.
#[derive(Debug, Clone, PartialEq)]
pub enum ReverbWarning {
    /// The signal contained NaN or infinite samples.
    NonFinite {
        /// Where the values were detected.
        phase: Phase,
        /// What kind of values were detected.
        kind: NonFiniteKind,
        /// How many samples were affected.
        count: usize,
    },
    /// Peak amplitude was zero; normalization was skipped.
    DegenerateSignal,
}

impl fmt::Display for ReverbWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { phase, kind, count } => {
                write!(f, "reverb signal contains {count} {kind} {phase}")
            }
            Self::DegenerateSignal => write!(
                f,
                "maximum value of reverb signal is zero, cannot normalize"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate alloc;
    use alloc::string::ToString;

    #[test]
    fn comb_mismatch_display_names_both_lengths() {
        let err = ConfigError::CombLengthMismatch {
            mixing: 2,
            delays: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("mixing params (2)"), "got: {msg}");
        assert!(msg.contains("comb delays (3)"), "got: {msg}");
    }

    #[test]
    fn config_error_converts_into_reverb_error() {
        let err: ReverbError = ConfigError::InvalidSampleRate(0).into();
        assert_eq!(err, ReverbError::Config(ConfigError::InvalidSampleRate(0)));
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn warning_display_identifies_phase() {
        let warn = ReverbWarning::NonFinite {
            phase: Phase::PostNormalization,
            kind: NonFiniteKind::Nan,
            count: 3,
        };
        assert_eq!(
            warn.to_string(),
            "reverb signal contains 3 NaNs after normalization"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn invalid_reverb_time_message_names_finiteness() {
        let msg = ConfigError::InvalidReverbTime(f64::INFINITY).to_string();
        assert_eq!(msg, "reverb time must be finite and > 0 seconds, got inf");
    }

    #[test]
    fn reverb_error_exposes_config_source() {
        use std::error::Error;
        let err = ReverbError::Config(ConfigError::InvalidReverbTime(0.0));
        assert!(err.source().is_some());
        assert!(ReverbError::InputUnavailable.source().is_none());
    }
}
