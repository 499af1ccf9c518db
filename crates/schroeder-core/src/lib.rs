//! Schroeder Core - offline Schroeder reverberator
//!
//! This crate turns a mono, amplitude-normalized sample buffer into a
//! reverberated, peak-normalized buffer of the same length. It is a pure
//! transform: no state survives between calls.
//!
//! # Pipeline
//!
//! - [`comb_gains`] - per-comb feedback gain from the target reverb time (T60)
//! - [`CombFilterBank`] - N parallel feedback combs, mixed by weight
//! - [`AllpassChain`] - M serial allpass diffusers
//! - [`normalize`] - peak normalization with NaN/Inf diagnostics
//! - [`ReverbEngine`] - validates a [`ReverbConfig`] once and runs the stages
//!
//! # Errors and warnings
//!
//! Configuration problems and a missing input fail with [`ReverbError`]
//! before any sample is processed. Numeric anomalies and silent output are
//! returned as [`ReverbWarning`]s next to the result.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`). Disable the default
//! `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! schroeder-core = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std` the comb bank always runs on the calling thread.
//!
//! # Example
//!
//! ```rust
//! use schroeder_core::{ReverbConfig, ReverbEngine};
//!
//! let engine = ReverbEngine::new(&ReverbConfig::default(), 44100)?;
//!
//! let mut input = vec![0.0; 44100];
//! input[0] = 1.0;
//! let output = engine.process(&input)?;
//!
//! assert_eq!(output.samples.len(), input.len());
//! for warning in &output.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), schroeder_core::ReverbError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod allpass;
pub mod comb;
pub mod config;
pub mod engine;
pub mod error;
pub mod gain;
pub mod normalize;

// Re-export main types at crate root
pub use allpass::{AllpassChain, allpass_filter};
pub use comb::{CombFilterBank, CombStage, comb_filter};
pub use config::{AllpassSpec, CombSpec, ReverbConfig};
pub use engine::{EngineOptions, ReverbEngine, ReverbOutput, apply_reverb};
pub use error::{ConfigError, NonFiniteKind, Phase, ReverbError, ReverbWarning};
pub use gain::{comb_gain, comb_gains};
pub use normalize::{Normalized, linear_to_db, normalize, peak, rms, scan_non_finite};
