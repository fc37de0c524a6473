//! Synthetic data generation for keyword analytics.
//!
//! Both synthesizers fabricate plausible-looking SEO numbers from
//! randomized formulas over the keyword's shape (character length and
//! word count). Randomness is injected as a `rand::Rng` parameter so
//! callers can substitute a seeded generator for reproducible output.
//!
//! Each synthesizer sleeps a configurable artificial latency before
//! producing its result, simulating the cost of a real backend call.
//! Neither can fail: every string, including the empty string, yields
//! a well-formed result.

pub mod metrics;
pub mod rng;
pub mod suggest;

pub use metrics::{synthesize_metrics, MetricSynthesizer};
pub use suggest::{synthesize_suggestions, SuggestionSynthesizer, MODIFIERS};

use std::time::Duration;

/// Default artificial latency for metric synthesis.
pub const DEFAULT_METRICS_LATENCY: Duration = Duration::from_millis(800);

/// Default artificial latency for suggestion synthesis.
pub const DEFAULT_SUGGESTION_LATENCY: Duration = Duration::from_millis(600);

/// Round a currency-like value to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
