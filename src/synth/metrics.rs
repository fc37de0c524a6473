//! Metric synthesizer: keyword string in, fabricated analytics out.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use super::{round1, round2, DEFAULT_METRICS_LATENCY};
use crate::core::{ClickMetrics, KeywordMetrics, Seasonality, SerpProfile, Trend, MONTH_LABELS};

/// Generates a [`KeywordMetrics`] record for any keyword.
///
/// Deterministic fields derive from the keyword's length and word
/// count; the rest (cpc, trend direction, seasonality, CTR, SERP
/// composition) are fresh random draws per call, so repeated calls
/// with the same keyword differ by design.
#[derive(Debug, Clone, Copy)]
pub struct MetricSynthesizer {
    latency: Duration,
}

impl Default for MetricSynthesizer {
    fn default() -> Self {
        Self {
            latency: DEFAULT_METRICS_LATENCY,
        }
    }
}

impl MetricSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the artificial latency. `Duration::ZERO` disables it.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Synthesize metrics after the configured artificial delay.
    ///
    /// Total over all inputs, including the empty string.
    pub async fn synthesize<R: Rng>(&self, keyword: &str, rng: &mut R) -> KeywordMetrics {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        synthesize_metrics(keyword, rng)
    }
}

/// Shape of a keyword: (word count, character length).
///
/// Splitting on single spaces mirrors the volume formulas' domain:
/// the empty string counts as one word.
pub fn keyword_shape(keyword: &str) -> (usize, usize) {
    (keyword.split(' ').count(), keyword.chars().count())
}

/// Composite power score, clamped to `[60, 100]`.
pub fn strength_score(word_count: usize, length: usize) -> f64 {
    (85.0 + 2.0 * word_count as f64 - 0.5 * length as f64).clamp(60.0, 100.0)
}

/// Competition pressure, clamped to `[20, 100]`.
pub fn competition_score(word_count: usize, length: usize) -> f64 {
    (70.0 + 5.0 * word_count as f64 - 2.0 * length as f64).clamp(20.0, 100.0)
}

/// Pure synthesis core; the async wrapper adds only the delay.
pub fn synthesize_metrics<R: Rng>(keyword: &str, rng: &mut R) -> KeywordMetrics {
    let (word_count, length) = keyword_shape(keyword);

    let strength = strength_score(word_count, length);
    let monthly_searches = (strength * 1000.0 * (1.0 + rng.random_range(0.0..0.3))).floor() as u64;
    let competition = competition_score(word_count, length);

    let daily_searches = monthly_searches / 30;
    let yearly_searches = monthly_searches * 12;

    let seasonality = Seasonality {
        months: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
        trend: (0..MONTH_LABELS.len())
            .map(|_| rng.random_range(80..120))
            .collect(),
    };

    KeywordMetrics {
        strength,
        traffic: monthly_searches,
        trend: if rng.random_bool(0.7) {
            Trend::Up
        } else {
            Trend::Down
        },
        competition,
        search_volume: yearly_searches,
        difficulty: competition * 0.8,
        cpc: round2(rng.random_range(0.5..5.0)),
        daily_searches,
        monthly_searches,
        yearly_searches,
        seasonality,
        click_metrics: ClickMetrics {
            organic_clicks: (monthly_searches as f64 * 0.7).floor() as u64,
            paid_clicks: (monthly_searches as f64 * 0.3).floor() as u64,
            click_through_rate: round1(rng.random_range(45.0..70.0)),
        },
        serp: SerpProfile {
            organic_results: rng.random_range(8..12),
            paid_results: rng.random_range(2..6),
            featured_snippets: rng.random_bool(0.5),
        },
    }
}
