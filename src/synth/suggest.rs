//! Suggestion synthesizer: expands a keyword with modifier phrases.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use super::{round2, DEFAULT_SUGGESTION_LATENCY};
use crate::core::{Difficulty, KeywordSuggestion, SearchIntent};

/// Modifier phrases combined with the base keyword, in fixed order.
pub const MODIFIERS: [&str; 21] = [
    "best",
    "top",
    "guide",
    "tutorial",
    "tips",
    "strategies",
    "examples",
    "tools",
    "software",
    "services",
    "platform",
    "solution",
    "review",
    "comparison",
    "alternative",
    "vs",
    "how to",
    "benefits",
    "features",
    "pricing",
    "cost",
];

/// Generates a ranked list of related-keyword candidates.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionSynthesizer {
    latency: Duration,
}

impl Default for SuggestionSynthesizer {
    fn default() -> Self {
        Self {
            latency: DEFAULT_SUGGESTION_LATENCY,
        }
    }
}

impl SuggestionSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the artificial latency. `Duration::ZERO` disables it.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Synthesize suggestions after the configured artificial delay.
    ///
    /// Total over all inputs; the list may be empty when the keyword
    /// already contains every modifier word.
    pub async fn synthesize<R: Rng>(&self, keyword: &str, rng: &mut R) -> Vec<KeywordSuggestion> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        synthesize_suggestions(keyword, rng)
    }
}

/// Pure synthesis core; the async wrapper adds only the delay.
///
/// Each modifier not already present as a whole word of the keyword
/// (case-insensitive) is prepended or appended with equal probability,
/// scored, and the result is sorted descending by score.
pub fn synthesize_suggestions<R: Rng>(keyword: &str, rng: &mut R) -> Vec<KeywordSuggestion> {
    let base_words: Vec<String> = keyword
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect();

    let mut suggestions: Vec<KeywordSuggestion> = MODIFIERS
        .iter()
        .filter(|modifier| !base_words.iter().any(|word| word == *modifier))
        .map(|modifier| {
            let candidate = if rng.random_bool(0.5) {
                format!("{modifier} {keyword}")
            } else {
                format!("{keyword} {modifier}")
            };

            let score = rng.random_range(70..100);
            KeywordSuggestion {
                keyword: candidate,
                score,
                difficulty: Difficulty::from_score(score),
                search_volume: rng.random_range(1000..10_000),
                trend: rng.random_range(0.8..1.2),
                cpc: round2(rng.random_range(0.5..5.0)),
                intent: SearchIntent::all()[rng.random_range(0..SearchIntent::all().len())],
                competition: rng.random_range(40..100),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::synth::rng::for_seed;
    use proptest::prelude::*;

    proptest! {
        /// Field ranges and ordering hold for arbitrary keywords.
        #[test]
        fn suggestion_invariants_hold(keyword in "[a-z ]{0,30}", seed in 0u64..10_000) {
            let mut rng = for_seed(Some(seed));
            let suggestions = synthesize_suggestions(&keyword, &mut rng);

            prop_assert!(suggestions.len() <= MODIFIERS.len());
            for pair in suggestions.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for s in &suggestions {
                prop_assert!((70..100).contains(&s.score));
                prop_assert!((1000..10_000).contains(&s.search_volume));
                prop_assert!((0.8..1.2).contains(&s.trend));
                prop_assert!((0.5..=5.0).contains(&s.cpc));
                prop_assert!((40..100).contains(&s.competition));
                prop_assert_eq!(s.difficulty, Difficulty::from_score(s.score));
            }
        }
    }
}
