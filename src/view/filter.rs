//! Filter predicates for suggestion lists.

use crate::core::{Difficulty, KeywordSuggestion, SearchIntent};

/// Combined predicate over a suggestion list.
///
/// An empty `text` matches everything; `None` for difficulty or
/// intent means "All".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionFilter {
    pub text: String,
    pub difficulty: Option<Difficulty>,
    pub intent: Option<SearchIntent>,
}

impl SuggestionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a suggestion passes every active predicate.
    pub fn matches(&self, suggestion: &KeywordSuggestion) -> bool {
        self.matches_text(suggestion)
            && self.difficulty.is_none_or(|d| suggestion.difficulty == d)
            && self.intent.is_none_or(|i| suggestion.intent == i)
    }

    fn matches_text(&self, suggestion: &KeywordSuggestion) -> bool {
        self.text.is_empty()
            || suggestion
                .keyword
                .to_lowercase()
                .contains(&self.text.to_lowercase())
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.difficulty.is_none() && self.intent.is_none()
    }

    /// Human-readable summary of the active predicates.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.text.is_empty() {
            parts.push(format!("text \"{}\"", self.text));
        }
        if let Some(difficulty) = self.difficulty {
            parts.push(format!("difficulty {difficulty}"));
        }
        if let Some(intent) = self.intent {
            parts.push(format!("intent {intent}"));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Retain the suggestions matching the filter, preserving order.
pub fn filter_suggestions(
    suggestions: &[KeywordSuggestion],
    filter: &SuggestionFilter,
) -> Vec<KeywordSuggestion> {
    suggestions
        .iter()
        .filter(|s| filter.matches(s))
        .cloned()
        .collect()
}
