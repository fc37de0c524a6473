//! Suggestion view state with always-valid pagination.
//!
//! The raw [`paginate`](crate::view::paginate::paginate) function
//! deliberately returns an empty slice for an out-of-range page. This
//! state container is the layer that keeps the page index valid: every
//! mutation that can shrink the filtered set re-clamps the current
//! page into `[1, max(1, total_pages)]`, so the visible page always
//! shows content when any exists.

use crate::core::{Difficulty, KeywordSuggestion, SearchIntent, DEFAULT_PAGE_SIZE};
use crate::view::filter::{filter_suggestions, SuggestionFilter};
use crate::view::paginate::{clamp_page, paginate, total_pages, Page};

/// Owns the suggestion list, active filter, and pagination cursor.
#[derive(Debug, Clone)]
pub struct SuggestionViewState {
    suggestions: Vec<KeywordSuggestion>,
    filter: SuggestionFilter,
    page: usize,
    page_size: usize,
}

impl Default for SuggestionViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SuggestionViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            filter: SuggestionFilter::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the suggestion list, resetting to the first page.
    pub fn set_suggestions(&mut self, suggestions: Vec<KeywordSuggestion>) {
        self.suggestions = suggestions;
        self.page = 1;
    }

    pub fn filter(&self) -> &SuggestionFilter {
        &self.filter
    }

    pub fn set_text_filter(&mut self, text: impl Into<String>) {
        self.filter.text = text.into();
        self.reclamp();
    }

    pub fn set_difficulty_filter(&mut self, difficulty: Option<Difficulty>) {
        self.filter.difficulty = difficulty;
        self.reclamp();
    }

    pub fn set_intent_filter(&mut self, intent: Option<SearchIntent>) {
        self.filter.intent = intent;
        self.reclamp();
    }

    /// Rotate the difficulty filter through All -> Easy -> Medium -> Hard.
    pub fn cycle_difficulty_filter(&mut self) {
        self.filter.difficulty = match self.filter.difficulty {
            None => Some(Difficulty::Easy),
            Some(Difficulty::Easy) => Some(Difficulty::Medium),
            Some(Difficulty::Medium) => Some(Difficulty::Hard),
            Some(Difficulty::Hard) => None,
        };
        self.reclamp();
    }

    /// Rotate the intent filter through All and the four intents.
    pub fn cycle_intent_filter(&mut self) {
        self.filter.intent = match self.filter.intent {
            None => Some(SearchIntent::Informational),
            Some(SearchIntent::Informational) => Some(SearchIntent::Transactional),
            Some(SearchIntent::Transactional) => Some(SearchIntent::Navigational),
            Some(SearchIntent::Navigational) => Some(SearchIntent::Commercial),
            Some(SearchIntent::Commercial) => None,
        };
        self.reclamp();
    }

    pub fn clear_filters(&mut self) {
        self.filter = SuggestionFilter::new();
        self.reclamp();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    /// Number of suggestions matching the active filter.
    pub fn filtered_count(&self) -> usize {
        self.suggestions
            .iter()
            .filter(|s| self.filter.matches(s))
            .count()
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    /// The currently visible page under the active filter.
    pub fn visible(&self) -> Page {
        let filtered = filter_suggestions(&self.suggestions, &self.filter);
        paginate(&filtered, self.page, self.page_size)
    }

    fn reclamp(&mut self) {
        self.page = clamp_page(self.page, self.total_pages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestions(n: usize) -> Vec<KeywordSuggestion> {
        (0..n)
            .map(|i| KeywordSuggestion {
                keyword: if i % 5 == 0 {
                    format!("rare keyword {i}")
                } else {
                    format!("keyword {i}")
                },
                score: 70 + (i as u32 % 30),
                difficulty: Difficulty::Easy,
                search_volume: 5000,
                trend: 1.0,
                cpc: 1.0,
                intent: SearchIntent::Informational,
                competition: 50,
            })
            .collect()
    }

    #[test]
    fn test_new_list_resets_to_first_page() {
        let mut state = SuggestionViewState::new(10);
        state.set_suggestions(suggestions(25));
        state.next_page();
        assert_eq!(state.page(), 2);

        state.set_suggestions(suggestions(25));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_navigation_clamps_at_bounds() {
        let mut state = SuggestionViewState::new(10);
        state.set_suggestions(suggestions(25));

        state.prev_page();
        assert_eq!(state.page(), 1);

        state.next_page();
        state.next_page();
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_filter_change_reclamps_page() {
        let mut state = SuggestionViewState::new(10);
        state.set_suggestions(suggestions(50));
        state.set_page(5);
        assert_eq!(state.page(), 5);

        // "rare" matches 10 of 50 items, shrinking the view to one page.
        state.set_text_filter("rare");
        assert_eq!(state.page(), 1);
        assert_eq!(state.visible().items.len(), 10);
    }

    #[test]
    fn test_visible_never_empty_while_matches_exist() {
        let mut state = SuggestionViewState::new(10);
        state.set_suggestions(suggestions(50));
        state.set_page(5);
        state.set_text_filter("rare");
        assert!(!state.visible().is_empty());

        state.set_text_filter("no such keyword");
        assert!(state.visible().is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_cycle_difficulty_round_trip() {
        let mut state = SuggestionViewState::new(10);
        assert_eq!(state.filter().difficulty, None);
        state.cycle_difficulty_filter();
        assert_eq!(state.filter().difficulty, Some(Difficulty::Easy));
        state.cycle_difficulty_filter();
        state.cycle_difficulty_filter();
        state.cycle_difficulty_filter();
        assert_eq!(state.filter().difficulty, None);
    }

    #[test]
    fn test_cycle_intent_round_trip() {
        let mut state = SuggestionViewState::new(10);
        for _ in 0..5 {
            state.cycle_intent_filter();
        }
        assert_eq!(state.filter().intent, None);
    }

    #[test]
    fn test_clear_filters() {
        let mut state = SuggestionViewState::new(10);
        state.set_suggestions(suggestions(25));
        state.set_text_filter("rare");
        state.cycle_difficulty_filter();
        state.clear_filters();
        assert!(state.filter().is_empty());
        assert_eq!(state.filtered_count(), 25);
    }

    #[test]
    fn test_zero_page_size_coerced_to_one() {
        let state = SuggestionViewState::new(0);
        assert_eq!(state.page_size(), 1);
    }
}
