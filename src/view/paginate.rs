//! Pure pagination over filtered suggestion lists.

use serde::Serialize;

use crate::core::KeywordSuggestion;
use crate::view::filter::{filter_suggestions, SuggestionFilter};

/// One page of a filtered suggestion list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page {
    pub items: Vec<KeywordSuggestion>,
    /// 1-based page index this slice was taken at.
    pub page: usize,
    pub total_pages: usize,
    /// Number of items matching the filter across all pages.
    pub total_items: usize,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `count` items; 0 when the list is empty.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a 1-based page index into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice one page out of a list.
///
/// Raw slice semantics: an out-of-range page (including page 0)
/// yields an empty page rather than being re-clamped. Callers that
/// want an always-valid page go through
/// [`SuggestionViewState`](crate::view::SuggestionViewState).
pub fn paginate(items: &[KeywordSuggestion], page: usize, page_size: usize) -> Page {
    let total_items = items.len();
    let total = total_pages(total_items, page_size);

    let slice = page
        .checked_sub(1)
        .map(|p| p.saturating_mul(page_size))
        .filter(|start| *start < total_items)
        .map(|start| {
            let end = (start + page_size).min(total_items);
            items[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items: slice,
        page,
        total_pages: total,
        total_items,
    }
}

/// Filter then slice in one step.
pub fn filter_and_paginate(
    suggestions: &[KeywordSuggestion],
    filter: &SuggestionFilter,
    page: usize,
    page_size: usize,
) -> Page {
    let filtered = filter_suggestions(suggestions, filter);
    paginate(&filtered, page, page_size)
}
