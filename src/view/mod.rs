//! Filtering, pagination, and view state for suggestion lists.

pub mod filter;
pub mod paginate;
pub mod state;

pub use filter::{filter_suggestions, SuggestionFilter};
pub use paginate::{clamp_page, filter_and_paginate, paginate, total_pages, Page};
pub use state::SuggestionViewState;
