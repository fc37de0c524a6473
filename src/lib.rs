// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod output;
pub mod progress;
pub mod session;
pub mod synth;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ClickMetrics, Difficulty, KeywordMetrics, KeywordReport, KeywordSuggestion, SearchIntent,
    Seasonality, SerpProfile, Trend, DEFAULT_PAGE_SIZE, MONTH_LABELS,
};

pub use crate::synth::{
    synthesize_metrics, synthesize_suggestions, MetricSynthesizer, SuggestionSynthesizer,
    MODIFIERS,
};

pub use crate::view::{
    clamp_page, filter_and_paginate, filter_suggestions, paginate, total_pages, Page,
    SuggestionFilter, SuggestionViewState,
};

pub use crate::session::{RequestToken, SearchSession};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::errors::KeywordmapError;
