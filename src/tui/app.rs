//! Dashboard application state and key handling.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{KeywordMetrics, KeywordReport};
use crate::session::SearchSession;
use crate::synth::rng::pair_for_seed;
use crate::synth::{MetricSynthesizer, SuggestionSynthesizer};
use crate::view::SuggestionViewState;

/// Which component currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation keys act on the suggestion list.
    Browse,
    /// Typing edits the search box.
    Search,
    /// Typing edits the suggestion text filter.
    Filter,
}

pub struct AppOptions {
    pub seed: Option<u64>,
    pub metrics_latency: Duration,
    pub suggestion_latency: Duration,
    pub page_size: usize,
}

/// Dashboard state: search box, analytics panel, suggestion view.
pub struct App {
    runtime: tokio::runtime::Runtime,
    session: Arc<SearchSession>,
    mode: InputMode,
    search_input: String,
    filter_input: String,
    keyword: Option<String>,
    metrics: Option<KeywordMetrics>,
    view: SuggestionViewState,
    seed: Option<u64>,
    metrics_latency: Duration,
    suggestion_latency: Duration,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self> {
        Ok(Self {
            runtime: tokio::runtime::Runtime::new()?,
            session: Arc::new(SearchSession::new()),
            mode: InputMode::Search,
            search_input: String::new(),
            filter_input: String::new(),
            keyword: None,
            metrics: None,
            view: SuggestionViewState::new(options.page_size),
            seed: options.seed,
            metrics_latency: options.metrics_latency,
            suggestion_latency: options.suggestion_latency,
        })
    }

    /// Kick off a search on the background runtime.
    ///
    /// Both synthesizers run concurrently; the completion publishes
    /// through the session, which discards it if a newer search has
    /// started in the meantime.
    pub fn search(&mut self, keyword: String) {
        let token = self.session.begin();
        let session = Arc::clone(&self.session);
        let metrics_synth = MetricSynthesizer::with_latency(self.metrics_latency);
        let suggestion_synth = SuggestionSynthesizer::with_latency(self.suggestion_latency);
        let seed = self.seed;

        self.runtime.spawn(async move {
            let (mut metrics_rng, mut suggestion_rng) = pair_for_seed(seed);
            let (metrics, suggestions) = tokio::join!(
                metrics_synth.synthesize(&keyword, &mut metrics_rng),
                suggestion_synth.synthesize(&keyword, &mut suggestion_rng),
            );
            session.publish(token, KeywordReport::new(keyword, metrics, suggestions));
        });
    }

    /// Apply the latest published result, if one arrived since last tick.
    pub fn sync(&mut self) {
        if let Some(report) = self.session.take_fresh() {
            self.keyword = Some(report.keyword);
            self.metrics = Some(report.metrics);
            self.view.set_suggestions(report.suggestions);
        }
    }

    /// Handle a key event. Returns `Ok(true)` to exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Filter => self.handle_filter_key(key),
            InputMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Enter => {
                if !self.search_input.is_empty() {
                    self.search(self.search_input.clone());
                    self.mode = InputMode::Browse;
                }
            }
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Char(c) => self.search_input.push(c),
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Char(c) => {
                self.filter_input.push(c);
                self.view.set_text_filter(self.filter_input.clone());
            }
            KeyCode::Backspace => {
                self.filter_input.pop();
                self.view.set_text_filter(self.filter_input.clone());
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('s') | KeyCode::Char('/') => self.mode = InputMode::Search,
            KeyCode::Char('f') => self.mode = InputMode::Filter,
            KeyCode::Char('d') => self.view.cycle_difficulty_filter(),
            KeyCode::Char('i') => self.view.cycle_intent_filter(),
            KeyCode::Char('c') => {
                self.filter_input.clear();
                self.view.clear_filters();
            }
            KeyCode::Char('n') | KeyCode::Right => self.view.next_page(),
            KeyCode::Char('p') | KeyCode::Left => self.view.prev_page(),
            _ => {}
        }
        Ok(false)
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn metrics(&self) -> Option<&KeywordMetrics> {
        self.metrics.as_ref()
    }

    pub fn view(&self) -> &SuggestionViewState {
        &self.view
    }

    pub fn is_searching(&self) -> bool {
        self.session.is_pending()
    }
}
