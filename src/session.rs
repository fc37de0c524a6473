//! Latest-wins coordination for overlapping searches.
//!
//! Searches fire two uncoordinated synthesis calls with artificial
//! latency, so a second search issued before the first resolves would
//! otherwise race: whichever completion lands last would be shown.
//! The session tags every search with a monotonically increasing
//! token and discards completions whose token is no longer the latest.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::core::KeywordReport;

/// Token identifying one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Tracks the latest search request and its published result.
#[derive(Debug, Default)]
pub struct SearchSession {
    counter: AtomicU64,
    slot: Mutex<Slot>,
}

#[derive(Debug, Default)]
struct Slot {
    report: Option<KeywordReport>,
    /// Token the stored report was published under (0 = none yet).
    published_token: u64,
    fresh: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new search, invalidating all outstanding tokens.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a token still identifies the latest search.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.counter.load(Ordering::SeqCst)
    }

    /// Publish a completed report.
    ///
    /// Applied only when the token is still the latest; stale
    /// completions are discarded and `false` is returned.
    pub fn publish(&self, token: RequestToken, report: KeywordReport) -> bool {
        let mut slot = self.slot.lock().expect("session slot poisoned");
        // Checked under the lock so two racing publishes cannot both win.
        if token.0 != self.counter.load(Ordering::SeqCst) {
            log::debug!(
                "discarding stale result for '{}' (token {})",
                report.keyword,
                token.0
            );
            return false;
        }
        slot.report = Some(report);
        slot.published_token = token.0;
        slot.fresh = true;
        true
    }

    /// Latest published report, if any.
    pub fn snapshot(&self) -> Option<KeywordReport> {
        self.slot
            .lock()
            .expect("session slot poisoned")
            .report
            .clone()
    }

    /// Take the latest report if it arrived since the last take.
    ///
    /// Lets a render loop poll cheaply without reapplying the same
    /// result every tick.
    pub fn take_fresh(&self) -> Option<KeywordReport> {
        let mut slot = self.slot.lock().expect("session slot poisoned");
        if slot.fresh {
            slot.fresh = false;
            slot.report.clone()
        } else {
            None
        }
    }

    /// Whether the latest search is still waiting on its result.
    pub fn is_pending(&self) -> bool {
        let issued = self.counter.load(Ordering::SeqCst);
        if issued == 0 {
            return false;
        }
        let slot = self.slot.lock().expect("session slot poisoned");
        slot.published_token < issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeywordMetrics, Trend};

    fn report(keyword: &str) -> KeywordReport {
        let metrics = KeywordMetrics {
            strength: 80.0,
            traffic: 1000,
            trend: Trend::Up,
            competition: 50.0,
            search_volume: 12_000,
            difficulty: 40.0,
            cpc: 1.5,
            daily_searches: 33,
            monthly_searches: 1000,
            yearly_searches: 12_000,
            seasonality: crate::core::Seasonality {
                months: crate::core::MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
                trend: vec![100; 12],
            },
            click_metrics: crate::core::ClickMetrics {
                organic_clicks: 700,
                paid_clicks: 300,
                click_through_rate: 55.0,
            },
            serp: crate::core::SerpProfile {
                organic_results: 10,
                paid_results: 3,
                featured_snippets: true,
            },
        };
        KeywordReport::new(keyword, metrics, Vec::new())
    }

    #[test]
    fn test_tokens_increase_monotonically() {
        let session = SearchSession::new();
        let a = session.begin();
        let b = session.begin();
        assert!(b.value() > a.value());
        assert!(!session.is_current(a));
        assert!(session.is_current(b));
    }

    #[test]
    fn test_stale_publish_discarded() {
        let session = SearchSession::new();
        let first = session.begin();
        let second = session.begin();

        // The older request completes last but must not win.
        assert!(session.publish(second, report("new search")));
        assert!(!session.publish(first, report("old search")));

        let current = session.snapshot().expect("report published");
        assert_eq!(current.keyword, "new search");
    }

    #[test]
    fn test_take_fresh_consumes_once() {
        let session = SearchSession::new();
        let token = session.begin();
        session.publish(token, report("seo tools"));

        assert!(session.take_fresh().is_some());
        assert!(session.take_fresh().is_none());
        // Snapshot still serves the report after consumption.
        assert!(session.snapshot().is_some());
    }

    #[test]
    fn test_pending_lifecycle() {
        let session = SearchSession::new();
        assert!(!session.is_pending());

        let token = session.begin();
        assert!(session.is_pending());

        session.publish(token, report("seo tools"));
        assert!(!session.is_pending());

        // A newer search makes the session pending again even though a
        // report from the previous search is still stored.
        session.begin();
        assert!(session.is_pending());
    }
}
