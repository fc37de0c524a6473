//! The `tui` command: interactive dashboard.

use anyhow::Result;

use crate::config::KeywordmapConfig;
use crate::tui::app::{App, AppOptions};
use crate::tui::Dashboard;

use super::resolve_latency;

pub struct TuiConfig {
    pub keyword: Option<String>,
    pub seed: Option<u64>,
    pub no_delay: bool,
}

pub fn run(config: TuiConfig) -> Result<()> {
    let file_config = KeywordmapConfig::load()?;

    let mut app = App::new(AppOptions {
        seed: config.seed.or(file_config.synthesis.seed),
        metrics_latency: resolve_latency(config.no_delay, file_config.synthesis.metrics_latency_ms),
        suggestion_latency: resolve_latency(
            config.no_delay,
            file_config.synthesis.suggestion_latency_ms,
        ),
        page_size: file_config.suggestions.page_size,
    })?;

    if let Some(keyword) = config.keyword {
        app.search(keyword);
    }

    let mut dashboard = Dashboard::new(app)?;
    dashboard.run()
}
