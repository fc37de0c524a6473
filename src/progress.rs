//! Progress feedback while the artificial synthesis latency runs.
//!
//! Spinners are suppressed in quiet mode (flag or `KEYWORDMAP_QUIET`)
//! and when stderr is not a terminal, so piped and CI output stays
//! clean.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE_SPINNER: &str = "{spinner} {msg}";

/// Configuration for progress display behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    pub quiet: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("KEYWORDMAP_QUIET").is_ok();
        Self {
            quiet: quiet || env_quiet,
        }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet {
            return false;
        }
        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

/// Create a spinner for a synthesis phase.
///
/// Returns a hidden bar when progress should not be shown, so callers
/// don't need to branch.
pub fn synthesis_spinner(config: &ProgressConfig, msg: &str) -> ProgressBar {
    if !config.should_show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(TEMPLATE_SPINNER)
            .expect("Invalid spinner template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
