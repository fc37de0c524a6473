pub mod analyze;
pub mod init;
pub mod suggest;
pub mod tui;

use crate::config::KeywordmapConfig;
use crate::io::output::OutputFormat;
use std::time::Duration;

/// Resolve the output format: CLI flag wins over the config file.
pub fn resolve_format(flag: Option<OutputFormat>, config: &KeywordmapConfig) -> OutputFormat {
    flag.unwrap_or(match config.output.default_format.as_str() {
        "json" => OutputFormat::Json,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Terminal,
    })
}

/// Resolve an artificial latency, honoring `--no-delay`.
pub fn resolve_latency(no_delay: bool, configured_ms: u64) -> Duration {
    if no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(configured_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_flag_overrides_config() {
        let mut config = KeywordmapConfig::default();
        config.output.default_format = "json".to_string();
        assert_eq!(
            resolve_format(Some(OutputFormat::Markdown), &config),
            OutputFormat::Markdown
        );
        assert_eq!(resolve_format(None, &config), OutputFormat::Json);
    }

    #[test]
    fn test_unknown_config_format_falls_back_to_terminal() {
        let mut config = KeywordmapConfig::default();
        config.output.default_format = "yaml".to_string();
        assert_eq!(resolve_format(None, &config), OutputFormat::Terminal);
    }

    #[test]
    fn test_no_delay_zeroes_latency() {
        assert_eq!(resolve_latency(true, 800), Duration::ZERO);
        assert_eq!(resolve_latency(false, 800), Duration::from_millis(800));
    }
}
