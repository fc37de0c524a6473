//! The `analyze` command: full report for one keyword.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::KeywordmapConfig;
use crate::core::KeywordReport;
use crate::io::output::{create_writer, OutputFormat};
use crate::output::terminal::output_terminal;
use crate::progress::{synthesis_spinner, ProgressConfig};
use crate::synth::rng::pair_for_seed;
use crate::synth::{MetricSynthesizer, SuggestionSynthesizer};

use super::{resolve_format, resolve_latency};

pub struct AnalyzeConfig {
    pub keyword: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_delay: bool,
    pub top: Option<usize>,
    pub quiet: bool,
    pub plain: bool,
}

pub fn run(config: AnalyzeConfig) -> Result<()> {
    let file_config = KeywordmapConfig::load()?;
    let format = resolve_format(config.format, &file_config);
    let seed = config.seed.or(file_config.synthesis.seed);

    let report = synthesize_report(
        &config.keyword,
        seed,
        &file_config,
        config.no_delay,
        config.quiet,
    )?;

    match format {
        OutputFormat::Terminal => output_terminal(&report, config.top, config.output, config.plain),
        OutputFormat::Json | OutputFormat::Markdown => {
            write_structured(&report, format, config.output, config.top)
        }
    }
}

/// Run both synthesizers concurrently and assemble the report.
///
/// The two calls share no state; each gets its own generator.
pub fn synthesize_report(
    keyword: &str,
    seed: Option<u64>,
    file_config: &KeywordmapConfig,
    no_delay: bool,
    quiet: bool,
) -> Result<KeywordReport> {
    let metrics_synth = MetricSynthesizer::with_latency(resolve_latency(
        no_delay,
        file_config.synthesis.metrics_latency_ms,
    ));
    let suggestion_synth = SuggestionSynthesizer::with_latency(resolve_latency(
        no_delay,
        file_config.synthesis.suggestion_latency_ms,
    ));

    let progress = ProgressConfig::from_env(quiet);
    let spinner = synthesis_spinner(&progress, &format!("Analyzing '{keyword}'"));

    let runtime = tokio::runtime::Runtime::new()?;
    let (mut metrics_rng, mut suggestion_rng) = pair_for_seed(seed);
    let (metrics, suggestions) = runtime.block_on(async {
        tokio::join!(
            metrics_synth.synthesize(keyword, &mut metrics_rng),
            suggestion_synth.synthesize(keyword, &mut suggestion_rng),
        )
    });

    spinner.finish_and_clear();
    log::info!(
        "synthesized {} suggestions for '{}'",
        suggestions.len(),
        keyword
    );

    Ok(KeywordReport::new(keyword, metrics, suggestions))
}

fn write_structured(
    report: &KeywordReport,
    format: OutputFormat,
    output: Option<PathBuf>,
    top: Option<usize>,
) -> Result<()> {
    let mut trimmed = report.clone();
    if let Some(top) = top {
        trimmed.suggestions.truncate(top);
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                crate::io::ensure_dir(parent)?;
            }
            let file = std::fs::File::create(path)?;
            create_writer(file, format).write_report(&trimmed)
        }
        None => create_writer(std::io::stdout(), format).write_report(&trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> KeywordmapConfig {
        let mut config = KeywordmapConfig::default();
        config.synthesis.metrics_latency_ms = 0;
        config.synthesis.suggestion_latency_ms = 0;
        config
    }

    #[test]
    fn test_synthesize_report_shape() {
        let report =
            synthesize_report("rust testing", Some(3), &fast_config(), true, true).unwrap();
        assert_eq!(report.keyword, "rust testing");
        assert_eq!(report.metrics.yearly_searches, report.metrics.monthly_searches * 12);
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_seeded_reports_are_reproducible() {
        let a = synthesize_report("seo", Some(9), &fast_config(), true, true).unwrap();
        let b = synthesize_report("seo", Some(9), &fast_config(), true, true).unwrap();
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.suggestions, b.suggestions);
    }
}
