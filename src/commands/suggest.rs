//! The `suggest` command: suggestion list with filters and paging.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::KeywordmapConfig;
use crate::core::{Difficulty, SearchIntent};
use crate::formatting::FormattingConfig;
use crate::io::output::{format_page_markdown, OutputFormat};
use crate::output::terminal::format_page_terminal;
use crate::progress::{synthesis_spinner, ProgressConfig};
use crate::synth::rng::for_seed;
use crate::synth::SuggestionSynthesizer;
use crate::view::{filter_and_paginate, Page, SuggestionFilter};

use super::{resolve_format, resolve_latency};

pub struct SuggestConfig {
    pub keyword: String,
    pub filter: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub intent: Option<SearchIntent>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_delay: bool,
    pub quiet: bool,
    pub plain: bool,
}

pub fn run(config: SuggestConfig) -> Result<()> {
    let file_config = KeywordmapConfig::load()?;
    let format = resolve_format(config.format, &file_config);
    let seed = config.seed.or(file_config.synthesis.seed);
    let page_size = config
        .page_size
        .unwrap_or(file_config.suggestions.page_size)
        .max(1);

    let synthesizer = SuggestionSynthesizer::with_latency(resolve_latency(
        config.no_delay,
        file_config.synthesis.suggestion_latency_ms,
    ));

    let progress = ProgressConfig::from_env(config.quiet);
    let spinner = synthesis_spinner(&progress, &format!("Expanding '{}'", config.keyword));

    let runtime = tokio::runtime::Runtime::new()?;
    let mut rng = for_seed(seed);
    let suggestions = runtime.block_on(synthesizer.synthesize(&config.keyword, &mut rng));
    spinner.finish_and_clear();

    let filter = SuggestionFilter {
        text: config.filter.unwrap_or_default(),
        difficulty: config.difficulty,
        intent: config.intent,
    };
    let page = filter_and_paginate(&suggestions, &filter, config.page, page_size);
    log::info!(
        "{} of {} suggestions match filter ({})",
        page.total_items,
        suggestions.len(),
        filter.display_name()
    );

    write_page(&page, format, config.output, config.plain)
}

fn write_page(
    page: &Page,
    format: OutputFormat,
    output: Option<PathBuf>,
    plain: bool,
) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(page)?;
            json.push('\n');
            json
        }
        OutputFormat::Markdown => format_page_markdown(page),
        OutputFormat::Terminal => {
            FormattingConfig::from_env(plain || output.is_some()).apply();
            format_page_terminal(page)
        }
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                crate::io::ensure_dir(parent)?;
            }
            crate::io::write_file(&path, &rendered)
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
