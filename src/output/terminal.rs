//! Colored terminal rendering of keyword reports.

use colored::*;
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use crate::core::{Difficulty, KeywordReport, SearchIntent, Trend};
use crate::formatting::FormattingConfig;
use crate::view::Page;

pub fn output_terminal(
    report: &KeywordReport,
    top: Option<usize>,
    output_file: Option<PathBuf>,
    plain: bool,
) -> anyhow::Result<()> {
    // Files never get ANSI escapes, whatever the tty detection says.
    FormattingConfig::from_env(plain || output_file.is_some()).apply();
    let output = format_report_terminal(report, top);

    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Format the full report: metrics panel, seasonality row, suggestion list.
pub fn format_report_terminal(report: &KeywordReport, top: Option<usize>) -> String {
    let mut out = String::new();
    let m = &report.metrics;

    let _ = writeln!(out, "{}", format!("Keyword: {}", report.keyword).bold());
    let _ = writeln!(out);

    let trend_marker = match m.trend {
        Trend::Up => "↑ up".green().to_string(),
        Trend::Down => "↓ down".red().to_string(),
    };

    let _ = writeln!(out, "  {:<22}{:>10.1}", "Strength", m.strength);
    let _ = writeln!(out, "  {:<22}{:>10}", "Trend", trend_marker);
    let _ = writeln!(out, "  {:<22}{:>10}", "Monthly searches", m.monthly_searches);
    let _ = writeln!(out, "  {:<22}{:>10}", "Daily searches", m.daily_searches);
    let _ = writeln!(out, "  {:<22}{:>10}", "Yearly searches", m.yearly_searches);
    let _ = writeln!(out, "  {:<22}{:>10.1}", "Competition", m.competition);
    let _ = writeln!(out, "  {:<22}{:>10.1}", "Difficulty", m.difficulty);
    let _ = writeln!(out, "  {:<22}{:>9}$", "CPC", format!("{:.2}", m.cpc));
    let _ = writeln!(
        out,
        "  {:<22}{:>9}%",
        "CTR",
        format!("{:.1}", m.click_metrics.click_through_rate)
    );
    let _ = writeln!(
        out,
        "  {:<22}{:>10}",
        "Organic clicks", m.click_metrics.organic_clicks
    );
    let _ = writeln!(
        out,
        "  {:<22}{:>10}",
        "Paid clicks", m.click_metrics.paid_clicks
    );
    let _ = writeln!(
        out,
        "  {:<22}{} organic, {} paid{}",
        "SERP",
        m.serp.organic_results,
        m.serp.paid_results,
        if m.serp.featured_snippets {
            ", featured snippet"
        } else {
            ""
        }
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Seasonality".bold());
    let months = m
        .seasonality
        .months
        .iter()
        .map(|month| format!("{month:>4}"))
        .collect::<String>();
    let values = m
        .seasonality
        .trend
        .iter()
        .map(|v| format!("{v:>4}"))
        .collect::<String>();
    let _ = writeln!(out, "  {}", months.dimmed());
    let _ = writeln!(out, "  {values}");

    let _ = writeln!(out);
    let shown = top.unwrap_or(report.suggestions.len());
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Suggestions ({} of {})",
            shown.min(report.suggestions.len()),
            report.suggestions.len()
        )
        .bold()
    );
    for s in report.suggestions.iter().take(shown) {
        let _ = writeln!(out, "{}", format_suggestion_line(s));
    }

    out
}

/// One suggestion as a single aligned line.
pub fn format_suggestion_line(s: &crate::core::KeywordSuggestion) -> String {
    format!(
        "  {:>3}  {:<36} {:<8} {:>6}  ${:<6} {:<14} {:>3}%",
        s.score.to_string().bold(),
        s.keyword,
        colorize_difficulty(s.difficulty),
        s.search_volume,
        format!("{:.2}", s.cpc),
        colorize_intent(s.intent),
        s.competition
    )
}

/// Format one page of filtered suggestions for the `suggest` command.
pub fn format_page_terminal(page: &Page) -> String {
    let mut out = String::new();
    if page.total_items == 0 {
        let _ = writeln!(out, "No suggestions match the active filters.");
        return out;
    }
    let _ = writeln!(
        out,
        "{}",
        format!(
            "Page {} of {} ({} suggestions)",
            page.page, page.total_pages, page.total_items
        )
        .bold()
    );
    if page.is_empty() {
        let _ = writeln!(out, "  (page out of range)");
    }
    for s in &page.items {
        let _ = writeln!(out, "{}", format_suggestion_line(s));
    }
    out
}

fn colorize_difficulty(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => "Easy".green(),
        Difficulty::Medium => "Medium".yellow(),
        Difficulty::Hard => "Hard".red(),
    }
}

fn colorize_intent(intent: SearchIntent) -> ColoredString {
    match intent {
        SearchIntent::Informational => "Informational".blue(),
        SearchIntent::Transactional => "Transactional".green(),
        SearchIntent::Navigational => "Navigational".purple(),
        SearchIntent::Commercial => "Commercial".yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::rng::pair_for_seed;
    use crate::synth::{synthesize_metrics, synthesize_suggestions};
    use crate::view::{filter_and_paginate, SuggestionFilter};

    fn sample_report() -> KeywordReport {
        let (mut mrng, mut srng) = pair_for_seed(Some(5));
        KeywordReport::new(
            "seo tools",
            synthesize_metrics("seo tools", &mut mrng),
            synthesize_suggestions("seo tools", &mut srng),
        )
    }

    #[test]
    fn test_report_contains_sections() {
        colored::control::set_override(false);
        let text = format_report_terminal(&sample_report(), None);
        assert!(text.contains("Keyword: seo tools"));
        assert!(text.contains("Seasonality"));
        assert!(text.contains("Suggestions"));
        assert!(text.contains("Monthly searches"));
    }

    #[test]
    fn test_top_limits_suggestion_lines() {
        colored::control::set_override(false);
        let report = sample_report();
        let text = format_report_terminal(&report, Some(3));
        assert!(text.contains(&format!("Suggestions (3 of {})", report.suggestions.len())));
    }

    #[test]
    fn test_page_formatting() {
        colored::control::set_override(false);
        let report = sample_report();
        let page = filter_and_paginate(&report.suggestions, &SuggestionFilter::new(), 1, 10);
        let text = format_page_terminal(&page);
        assert!(text.contains("Page 1 of"));
    }

    #[test]
    fn test_file_output_never_contains_ansi_escapes() {
        // Force colors on so the file guard, not tty detection, is
        // what keeps the escapes out.
        std::env::set_var("CLICOLOR_FORCE", "1");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        output_terminal(&sample_report(), None, Some(path.clone()), false).unwrap();
        std::env::remove_var("CLICOLOR_FORCE");

        let text = std::fs::read_to_string(path).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Keyword: seo tools"));
    }

    #[test]
    fn test_empty_page_message() {
        colored::control::set_override(false);
        let page = filter_and_paginate(&[], &SuggestionFilter::new(), 1, 10);
        let text = format_page_terminal(&page);
        assert!(text.contains("No suggestions match"));
    }
}
