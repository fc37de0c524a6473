use crate::core::{KeywordReport, KeywordSuggestion};
use crate::view::Page;
use std::fmt::Write as _;
use std::io::Write;

const SUGGESTION_TABLE_HEADER: &str =
    "| Keyword | Score | Difficulty | Volume | CPC | Intent | Competition |";
const SUGGESTION_TABLE_RULE: &str =
    "|---------|-------|------------|--------|-----|--------|-------------|";

fn suggestion_row(s: &KeywordSuggestion) -> String {
    format!(
        "| {} | {} | {} | {} | ${:.2} | {} | {}% |",
        s.keyword, s.score, s.difficulty, s.search_volume, s.cpc, s.intent, s.competition
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &KeywordReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        // Terminal output has its own colored renderer; as a structured
        // writer it degrades to markdown.
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_seasonality(report)?;
        self.write_suggestions(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Keyword Report: {}", report.keyword)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        writeln!(self.writer, "## Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Strength | {:.1} |", m.strength)?;
        writeln!(self.writer, "| Trend | {} |", m.trend)?;
        writeln!(self.writer, "| Monthly searches | {} |", m.monthly_searches)?;
        writeln!(self.writer, "| Daily searches | {} |", m.daily_searches)?;
        writeln!(self.writer, "| Yearly searches | {} |", m.yearly_searches)?;
        writeln!(self.writer, "| Competition | {:.1} |", m.competition)?;
        writeln!(self.writer, "| Difficulty | {:.1} |", m.difficulty)?;
        writeln!(self.writer, "| CPC | ${:.2} |", m.cpc)?;
        writeln!(
            self.writer,
            "| CTR | {:.1}% |",
            m.click_metrics.click_through_rate
        )?;
        writeln!(
            self.writer,
            "| Organic clicks | {} |",
            m.click_metrics.organic_clicks
        )?;
        writeln!(
            self.writer,
            "| Paid clicks | {} |",
            m.click_metrics.paid_clicks
        )?;
        writeln!(
            self.writer,
            "| SERP | {} organic / {} paid{} |",
            m.serp.organic_results,
            m.serp.paid_results,
            if m.serp.featured_snippets {
                ", featured snippet"
            } else {
                ""
            }
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_seasonality(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        let s = &report.metrics.seasonality;
        writeln!(self.writer, "## Seasonality")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {} |", s.months.join(" | "))?;
        writeln!(self.writer, "|{}", "-----|".repeat(s.months.len()))?;
        let values: Vec<String> = s.trend.iter().map(|v| v.to_string()).collect();
        writeln!(self.writer, "| {} |", values.join(" | "))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_suggestions(&mut self, report: &KeywordReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "## Suggestions ({})",
            report.suggestions.len()
        )?;
        writeln!(self.writer)?;
        if report.suggestions.is_empty() {
            writeln!(self.writer, "No suggestions generated.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(self.writer, "{SUGGESTION_TABLE_HEADER}")?;
        writeln!(self.writer, "{SUGGESTION_TABLE_RULE}")?;
        for s in &report.suggestions {
            writeln!(self.writer, "{}", suggestion_row(s))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Render one filtered suggestion page as a markdown table.
pub fn format_page_markdown(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Suggestions (page {} of {}, {} matching)",
        page.page, page.total_pages, page.total_items
    );
    let _ = writeln!(out);
    if page.items.is_empty() {
        let _ = writeln!(out, "No suggestions on this page.");
        return out;
    }
    let _ = writeln!(out, "{SUGGESTION_TABLE_HEADER}");
    let _ = writeln!(out, "{SUGGESTION_TABLE_RULE}");
    for s in &page.items {
        let _ = writeln!(out, "{}", suggestion_row(s));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{synthesize_metrics, synthesize_suggestions};

    fn sample_report() -> KeywordReport {
        let (mut mrng, mut srng) = crate::synth::rng::pair_for_seed(Some(11));
        KeywordReport::new(
            "seo tools",
            synthesize_metrics("seo tools", &mut mrng),
            synthesize_suggestions("seo tools", &mut srng),
        )
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&sample_report()).unwrap();
        let parsed: KeywordReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.keyword, "seo tools");
        assert_eq!(parsed.metrics.seasonality.trend.len(), 12);
    }

    #[test]
    fn test_markdown_writer_sections() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(&sample_report()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Keyword Report: seo tools"));
        assert!(text.contains("## Metrics"));
        assert!(text.contains("## Seasonality"));
        assert!(text.contains("## Suggestions"));
    }

    #[test]
    fn test_page_markdown_is_a_table() {
        use crate::view::{filter_and_paginate, SuggestionFilter};

        let report = sample_report();
        let page = filter_and_paginate(&report.suggestions, &SuggestionFilter::new(), 1, 10);
        let text = format_page_markdown(&page);

        assert!(text.starts_with("# Suggestions (page 1 of"));
        assert!(text.contains("| Keyword |"));
        // Header line plus one row per item; the rule line starts "|-".
        let table_lines = text.lines().filter(|l| l.starts_with("| ")).count();
        assert_eq!(table_lines, 1 + page.items.len());
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_page_markdown_empty_page() {
        use crate::view::{filter_and_paginate, SuggestionFilter};

        let page = filter_and_paginate(&[], &SuggestionFilter::new(), 1, 10);
        let text = format_page_markdown(&page);
        assert!(text.contains("No suggestions on this page."));
    }

    #[test]
    fn test_markdown_writer_empty_suggestions() {
        let mut report = sample_report();
        report.suggestions.clear();
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf).write_report(&report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No suggestions generated."));
    }
}
