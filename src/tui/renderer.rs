//! Rendering for the dashboard: search box, analytics, suggestions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::theme::Theme;
use crate::core::{KeywordMetrics, Trend};

/// Render the full dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(10),   // Panels
            Constraint::Length(2), // Key hints
        ])
        .split(frame.area());

    render_search_box(frame, app, &theme, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_metrics_panel(frame, app, &theme, panels[0]);
    render_suggestions_panel(frame, app, &theme, panels[1]);
    render_hints(frame, app, &theme, chunks[2]);
}

fn render_search_box(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let focused = app.mode() == InputMode::Search;
    let border_style = if focused {
        theme.focused_style()
    } else {
        theme.label_style()
    };

    let content = if focused {
        format!("{}▏", app.search_input())
    } else if app.search_input().is_empty() {
        "press 's' to search".to_string()
    } else {
        app.search_input().to_string()
    };

    let widget = Paragraph::new(content).style(theme.value_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}

fn render_metrics_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(match app.keyword() {
            Some(keyword) => format!("Analytics: {keyword}"),
            None => "Analytics".to_string(),
        })
        .border_style(theme.label_style());

    let lines = if app.is_searching() {
        vec![Line::from(Span::styled(
            "synthesizing…",
            theme.label_style(),
        ))]
    } else if let Some(metrics) = app.metrics() {
        metric_lines(metrics, theme)
    } else {
        vec![Line::from(Span::styled(
            "enter a keyword to analyze",
            theme.label_style(),
        ))]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Analytics panel body: one metric per line, seasonality at the bottom.
fn metric_lines<'a>(metrics: &'a KeywordMetrics, theme: &Theme) -> Vec<Line<'a>> {
    let label = |text: &'a str| Span::styled(format!("{text:<18}"), theme.label_style());
    let value = |text: String| Span::styled(text, theme.value_style());

    let trend = match metrics.trend {
        Trend::Up => Span::styled("↑ up", theme.up_style()),
        Trend::Down => Span::styled("↓ down", theme.down_style()),
    };

    let mut lines = vec![
        Line::from(vec![
            label("Strength"),
            value(format!("{:.1}", metrics.strength)),
        ]),
        Line::from(vec![label("Trend"), trend]),
        Line::from(vec![
            label("Monthly searches"),
            value(metrics.monthly_searches.to_string()),
        ]),
        Line::from(vec![
            label("Daily searches"),
            value(metrics.daily_searches.to_string()),
        ]),
        Line::from(vec![
            label("Yearly searches"),
            value(metrics.yearly_searches.to_string()),
        ]),
        Line::from(vec![
            label("Competition"),
            value(format!("{:.1}", metrics.competition)),
        ]),
        Line::from(vec![
            label("Difficulty"),
            value(format!("{:.1}", metrics.difficulty)),
        ]),
        Line::from(vec![label("CPC"), value(format!("${:.2}", metrics.cpc))]),
        Line::from(vec![
            label("CTR"),
            value(format!("{:.1}%", metrics.click_metrics.click_through_rate)),
        ]),
        Line::from(vec![
            label("Clicks"),
            value(format!(
                "{} organic / {} paid",
                metrics.click_metrics.organic_clicks, metrics.click_metrics.paid_clicks
            )),
        ]),
        Line::from(vec![
            label("SERP"),
            value(format!(
                "{} organic, {} paid{}",
                metrics.serp.organic_results,
                metrics.serp.paid_results,
                if metrics.serp.featured_snippets {
                    ", snippet"
                } else {
                    ""
                }
            )),
        ]),
        Line::from(""),
        Line::from(Span::styled("Seasonality", theme.focused_style())),
    ];

    for (month, val) in metrics
        .seasonality
        .months
        .iter()
        .zip(metrics.seasonality.trend.iter())
    {
        lines.push(Line::from(vec![
            Span::styled(format!("{month:<6}"), theme.label_style()),
            Span::styled(seasonality_bar(*val), theme.focused_style()),
            Span::styled(format!(" {val}"), theme.value_style()),
        ]));
    }

    lines
}

/// Scale a seasonality value in [80, 120) to a bar of 1..=20 cells.
fn seasonality_bar(value: u32) -> String {
    let cells = ((value.saturating_sub(79)) / 2).clamp(1, 20) as usize;
    "▇".repeat(cells)
}

fn render_suggestions_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let page = app.view().visible();
    let filter = app.view().filter();

    let title = if page.total_items == 0 {
        "Suggestions".to_string()
    } else {
        format!(
            "Suggestions {}/{} ({} matching)",
            page.page,
            page.total_pages.max(1),
            page.total_items
        )
    };

    let focused = app.mode() == InputMode::Filter;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if focused {
            theme.focused_style()
        } else {
            theme.label_style()
        });

    let mut items: Vec<ListItem> = Vec::new();

    if focused || !filter.is_empty() {
        let filter_line = Line::from(vec![
            Span::styled("filter: ", theme.label_style()),
            Span::styled(filter.display_name(), theme.focused_style()),
        ]);
        items.push(ListItem::new(filter_line));
        items.push(ListItem::new(Line::from("")));
    }

    for s in &page.items {
        let line = Line::from(vec![
            Span::styled(format!("{:>3} ", s.score), theme.focused_style()),
            Span::styled(format!("{:<28}", truncate(&s.keyword, 28)), theme.value_style()),
            Span::styled(format!("{:<7}", s.difficulty.to_string()), theme.difficulty_style(s.difficulty)),
            Span::styled(format!("{:<14}", s.intent.to_string()), theme.intent_style(s.intent)),
            Span::styled(format!("${:.2}", s.cpc), theme.label_style()),
        ]);
        items.push(ListItem::new(line));
    }

    if page.items.is_empty() && !app.is_searching() {
        items.push(ListItem::new(Line::from(Span::styled(
            "no matching suggestions",
            theme.label_style(),
        ))));
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn render_hints(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let hints = match app.mode() {
        InputMode::Search => "type keyword  Enter analyze  Esc cancel",
        InputMode::Filter => "type to filter  Enter/Esc done",
        InputMode::Browse => {
            "s search  f filter  d difficulty  i intent  c clear  ←/→ page  q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(hints).style(theme.label_style()),
        area,
    );
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
