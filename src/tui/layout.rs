//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph};

use super::runtime::{App, Field};
use super::style;
use crate::report::{Chart, Report};

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(style::BACKGROUND).fg(style::ACCENT)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(12),   // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(body[1]);

    render_header(frame, app, rows[0]);
    render_inputs(frame, app, body[0]);
    render_results(frame, app, right[0]);
    render_chart(frame, app, right[1]);
    render_footer(frame, rows[2]);
}

/// Header bar: title and active preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " Clean Cooking Device Sizing ",
            Style::default()
                .fg(style::BACKGROUND)
                .bg(style::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" inputs: {} ", app.source)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// One gauge per input; the voltage dropdown shows its choice as text.
fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Inputs ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Field::ALL.map(|_| Constraint::Length(3)))
        .split(inner);

    for (field, slot) in Field::ALL.into_iter().zip(slots.iter()) {
        let selected = field == app.selected;
        let mut block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL);
        if selected {
            block = block
                .border_style(Style::default().add_modifier(Modifier::BOLD))
                .style(Style::default().bg(style::SELECTED_BG));
        }
        let value = app.value(field);

        match field.slider() {
            Some(slider) => {
                let label = if slider.step < 1.0 {
                    format!("{value:.1} {}", slider.unit)
                } else {
                    format!("{value:.0} {}", slider.unit)
                };
                let gauge = Gauge::default()
                    .block(block)
                    .gauge_style(Style::default().fg(style::ACCENT))
                    .ratio(slider.ratio(value))
                    .label(label);
                frame.render_widget(gauge, *slot);
            }
            None => {
                let text = format!("◀ {} ▶", app.voltage());
                frame.render_widget(Paragraph::new(text).block(block), *slot);
            }
        }
    }
}

/// Calculated requirements, or the calculator error.
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Calculated Requirements ")
        .borders(Borders::ALL);
    let request = app.request();
    let lines: Vec<Line> = match &app.result {
        Ok(result) => Report::new(&request, result)
            .lines()
            .into_iter()
            .map(|l| Line::from(format!(" {l}")))
            .collect(),
        Err(e) => vec![Line::from(Span::styled(
            format!(" {e}"),
            Style::default().fg(style::ERROR_FG).add_modifier(Modifier::BOLD),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Three-bar requirements chart on a light panel.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Ok(result) = &app.result else {
        let block = Block::default()
            .title(" System Requirements ")
            .borders(Borders::ALL);
        frame.render_widget(Paragraph::new(" no chart").block(block), area);
        return;
    };
    let chart = Chart::from_result(result);

    let bar_count = chart.bars.len().max(1) as u16;
    let gap = 2;
    let bar_width = (area.width.saturating_sub(2 + gap * (bar_count - 1)) / bar_count).max(1);

    // BarChart takes integer heights; keep two decimals of resolution.
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::default()
                .value((b.value * 100.0).round().max(0.0) as u64)
                .text_value(format!("{:.2}", b.value))
                .label(Line::from(b.label))
                .style(Style::default().fg(style::bar_color(i)))
                .value_style(
                    Style::default()
                        .fg(style::ACCENT)
                        .bg(style::BACKGROUND)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let widget = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", chart.title))
                .borders(Borders::ALL),
        )
        .style(Style::default().bg(style::CHART_BG).fg(style::BACKGROUND))
        .bar_width(bar_width)
        .bar_gap(gap)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(widget, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
