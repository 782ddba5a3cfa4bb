//! Bar chart of the displayed array

use crate::snapshot::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width and gap of each bar so that `count` bars fit in `inner_width` columns
fn bar_layout(inner_width: usize, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let gap = if inner_width >= count * 2 { 1 } else { 0 };
    let usable = inner_width.saturating_sub(gap * (count - 1));
    let width = (usable / count).clamp(1, u16::MAX as usize);
    (width as u16, gap as u16)
}

/// Render the array as vertical bars
pub fn render_bars_pane(frame: &mut Frame, area: Rect, array: &[Value], is_done: bool) {
    let bar_color = if is_done {
        DEFAULT_THEME.bar_done
    } else {
        DEFAULT_THEME.bar
    };

    let block = Block::default()
        .title(format!(" Array ({} values) ", array.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (bar_width, bar_gap) = bar_layout(area.width.saturating_sub(2) as usize, array.len());
    let max = array.iter().copied().max().unwrap_or(1).max(1);

    let bars: Vec<Bar> = array
        .iter()
        .map(|&value| {
            Bar::default()
                .value(u64::from(value))
                .style(Style::default().fg(bar_color))
                .value_style(
                    Style::default()
                        .bg(bar_color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(max));

    frame.render_widget(chart, area);
}
