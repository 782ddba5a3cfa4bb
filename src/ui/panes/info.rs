//! Algorithm menu and descriptor pane

use crate::registry::{Descriptor, Registry};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the numbered algorithm menu followed by the selected descriptor
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    registry: &Registry,
    selected: Option<&Descriptor>,
) {
    let block = Block::default()
        .title(" Algorithms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let selected_id = selected.map(|d| d.id);
    let mut lines: Vec<Line> = registry
        .iter()
        .enumerate()
        .map(|(index, algorithm)| {
            let is_selected = selected_id == Some(algorithm.id());
            let marker = if is_selected { "▶" } else { " " };
            let title_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            Line::from(vec![
                Span::styled(
                    format!("{} {} ", marker, index + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(algorithm.descriptor.title, title_style),
            ])
        })
        .collect();

    lines.push(Line::raw(""));

    match selected {
        Some(descriptor) => {
            lines.push(Line::from(Span::styled(
                descriptor.title,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                descriptor.description,
                Style::default().fg(DEFAULT_THEME.fg),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("Time:  ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    descriptor.complexity.time,
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Space: ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    descriptor.complexity.space,
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Press 1-8 to select an algorithm",
                Style::default().fg(DEFAULT_THEME.comment),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
