//! Code pane rendering with syntax highlighting
//!
//! Shows the source of the selected algorithm's generator. Highlighting is
//! applied only when the descriptor's language tag is `rust`; any other tag
//! is rendered as plain text.
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer.

use crate::registry::Descriptor;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for Rust source
fn highlight_rust(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        // Line and doc comments
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                &line[offset..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        // Strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += if chars[end].1 == '\\' { 2 } else { 1 };
            }
            end = (end + 1).min(chars.len());
            let stop = chars.get(end).map_or(line.len(), |&(o, _)| o);
            spans.push(Span::styled(
                &line[offset..stop],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Delimiters end the current word
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = word_style(&current_word, c == '(' || c == '!');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "u8" | "u16" | "u32" | "u64" | "usize" | "i32" | "i64" | "isize" | "bool" | "Self"
        | "Vec" | "Option" | "Some" | "None" | "Box" => {
            Style::default().fg(DEFAULT_THEME.type_name) // Types
        }
        "fn" | "let" | "mut" | "if" | "else" | "while" | "for" | "in" | "loop" | "match"
        | "return" | "break" | "continue" | "impl" | "pub" | "struct" | "enum" | "use"
        | "mod" | "const" | "self" | "crate" | "super" | "type" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD), // Keywords
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if word.starts_with(char::is_uppercase) => Style::default().fg(DEFAULT_THEME.type_name),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg), // Variables/Identifiers
    }
}

/// Clamp the scroll offset so the last page of source stays filled
pub fn clamp_scroll(scroll: usize, total_lines: usize, visible_height: usize) -> usize {
    scroll.min(total_lines.saturating_sub(visible_height))
}

/// Render the code pane
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    descriptor: Option<&Descriptor>,
    scroll_offset: &mut usize,
) {
    let title = match descriptor {
        Some(d) => format!(" Code ({}) ", d.language),
        None => " Code ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(descriptor) = descriptor else {
        let paragraph = Paragraph::new("(no algorithm selected)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<&str> = descriptor.source.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    *scroll_offset = clamp_scroll(*scroll_offset, lines.len(), visible_height);

    let highlight = descriptor.language == "rust";
    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            if highlight {
                spans.extend(highlight_rust(line).spans);
            } else {
                spans.push(Span::raw(*line));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
