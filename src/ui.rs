//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Two sequence input fields
//! - The translated proteins
//! - The comparison result (stacked-bar chart or match counts)
//! - Status bar with mode and settings
//! - Help overlay

pub mod chart;
pub mod glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::compare::PositionalComparison;
use crate::model::{AppMode, AppState, Field, InputField};
use crate::pipeline::{
    ComparisonError, ComparisonReport, ComparisonResult, Severity, TranslatedInput,
};
use crate::translate::ProteinSequence;
use chart::{StackedBarChart, FIRST_COLOR, SECOND_COLOR};

/// Height of an input field, borders included.
const INPUT_HEIGHT: u16 = 3;
/// Rows one protein may take before the rest is summarised.
const MAX_PROTEIN_ROWS: usize = 4;
/// Width of the "1: " prefix in front of each protein.
const PROTEIN_PREFIX_WIDTH: usize = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

const HELP_TEXT: &[&str] = &[
    "Type or paste a DNA sequence into each field.",
    "",
    "Tab / Shift+Tab   switch field",
    "Enter             compare",
    "F2                toggle frequency / positional",
    "Ctrl+L            clear field",
    "Esc               command mode",
    "",
    ":mode freq|pos            comparison mode",
    ":policy first|longer|compared",
    ":strip                    toggle whitespace removal",
    ":swap  :clear  :compare  :q",
    "",
    "Protein     chain of amino acids; DNA encodes",
    "            one amino acid per codon (3 bases)",
    "Nucleotide  basic unit of DNA: A, C, G or T",
    "Similarity  close organisms share most of",
    "            their DNA, and so their proteins",
    "",
    "Press any key to close.",
];

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let protein_height = protein_panel_height(state, area.width.saturating_sub(2) as usize);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(protein_height),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_input(frame, state, Field::First, layout[0]);
    render_input(frame, state, Field::Second, layout[1]);
    render_proteins(frame, state, layout[2]);
    render_result(frame, state, layout[3]);
    render_status_bar(frame, state, layout[4]);

    if state.show_help {
        render_help(frame, area);
    }
}

/// First character to show so that the cursor stays visible.
pub fn scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    (cursor + 1).saturating_sub(width)
}

fn input_line<'a>(field: &'a InputField, width: usize, focused: bool) -> Line<'a> {
    let start = scroll_offset(field.cursor(), width);
    let visible: Vec<char> = field.text().chars().skip(start).take(width).collect();
    if !focused {
        return Line::from(visible.into_iter().collect::<String>());
    }

    let cursor = field.cursor() - start;
    let before: String = visible.iter().take(cursor).collect();
    let at: String = visible
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = visible.iter().skip(cursor + 1).collect();
    Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}

/// Renders one sequence input field.
fn render_input(frame: &mut Frame, state: &AppState, field: Field, area: Rect) {
    let focused = state.focus == field && state.mode == AppMode::Editing;
    let input = state.field(field);
    let (name, color) = match field {
        Field::First => ("Sequence 1", FIRST_COLOR),
        Field::Second => ("Sequence 2", SECOND_COLOR),
    };
    let marker = if state.focus == field {
        state.glyphs.focus_marker
    } else {
        " "
    };
    let title = format!("{} {} [{} nt]", marker, name, input.len());

    let border_style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(input_line(input, width, focused)).block(block);
    frame.render_widget(paragraph, area);
}

fn dropped_note(input: &TranslatedInput) -> String {
    if input.dropped > 0 {
        format!("  ({} trailing nt dropped)", input.dropped)
    } else {
        String::new()
    }
}

fn more_marker(hidden: usize) -> String {
    format!(" ... (+{} more)", hidden)
}

/// Rows one protein takes in a panel `width` cells wide.
fn protein_rows(input: &TranslatedInput, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let len = PROTEIN_PREFIX_WIDTH + input.protein.to_string().len() + dropped_note(input).len();
    len.div_ceil(width).clamp(1, MAX_PROTEIN_ROWS)
}

/// Height of the protein panel, borders included.
fn protein_panel_height(state: &AppState, width: usize) -> u16 {
    let rows = match &state.outcome {
        Some(Ok(report)) => {
            protein_rows(&report.first, width) + protein_rows(&report.second, width)
        }
        _ => 2,
    };
    rows as u16 + 2
}

/// Three-letter residues that fit in `capacity` characters.
///
/// Returns the shown text and how many residues were left out. When some
/// are left out, room is kept for the "... (+N more)" marker.
fn fit_protein(protein: &ProteinSequence, capacity: usize) -> (String, usize) {
    let full = protein.to_string();
    if full.len() <= capacity {
        return (full, 0);
    }
    let total = protein.len();
    let mut text = String::new();
    let mut shown = 0;
    for aa in protein.iter() {
        let code = aa.three_letter();
        if text.len() + code.len() + more_marker(total - shown - 1).len() > capacity {
            break;
        }
        text.push_str(code);
        shown += 1;
    }
    (text, total - shown)
}

/// Splits styled text into lines of at most `width` characters.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;
    for span in spans {
        let mut rest: &str = &span.content;
        while !rest.is_empty() {
            if used == width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            let take = (width - used).min(rest.chars().count());
            let split = rest
                .char_indices()
                .nth(take)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            current.push(Span::styled(rest[..split].to_string(), span.style));
            used += take;
            rest = &rest[split..];
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Renders the translated proteins of the last successful comparison.
fn render_proteins(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Proteins");

    let lines: Vec<Line> = match &state.outcome {
        Some(Ok(report)) => protein_lines(report, area.width.saturating_sub(2) as usize),
        _ => vec![Line::from(Span::styled(
            "Enter two sequences and press Enter to compare.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn protein_lines(report: &ComparisonReport, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (label, input, color) in [
        ("1", &report.first, FIRST_COLOR),
        ("2", &report.second, SECOND_COLOR),
    ] {
        let note = dropped_note(input);
        let rows = protein_rows(input, width);
        let capacity = (rows * width).saturating_sub(PROTEIN_PREFIX_WIDTH + note.len());
        let (text, hidden) = fit_protein(&input.protein, capacity);

        let mut spans = vec![
            Span::styled(
                format!("{}: ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(text),
        ];
        if hidden > 0 {
            spans.push(Span::styled(more_marker(hidden), Style::default().fg(Color::Yellow)));
        }
        if !note.is_empty() {
            spans.push(Span::styled(note, Style::default().fg(Color::DarkGray)));
        }
        lines.extend(wrap_spans(spans, width));
    }
    lines
}

/// Renders the chart, the match counts, or the last error.
fn render_result(frame: &mut Frame, state: &AppState, area: Rect) {
    match &state.outcome {
        Some(Ok(report)) => match &report.result {
            ComparisonResult::Frequency(cmp) => {
                let title = Line::from(vec![
                    Span::raw("Amino acids  "),
                    Span::styled(state.glyphs.bar_first, Style::default().fg(FIRST_COLOR)),
                    Span::raw(" seq 1  "),
                    Span::styled(state.glyphs.bar_second, Style::default().fg(SECOND_COLOR)),
                    Span::raw(" seq 2"),
                ]);
                let block = Block::default().borders(Borders::ALL).title(title);
                let inner = block.inner(area);
                frame.render_widget(block, area);
                frame.render_widget(StackedBarChart::new(cmp, state.glyphs), inner);
            }
            ComparisonResult::Positional(cmp) => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title("Positional comparison");
                let paragraph = Paragraph::new(positional_lines(cmp)).block(block);
                frame.render_widget(paragraph, area);
            }
        },
        Some(Err(err)) => render_error(frame, err, area),
        None => {
            let block = Block::default().borders(Borders::ALL).title("Result");
            frame.render_widget(block, area);
        }
    }
}

fn positional_lines(cmp: &PositionalComparison) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Matches:     "),
            Span::styled(cmp.matches.to_string(), bold.fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Differences: "),
            Span::styled(cmp.mismatches.to_string(), bold.fg(Color::Red)),
            Span::styled(
                format!("  (policy: {})", cmp.policy.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    if cmp.unpaired > 0 {
        lines.push(Line::from(format!("Unpaired:    {}", cmp.unpaired)));
    }
    lines.push(Line::from(format!(
        "Identity:    {:.1}% over {} positions",
        cmp.identity(),
        cmp.compared
    )));
    lines
}

fn render_error(frame: &mut Frame, err: &ComparisonError, area: Rect) {
    let (title, color) = match err.severity() {
        Severity::Warning => ("Warning", Color::Yellow),
        Severity::Error => ("Error", Color::Red),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title);
    let paragraph = Paragraph::new(Span::styled(err.to_string(), Style::default().fg(color)))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Editing => ("EDIT", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let settings = format!(
        "{} | policy {} | {} ",
        state.comparison_mode.label(),
        state.policy.label(),
        state.translator.label()
    );

    let message = state.status_message.as_deref().unwrap_or("");
    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let message_bg = match &state.outcome {
        Some(Err(err)) if command_str.is_empty() => match err.severity() {
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        },
        _ => Color::Cyan,
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(left_content, Style::default().fg(Color::Black).bg(message_bg)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + settings.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            settings,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// A rectangle of the given size centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, HELP_TEXT.len() as u16 + 2, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("Help");
    let lines: Vec<Line> = HELP_TEXT.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
