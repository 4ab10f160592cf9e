//! Result panel.
//!
//! [`ResultView::from_state`] is a pure mapping from the generation state to
//! what the panel shows; [`render_result`] only draws that view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::models::GenerationResult;
use crate::state::{GenerationState, ShareStatus};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SKELETON, COLOR_SKELETON_PULSE,
    COLOR_SOFT_GREEN, COLOR_TEXT,
};

pub const PLACEHOLDER_TITLE: &str = "Your personal journaling prompt will appear here.";
pub const PLACEHOLDER_SUBTITLE: &str = "Take a deep breath and start your reflection journey.";
pub const AFFIRMATION_HEADING: &str = "Today's Affirmation";

/// Skeleton bar widths as a percentage of the panel width.
const SKELETON_BARS: [u16; 5] = [90, 75, 0, 60, 40];

/// What the result panel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<'a> {
    Placeholder,
    Skeleton,
    Error(&'a str),
    Content(&'a GenerationResult),
}

impl<'a> ResultView<'a> {
    pub fn from_state(state: &'a GenerationState) -> Self {
        match state {
            GenerationState::Idle => ResultView::Placeholder,
            GenerationState::Loading => ResultView::Skeleton,
            GenerationState::Failure(message) => ResultView::Error(message),
            GenerationState::Success(result) => ResultView::Content(result),
        }
    }

    /// Text lines for this view, without the share row.
    pub fn lines(self, width: u16, tick: u64) -> Vec<Line<'a>> {
        match self {
            ResultView::Placeholder => vec![
                Line::raw(""),
                Line::styled(PLACEHOLDER_TITLE, Style::default().fg(COLOR_TEXT)),
                Line::raw(""),
                Line::styled(PLACEHOLDER_SUBTITLE, Style::default().fg(COLOR_DIM)),
            ],
            ResultView::Skeleton => skeleton_lines(width, tick),
            ResultView::Error(message) => vec![
                Line::raw(""),
                Line::styled(message, Style::default().fg(COLOR_ERROR)),
            ],
            ResultView::Content(result) => vec![
                Line::styled(
                    format!("\u{201C}{}\u{201D}", result.prompt),
                    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled(
                    result.encouragement.as_str(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::ITALIC),
                ),
                Line::raw(""),
                Line::styled(
                    AFFIRMATION_HEADING.to_uppercase(),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    result.affirmation.as_str(),
                    Style::default().fg(COLOR_SOFT_GREEN),
                ),
            ],
        }
    }
}

fn skeleton_lines(width: u16, tick: u64) -> Vec<Line<'static>> {
    let color = if (tick / 8) % 2 == 0 {
        COLOR_SKELETON
    } else {
        COLOR_SKELETON_PULSE
    };
    SKELETON_BARS
        .iter()
        .map(|pct| {
            let len = (width as u32 * *pct as u32 / 100) as usize;
            Line::styled("\u{2588}".repeat(len), Style::default().fg(color))
        })
        .collect()
}

/// The share row shown under a successful result.
pub fn share_line(status: &ShareStatus) -> Line<'static> {
    if status.is_copied() {
        Line::from(Span::styled(
            "\u{2713} Copied!",
            Style::default().fg(COLOR_SOFT_GREEN).add_modifier(Modifier::BOLD),
        ))
    } else if status.is_busy() {
        Line::from(Span::styled("Sharing\u{2026}", Style::default().fg(COLOR_DIM)))
    } else {
        Line::from(vec![
            Span::styled("[Ctrl+S]", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" Share", Style::default().fg(COLOR_TEXT)),
        ])
    }
}

pub fn render_result(
    frame: &mut Frame,
    area: Rect,
    state: &GenerationState,
    share: &ShareStatus,
    tick: u64,
) {
    let block = Block::default()
        .title(" Your Prompt ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .padding(Padding::horizontal(1));
    let inner_width = block.inner(area).width;

    let view = ResultView::from_state(state);
    let mut lines = view.lines(inner_width, tick);
    if matches!(view, ResultView::Content(_)) {
        lines.push(Line::raw(""));
        lines.push(share_line(share));
    }

    let alignment = match view {
        ResultView::Skeleton => Alignment::Left,
        _ => Alignment::Center,
    };
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
