//! Input form panel: mood, time of day, theme and the generate button.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::models::{Mood, TimeOfDay, THEME_SUGGESTIONS};
use crate::state::{FormFocus, FormState};
use crate::ui::components::render_option_selector;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DEEP_TEAL, COLOR_DIM, COLOR_LIGHT_TEAL, COLOR_TEXT,
};

const THEME_PLACEHOLDER: &str = "e.g. gratitude, letting go, family";

/// Label above each control, highlighted when focused.
fn label(text: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    Line::from(Span::styled(text, style))
}

/// The theme input line, with a block cursor when focused.
pub fn theme_line(form: &FormState) -> Line<'static> {
    let focused = form.focus() == FormFocus::Theme;
    let theme = form.theme();

    if theme.is_empty() && !focused {
        return Line::from(Span::styled(
            THEME_PLACEHOLDER,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
    }
    if !focused {
        return Line::from(Span::styled(theme.to_string(), Style::default().fg(COLOR_TEXT)));
    }

    let cursor = form.cursor();
    let before: String = theme.chars().take(cursor).collect();
    let at: String = theme.chars().nth(cursor).map(String::from).unwrap_or_else(|| " ".into());
    let after: String = theme.chars().skip(cursor + 1).collect();
    let text = Style::default().fg(COLOR_TEXT);
    Line::from(vec![
        Span::styled(before, text),
        Span::styled(at, text.add_modifier(Modifier::REVERSED)),
        Span::styled(after, text),
    ])
}

/// The generate button. Shows a busy label and is dimmed while loading.
pub fn generate_button(focused: bool, loading: bool) -> Line<'static> {
    if loading {
        return Line::from(Span::styled(
            "  Generating\u{2026}  ",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
    }
    let style = if focused {
        Style::default()
            .fg(COLOR_TEXT)
            .bg(COLOR_LIGHT_TEAL)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT).bg(COLOR_DEEP_TEAL)
    };
    Line::from(Span::styled("  Get My Prompt  ", style))
}

/// All form lines, top to bottom.
pub fn form_lines(form: &FormState, loading: bool, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let focus = form.focus();

    let moods: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
    let mood_idx = Mood::ALL.iter().position(|m| *m == form.mood()).unwrap_or(0);
    let times: Vec<&str> = TimeOfDay::ALL.iter().map(|t| t.as_str()).collect();
    let time_idx = TimeOfDay::ALL
        .iter()
        .position(|t| *t == form.time_of_day())
        .unwrap_or(0);

    let mut lines = vec![
        label("How are you feeling?", focus == FormFocus::Mood),
        render_option_selector(&moods, mood_idx, focus == FormFocus::Mood, ctx),
        Line::raw(""),
        label("Time of day", focus == FormFocus::TimeOfDay),
        render_option_selector(&times, time_idx, focus == FormFocus::TimeOfDay, ctx),
        Line::raw(""),
        label("Theme (optional)", focus == FormFocus::Theme),
        theme_line(form),
        Line::raw(""),
        label("Suggestions", focus == FormFocus::Suggestions),
        render_option_selector(
            &THEME_SUGGESTIONS,
            form.selected_suggestion(),
            focus == FormFocus::Suggestions,
            ctx,
        ),
        Line::raw(""),
    ];
    lines.push(generate_button(focus == FormFocus::Generate, loading));
    lines
}

pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    loading: bool,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .title(" Check In ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .padding(Padding::horizontal(1));
    let paragraph = Paragraph::new(form_lines(form, loading, ctx))
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
