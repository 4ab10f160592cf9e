//! Header, footer and keybind hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::FormFocus;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub const TITLE: &str = "Mindful Moments";
pub const SUBTITLE: &str = "Your daily space for reflection";
pub const CREDIT: &str = "Crafted with care for your well-being.";

pub fn render_header(frame: &mut Frame, area: Rect, ctx: &LayoutContext) {
    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ));
    let lines = if ctx.is_compact() {
        vec![title]
    } else {
        vec![
            title,
            Line::from(Span::styled(SUBTITLE, Style::default().fg(COLOR_DIM))),
        ]
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Hints for the current focus and app state.
pub fn keybind_hints(app: &App) -> Line<'static> {
    let mut hints: Vec<(&str, &str)> = Vec::new();
    match app.form.focus() {
        FormFocus::Mood | FormFocus::TimeOfDay => hints.push(("\u{2190}/\u{2192}", "change")),
        FormFocus::Theme => hints.push(("type", "edit theme")),
        FormFocus::Suggestions => hints.push(("Enter", "use suggestion")),
        FormFocus::Generate => {}
    }
    hints.push(("Tab", "next"));
    if !app.is_generating() {
        hints.push(("Ctrl+G", "generate"));
    }
    if app.can_share() {
        hints.push(("Ctrl+S", "share"));
    }
    hints.push(("Ctrl+C", "quit"));

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (idx, (key, action)) in hints.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        keybind_hints(app),
        Line::from(Span::styled(
            CREDIT,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::harness;
    use crate::models::GenerationResult;
    use crate::share::ShareCard;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_follow_state() {
        let mut h = harness();
        let idle = text(&keybind_hints(&h.app));
        assert!(idle.contains("Ctrl+G generate"));
        assert!(!idle.contains("share"));

        h.app.generation.begin();
        assert!(!text(&keybind_hints(&h.app)).contains("generate"));

        h.app.share_card = Some(ShareCard::new(GenerationResult::new("p", "e", "a")));
        assert!(text(&keybind_hints(&h.app)).contains("Ctrl+S share"));
    }
}
