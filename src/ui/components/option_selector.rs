//! Option Selector Component
//!
//! A horizontal row of choices with a `▶` marker on the selected one. Used
//! for the mood and time-of-day selects and the theme suggestion chips.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

/// Build the selector line.
///
/// When `focused` is false the selection is shown but not highlighted.
pub fn render_option_selector(
    labels: &[&str],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(labels.len() * 3);
    let spacing = if ctx.is_compact() { " " } else { "  " };

    for (idx, label) in labels.iter().enumerate() {
        if idx == selected {
            let (marker, text) = if focused {
                (
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                    Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
                )
            } else {
                (Style::default().fg(COLOR_DIM), Style::default().fg(COLOR_TEXT))
            };
            spans.push(Span::styled("▶ ", marker));
            spans.push(Span::styled(label.to_string(), text));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }
        if idx + 1 < labels.len() {
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_on_selected() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_option_selector(&["Morning", "Night"], 1, true, &ctx);
        assert_eq!(text(&line), "  Morning  ▶ Night");
    }

    #[test]
    fn test_unfocused_selection_not_bold() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_option_selector(&["A", "B"], 0, false, &ctx);
        assert!(!line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
