//! Blocking alert shown when sharing and copying both failed.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

pub fn render_alert(frame: &mut Frame, area: Rect, message: &str, ctx: &LayoutContext) {
    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(COLOR_TEXT))))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" OK", Style::default().fg(COLOR_DIM)),
    ]));

    // Leave room for wrapping of the error detail.
    let content_height = lines.len() as u16 + 2;
    let inner = render_dialog_frame(
        frame,
        area,
        ctx,
        &DialogFrameConfig::new("Share failed", content_height),
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
