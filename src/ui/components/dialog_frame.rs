//! Dialog Frame Component
//!
//! A centered, rounded-border box drawn over the screen. Used by the
//! share-failure alert.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_HEADER};

/// Size and title of a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 64,
        }
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

/// Outer rect of a dialog centered in `area`.
pub fn dialog_area(area: Rect, ctx: &LayoutContext, config: &DialogFrameConfig) -> Rect {
    let width = if ctx.is_extra_small() {
        area.width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
    .min(area.width);
    let height = (config.content_height + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clear the background, draw the border and return the inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let outer = dialog_area(area, ctx, config);
    frame.render_widget(Clear, outer);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);
    inner
}
