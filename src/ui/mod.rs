//! UI rendering for MindSpoke
//!
//! One screen: header, the input form beside (or above) the result panel,
//! footer with keybind hints, and the share-failure alert on top when set.
//!
//! Render functions receive a `LayoutContext` for responsive sizing; the
//! form and result panels stack vertically on narrow terminals.

mod alert;
mod chrome;
mod components;
pub mod form;
mod layout;
pub mod result;
mod theme;

pub use chrome::{CREDIT, SUBTITLE, TITLE};
pub use layout::{breakpoints, LayoutContext};
pub use result::{ResultView, AFFIRMATION_HEADING, PLACEHOLDER_SUBTITLE, PLACEHOLDER_TITLE};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_TEXT};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Rows needed by the form panel including borders.
const FORM_HEIGHT: u16 = 15;

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ctx.header_height()),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .areas(area);

    chrome::render_header(frame, header, &ctx);

    let [form_area, result_area] = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(4)])
            .areas(body)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .areas(body)
    };

    form::render_form(frame, form_area, &app.form, app.is_generating(), &ctx);
    result::render_result(
        frame,
        result_area,
        app.generation.state(),
        &app.share_status,
        app.tick_count,
    );
    chrome::render_footer(frame, footer, app);

    if let Some(message) = app.share_status.alert() {
        alert::render_alert(frame, area, message, &ctx);
    }
}
