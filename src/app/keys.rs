//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::state::FormFocus;

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keybinds (always active)
        if ctrl {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                _ => {}
            }
        }

        // The alert blocks everything until dismissed.
        if self.share_status.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.share_status.dismiss_alert();
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('g') => {
                    self.trigger_generate();
                }
                KeyCode::Char('s') => {
                    self.trigger_share();
                }
                KeyCode::Char('u') if self.form.focus() == FormFocus::Theme => {
                    self.form.clear_theme();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Left => self.form.cycle(false),
            KeyCode::Right => self.form.cycle(true),
            KeyCode::Enter => match self.form.focus() {
                FormFocus::Generate => {
                    self.trigger_generate();
                }
                FormFocus::Suggestions => self.form.apply_suggestion(),
                _ => self.form.focus_next(),
            },
            _ if self.form.focus() == FormFocus::Theme => self.edit_theme(key.code),
            _ => {}
        }
    }

    /// Bracketed paste: goes into the theme when it has focus, on one line.
    pub fn handle_paste(&mut self, text: &str) {
        if self.form.focus() != FormFocus::Theme || self.share_status.alert().is_some() {
            return;
        }
        for c in text.chars() {
            self.form.insert_char(if c.is_control() { ' ' } else { c });
        }
        self.mark_dirty();
    }

    fn edit_theme(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.form.insert_char(c),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Delete => self.form.delete(),
            KeyCode::Home => self.form.cursor_home(),
            KeyCode::End => self.form.cursor_end(),
            _ => {}
        }
    }
}
