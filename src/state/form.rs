//! Input form state: mood, time of day, theme and the focused control.

use crate::models::{GenerationInput, Mood, TimeOfDay, THEME_SUGGESTIONS};

/// Which form control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Mood,
    TimeOfDay,
    Theme,
    Suggestions,
    Generate,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Mood,
        FormFocus::TimeOfDay,
        FormFocus::Theme,
        FormFocus::Suggestions,
        FormFocus::Generate,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Mutable form state. The input is overwritten in place, never rebuilt.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: GenerationInput,
    /// Cursor position in the theme, in chars
    cursor: usize,
    focus: FormFocus,
    /// Highlighted quick-pick chip
    suggestion: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &GenerationInput {
        &self.input
    }

    pub fn mood(&self) -> Mood {
        self.input.mood
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.input.time_of_day
    }

    pub fn theme(&self) -> &str {
        &self.input.theme
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn selected_suggestion(&self) -> usize {
        self.suggestion
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.input.mood = mood;
    }

    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.input.time_of_day = time_of_day;
    }

    /// Replace the theme and park the cursor at its end.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.input.theme = theme.into();
        self.cursor = self.input.theme.chars().count();
    }

    /// Cycle the focused select (or suggestion chip) forward or back.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            FormFocus::Mood => {
                let mood = self.input.mood;
                self.input.mood = if forward { mood.next() } else { mood.prev() };
            }
            FormFocus::TimeOfDay => {
                let time = self.input.time_of_day;
                self.input.time_of_day = if forward { time.next() } else { time.prev() };
            }
            FormFocus::Suggestions => {
                let len = THEME_SUGGESTIONS.len();
                self.suggestion = if forward {
                    (self.suggestion + 1) % len
                } else {
                    (self.suggestion + len - 1) % len
                };
            }
            FormFocus::Theme => {
                if forward {
                    self.cursor_right();
                } else {
                    self.cursor_left();
                }
            }
            FormFocus::Generate => {}
        }
    }

    /// Overwrite the theme with the highlighted suggestion.
    pub fn apply_suggestion(&mut self) {
        if let Some(theme) = THEME_SUGGESTIONS.get(self.suggestion) {
            self.set_theme(*theme);
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .theme
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.theme.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.theme.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.input.theme.remove(idx);
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.input.theme.chars().count() {
            let idx = self.byte_index();
            self.input.theme.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.theme.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.theme.chars().count();
    }

    pub fn clear_theme(&mut self) {
        self.set_theme(String::new());
    }
}
