//! User input for a single generation.

use std::fmt;
use std::str::FromStr;

/// Quick-pick theme suggestions offered below the theme field.
pub const THEME_SUGGESTIONS: [&str; 6] =
    ["Gratitude", "Focus", "Self-love", "Healing", "Growth", "Rest"];

/// How the user is feeling right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Calm,
    #[default]
    Neutral,
    Hopeful,
    Anxious,
    Stressed,
    Sad,
    Tired,
}

impl Mood {
    /// All moods in the order they are offered in the form.
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Neutral,
        Mood::Hopeful,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Sad,
        Mood::Tired,
    ];

    /// Label sent to the provider and shown in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Hopeful => "Hopeful",
            Mood::Anxious => "Anxious",
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
            Mood::Tired => "Tired",
        }
    }

    /// Next option, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous option, wrapping around.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// The part of the day the prompt is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Case-insensitive match against the offered labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown mood '{}'", s))
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown time of day '{}'", s))
    }
}

/// Everything the provider needs for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationInput {
    pub mood: Mood,
    pub time_of_day: TimeOfDay,
    /// Free text, may be empty or whitespace.
    pub theme: String,
}

impl GenerationInput {
    pub fn new(mood: Mood, time_of_day: TimeOfDay, theme: impl Into<String>) -> Self {
        Self {
            mood,
            time_of_day,
            theme: theme.into(),
        }
    }

    /// The theme with surrounding whitespace removed, or `None` if blank.
    pub fn trimmed_theme(&self) -> Option<&str> {
        let theme = self.theme.trim();
        (!theme.is_empty()).then_some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_defaults() {
        let input = GenerationInput::default();
        assert_eq!(input.mood, Mood::Neutral);
        assert_eq!(input.time_of_day, TimeOfDay::Morning);
        assert!(input.theme.is_empty());
    }

    #[test]
    fn test_mood_cycles_both_ways() {
        assert_eq!(Mood::Tired.next(), Mood::Happy);
        assert_eq!(Mood::Happy.prev(), Mood::Tired);
        assert_eq!(Mood::Neutral.next().prev(), Mood::Neutral);
    }

    #[test]
    fn test_time_of_day_cycles_both_ways() {
        assert_eq!(TimeOfDay::Night.next(), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::Morning.prev(), TimeOfDay::Night);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("stressed".parse::<Mood>(), Ok(Mood::Stressed));
        assert_eq!(" EVENING ".parse::<TimeOfDay>(), Ok(TimeOfDay::Evening));
        assert!("furious".parse::<Mood>().is_err());
        assert!("dusk".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_trimmed_theme() {
        assert_eq!(GenerationInput::default().trimmed_theme(), None);
        let input = GenerationInput::new(Mood::Calm, TimeOfDay::Morning, "   ");
        assert_eq!(input.trimmed_theme(), None);
        let input = GenerationInput::new(Mood::Calm, TimeOfDay::Morning, "  Focus ");
        assert_eq!(input.trimmed_theme(), Some("Focus"));
    }
}
