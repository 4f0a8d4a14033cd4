//! UI state types shared by the engine and the TUI.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Focusable controls of the profile form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Industries,
    Revenue,
    Budget,
    Interest,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Email,
        FormField::Industries,
        FormField::Revenue,
        FormField::Budget,
        FormField::Interest,
        FormField::Submit,
    ];

    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Email => "Email:",
            FormField::Industries => "Select Industries:",
            FormField::Revenue => "Revenue:",
            FormField::Budget => "Budget:",
            FormField::Interest => "Interest:",
            FormField::Submit => "Submit",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}
