//! Color theme and glyphs for the advisor TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use advisor_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for form controls and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub cursor: &'static str,
    pub bar_filled: &'static str,
    pub bar_empty: &'static str,
    pub dropdown: &'static str,
    pub bullet: &'static str,
    pub error: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            checked: "[x]",
            unchecked: "[ ]",
            cursor: ">",
            bar_filled: "#",
            bar_empty: "-",
            dropdown: "v",
            bullet: "*",
            error: "!",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            checked: "☑",
            unchecked: "☐",
            cursor: "▸",
            bar_filled: "█",
            bar_empty: "░",
            dropdown: "▾",
            bullet: "•",
            error: "✗",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn label(palette: &Palette, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        }
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default().fg(palette.error)
    }

    #[must_use]
    pub fn button(palette: &Palette, focused: bool) -> Style {
        let style = Style::default()
            .fg(palette.bg_dark)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use advisor_types::ui::UiOptions;
    use ratatui::style::Color;

    use super::{glyphs, palette, spinner_frame};

    #[test]
    fn high_contrast_uses_terminal_colors() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        let p = palette(options);
        for color in [
            p.bg_dark,
            p.bg_highlight,
            p.text_primary,
            p.text_secondary,
            p.text_muted,
            p.primary,
            p.accent,
            p.success,
            p.warning,
            p.error,
        ] {
            assert!(!matches!(color, Color::Rgb(..)), "{color:?}");
        }
        assert!(matches!(palette(UiOptions::default()).bg_dark, Color::Rgb(..)));
    }

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        let frame0 = spinner_frame(0, options);
        let frame1 = spinner_frame(1, options);
        assert_ne!(frame0, frame1, "spinner should cycle through frames");
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        let frame0 = spinner_frame(0, options);
        assert_eq!(frame0, spinner_frame(1, options));
        assert_eq!(frame0, spinner_frame(100, options));
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [g.checked, g.unchecked, g.cursor, g.bar_filled, g.bar_empty, g.dropdown]
            .into_iter()
            .chain(g.spinner_frames.iter().copied())
        {
            assert!(glyph.is_ascii(), "{glyph:?} is not ascii");
        }
        assert_eq!(spinner_frame(0, UiOptions { reduced_motion: true, ..options }), "|");
    }
}
