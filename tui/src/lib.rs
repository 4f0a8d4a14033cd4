//! TUI rendering for the certification advisor using ratatui.
//!
//! The form and the results share one scrollable page. The status bar and
//! key hints stay pinned to the bottom row.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};
use unicode_width::UnicodeWidthStr;

use advisor_engine::{
    App, BLOCK_HEADING, FormField, INDUSTRY_CATALOG, Industry, RESULTS_HEADING, SubmissionPhase,
    industry_options,
};

pub const EMAIL_PLACEHOLDER: &str = "Enter your Email Address";

/// Visible rows of the industry picker.
const INDUSTRY_WINDOW: usize = 8;
const SLIDER_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 11;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_page(frame, app, chunks[0], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[1], &palette);
}

/// Line indices of interesting rows on the page.
#[derive(Debug, Default)]
struct Anchors {
    email_input: usize,
    fields: [usize; FormField::ALL.len()],
    results: usize,
}

fn field_slot(field: FormField) -> usize {
    FormField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default()
}

fn draw_page(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchors = Anchors::default();

    lines.push(Line::from(Span::styled(
        "Certification Advisor",
        styles::heading(palette),
    )));
    lines.push(Line::from(Span::styled(
        app.endpoint().to_string(),
        Style::default().fg(palette.text_muted),
    )));
    lines.push(Line::from(""));

    push_email(&mut lines, &mut anchors, app, palette, glyphs);
    push_industries(&mut lines, &mut anchors, app, palette, glyphs);
    push_amounts(&mut lines, &mut anchors, app, palette, glyphs);
    push_interest(&mut lines, &mut anchors, app, palette, glyphs);
    push_submit(&mut lines, &mut anchors, app, palette);

    anchors.results = lines.len();
    push_results(&mut lines, app, palette, glyphs);

    let width = area.width.saturating_sub(1);
    let row_of = |index: usize| wrapped_line_count(&lines[..index.min(lines.len())], width);

    let total_rows = wrapped_line_count(&lines, width);
    let max_scroll = total_rows.saturating_sub(area.height);
    let view = app.view_mut();
    view.results_mounted = true;
    view.update_scroll_max(max_scroll);
    if view.take_scroll_to_results() {
        view.scroll_to(row_of(anchors.results));
    }

    let focus = app.focus();
    if app.take_reveal_focus() {
        let row = row_of(anchors.fields[field_slot(focus)]);
        let view = app.view_mut();
        if row < view.scroll {
            view.scroll_to(row);
        } else if row >= view.scroll.saturating_add(area.height) {
            view.scroll_to(row.saturating_sub(area.height / 2));
        }
    }
    let scroll = app.view().scroll;

    if focus == FormField::Email {
        let row = row_of(anchors.email_input);
        if row >= scroll && row - scroll < area.height {
            let before = app.form().email_input().text_before_cursor().width();
            let col = (LABEL_WIDTH + 2 + before).min(usize::from(width.saturating_sub(1)));
            frame.set_cursor_position((area.x + col as u16, area.y + (row - scroll)));
        }
    }

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(
        page,
        Rect {
            width,
            ..area
        },
    );

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll as usize).position(scroll as usize);
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn label_span(field: FormField, focused: FormField, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("{:<LABEL_WIDTH$}", field.label()),
        styles::label(palette, field == focused),
    )
}

fn push_email(
    lines: &mut Vec<Line<'static>>,
    anchors: &mut Anchors,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let form = app.form();
    let focus = app.focus();
    anchors.fields[field_slot(FormField::Email)] = lines.len();
    anchors.email_input = lines.len();

    let value = if form.email().is_empty() {
        Span::styled(EMAIL_PLACEHOLDER, Style::default().fg(palette.text_muted))
    } else {
        Span::styled(
            form.email().to_string(),
            Style::default().fg(palette.text_primary),
        )
    };
    lines.push(Line::from(vec![
        label_span(FormField::Email, focus, palette),
        Span::raw("  "),
        value,
    ]));

    if form.show_email_error()
        && let Some(error) = form.email_error()
    {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(format!("{} {error}", glyphs.error), styles::error(palette)),
        ]));
    }
    lines.push(Line::from(""));
}

fn push_industries(
    lines: &mut Vec<Line<'static>>,
    anchors: &mut Anchors,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let focus = app.focus();
    let focused = focus == FormField::Industries;
    let selection = app.form().industries();
    let cursor = app.industry_cursor();

    anchors.fields[field_slot(FormField::Industries)] = lines.len();
    lines.push(Line::from(label_span(FormField::Industries, focus, palette)));

    let first = industry_window_start(cursor, INDUSTRY_WINDOW);
    for option in industry_options().skip(first).take(INDUSTRY_WINDOW) {
        let industry = option.industry();
        let pointer = if focused && industry == cursor {
            glyphs.cursor
        } else {
            " "
        };
        let check = if selection.contains(industry) {
            glyphs.checked
        } else {
            glyphs.unchecked
        };
        let style = if focused && industry == cursor {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(pointer, Style::default().fg(palette.accent)),
            Span::raw(" "),
            Span::styled(format!("{check} {}", option.label()), style),
        ]));
    }

    let remaining = INDUSTRY_CATALOG.len() - first - INDUSTRY_WINDOW.min(INDUSTRY_CATALOG.len());
    let position = format!(
        "  ({}/{}{})",
        cursor.index() + 1,
        INDUSTRY_CATALOG.len(),
        if remaining > 0 { ", more below" } else { "" }
    );
    lines.push(Line::from(Span::styled(
        position,
        Style::default().fg(palette.text_muted),
    )));

    let chosen: Vec<&str> = app.form().selected_options().map(|o| o.label()).collect();
    let chosen = if chosen.is_empty() {
        "None".to_string()
    } else {
        chosen.join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled("  Selected Industries: ", Style::default().fg(palette.text_muted)),
        Span::styled(chosen, Style::default().fg(palette.text_primary)),
    ]));
    lines.push(Line::from(""));
}

/// First catalog row shown so that `cursor` stays inside a `window`-row view.
fn industry_window_start(cursor: Industry, window: usize) -> usize {
    let max_start = INDUSTRY_CATALOG.len().saturating_sub(window);
    cursor.index().saturating_sub(window / 2).min(max_start)
}

fn push_amounts(
    lines: &mut Vec<Line<'static>>,
    anchors: &mut Anchors,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let form = app.form();
    let focus = app.focus();
    for (field, ratio, echo) in [
        (
            FormField::Revenue,
            form.revenue().ratio(),
            format!("Selected Revenue: {}", form.revenue()),
        ),
        (
            FormField::Budget,
            form.budget().ratio(),
            format!("Selected Budget: {}", form.budget()),
        ),
    ] {
        anchors.fields[field_slot(field)] = lines.len();
        lines.push(Line::from(vec![
            label_span(field, focus, palette),
            Span::raw("  "),
            Span::styled(
                slider(ratio, glyphs),
                Style::default().fg(if field == focus {
                    palette.accent
                } else {
                    palette.primary
                }),
            ),
            Span::raw("  "),
            Span::styled(echo, Style::default().fg(palette.text_primary)),
        ]));
        lines.push(Line::from(""));
    }
}

fn slider(ratio: f64, glyphs: &Glyphs) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * SLIDER_WIDTH as f64).round() as usize).min(SLIDER_WIDTH);
    format!(
        "{}{}",
        glyphs.bar_filled.repeat(filled),
        glyphs.bar_empty.repeat(SLIDER_WIDTH - filled)
    )
}

fn push_interest(
    lines: &mut Vec<Line<'static>>,
    anchors: &mut Anchors,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let focus = app.focus();
    let interest = app.form().interest();
    anchors.fields[field_slot(FormField::Interest)] = lines.len();
    lines.push(Line::from(vec![
        label_span(FormField::Interest, focus, palette),
        Span::raw("  "),
        Span::styled(
            format!("[ {interest} {} ]", glyphs.dropdown),
            styles::label(palette, focus == FormField::Interest),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Selected Interest: {interest}"),
            Style::default().fg(palette.text_primary),
        ),
    ]));
    lines.push(Line::from(""));
}

fn push_submit(
    lines: &mut Vec<Line<'static>>,
    anchors: &mut Anchors,
    app: &App,
    palette: &Palette,
) {
    let focused = app.focus() == FormField::Submit;
    anchors.fields[field_slot(FormField::Submit)] = lines.len();
    let mut spans = vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(" Submit ", styles::button(palette, focused)),
    ];
    if app.is_submitting() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        spans.push(Span::styled(
            format!("  {spinner} Submitting..."),
            Style::default().fg(palette.primary),
        ));
    }
    lines.push(Line::from(spans));
    lines.push(Line::from(""));
}

fn push_results(lines: &mut Vec<Line<'static>>, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let view = app.results_view();
    lines.push(Line::from(Span::styled(
        RESULTS_HEADING,
        styles::heading(palette),
    )));

    if let Some(placeholder) = view.placeholder() {
        lines.push(Line::from(Span::styled(
            placeholder,
            Style::default().fg(palette.text_muted),
        )));
    }

    for block in view.blocks() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.accent)),
            Span::styled(
                block.key.into_owned(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {BLOCK_HEADING}"),
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::UNDERLINED),
        )));
        for (label, value) in block.rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {label}: "), Style::default().fg(palette.accent)),
                Span::styled(value.into_owned(), Style::default().fg(palette.text_primary)),
            ]));
        }
    }

    if let Some(message) = view.message() {
        let color = match app.submission_phase() {
            SubmissionPhase::Failed => palette.error,
            SubmissionPhase::Succeeded => palette.success,
            SubmissionPhase::Idle | SubmissionPhase::Submitting => palette.text_primary,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.into_owned(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if let Some(status) = app.status() {
        let text = if app.is_submitting() {
            let spinner = spinner_frame(app.tick_count(), app.ui_options());
            format!("{spinner} {status}")
        } else {
            status.to_string()
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(text, Style::default().fg(palette.warning)),
        ])
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in [
            ("Tab", "next"),
            ("Ctrl-S", "submit"),
            ("PgUp/PgDn", "scroll"),
            ("Esc", "quit"),
        ]
        .into_iter()
        .enumerate()
        {
            if i > 0 {
                spans.push(Span::styled("  ", styles::key_hint(palette)));
            }
            spans.push(Span::styled(key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Rows `lines` occupy once word-wrapped to `width`, matching how the page
/// paragraph is drawn.
fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    if lines.is_empty() {
        return 0;
    }

    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use advisor_engine::{Industry, UiOptions};
    use ratatui::text::Line;

    use super::{INDUSTRY_WINDOW, glyphs, industry_window_start, slider, wrapped_line_count};

    #[test]
    fn industry_window_keeps_cursor_visible() {
        for index in 0..24 {
            let cursor = Industry::from_index(index).unwrap();
            let start = industry_window_start(cursor, INDUSTRY_WINDOW);
            assert!(start <= index && index < start + INDUSTRY_WINDOW, "{index}");
            assert!(start + INDUSTRY_WINDOW <= 24);
        }
    }

    #[test]
    fn slider_fills_proportionally() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        assert_eq!(slider(0.0, &g), "-".repeat(24));
        assert_eq!(slider(1.0, &g), "#".repeat(24));
        assert_eq!(slider(0.5, &g), format!("{}{}", "#".repeat(12), "-".repeat(12)));
    }

    #[test]
    fn row_count_follows_word_wrap() {
        // 20 columns of text, but no two words share a 10-column row.
        let lines = [Line::from("aaaaaa bbbbbb cccccc"), Line::from("")];
        assert_eq!(wrapped_line_count(&lines, 10), 4);
        assert_eq!(wrapped_line_count(&lines[..1], 20), 1);
        assert_eq!(wrapped_line_count(&[], 10), 0);
    }
}
