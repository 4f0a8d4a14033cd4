//! Key bindings applied to the form.

use advisor_engine::{FormField, Interest};
use advisor_tui::apply_event;
use crossterm::event::{Event, KeyCode};

use crate::common::{ctrl, key, offline_app, shift_tab, type_text};

#[test]
fn tab_and_shift_tab_cycle_focus() {
    let mut app = offline_app();
    let mut seen = vec![app.focus()];
    for _ in 0..5 {
        apply_event(&mut app, key(KeyCode::Tab));
        seen.push(app.focus());
    }
    assert_eq!(seen, FormField::ALL);
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), FormField::Email);
    apply_event(&mut app, shift_tab());
    assert_eq!(app.focus(), FormField::Submit);
}

#[test]
fn email_editing_keys() {
    let mut app = offline_app();
    type_text(&mut app, "owner@exampel.com");
    assert!(app.form().email_error().is_none());

    for _ in 0..4 {
        apply_event(&mut app, key(KeyCode::Left));
    }
    apply_event(&mut app, key(KeyCode::Backspace));
    apply_event(&mut app, key(KeyCode::Backspace));
    type_text(&mut app, "le");
    assert_eq!(app.form().email(), "owner@example.com");

    apply_event(&mut app, key(KeyCode::Home));
    apply_event(&mut app, key(KeyCode::Delete));
    assert_eq!(app.form().email(), "wner@example.com");

    apply_event(&mut app, key(KeyCode::End));
    apply_event(&mut app, ctrl('w'));
    assert_eq!(app.form().email(), "");
    assert_eq!(
        app.form().email_error(),
        Some("Enter a valid email address")
    );
    assert!(app.form().show_email_error());
}

#[test]
fn paste_goes_into_email_only() {
    let mut app = offline_app();
    apply_event(&mut app, Event::Paste("a@b.c\n".to_string()));
    assert_eq!(app.form().email(), "a@b.c");

    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, Event::Paste("ignored".to_string()));
    assert_eq!(app.form().email(), "a@b.c");
}

#[test]
fn sliders_saturate_at_bounds() {
    let mut app = offline_app();
    app.set_focus(FormField::Budget);
    apply_event(&mut app, key(KeyCode::Left));
    assert_eq!(app.form().budget().get(), 0);
    for _ in 0..150 {
        apply_event(&mut app, key(KeyCode::Right));
    }
    assert_eq!(app.form().budget().get(), 10_000);
}

#[test]
fn interest_dropdown_cycles() {
    let mut app = offline_app();
    app.set_focus(FormField::Interest);
    apply_event(&mut app, key(KeyCode::Right));
    apply_event(&mut app, key(KeyCode::Right));
    assert_eq!(app.form().interest(), Interest::EnvironmentalFocus);
    apply_event(&mut app, key(KeyCode::Left));
    assert_eq!(app.form().interest(), Interest::NoPriorResearch);
}

#[test]
fn industries_toggle_with_space() {
    let mut app = offline_app();
    app.set_focus(FormField::Industries);
    apply_event(&mut app, key(KeyCode::Char(' ')));
    apply_event(&mut app, key(KeyCode::Down));
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.form().industries().labels(), ["Agriculture", "Apparel"]);
    apply_event(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.form().industries().labels(), ["Agriculture"]);
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut app = offline_app();
    assert!(!apply_event(&mut app, key(KeyCode::Char('q'))));
    assert!(apply_event(&mut app, key(KeyCode::Esc)));

    let mut app = offline_app();
    assert!(apply_event(&mut app, ctrl('c')));
}
