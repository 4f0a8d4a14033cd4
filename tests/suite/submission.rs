//! End-to-end submission tests: keyboard input through to the mock service.

use advisor_engine::{FormField, SubmissionPhase};
use advisor_tui::apply_event;
use crossterm::event::KeyCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    SUBMIT_PATH, app_for, ctrl, fill_valid_form, key, mount_recommendations, offline_app,
    tick_until_settled, two_certificates, type_text,
};

#[tokio::test]
async fn keyboard_flow_posts_the_whole_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .and(body_json(json!({
            "email": "owner@example.com",
            "industries": ["Apparel", "Energy"],
            "revenue": 4_000,
            "budget": 100,
            "interest": "No Prior Research"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_certificates()))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    type_text(&mut app, "owner@example.com");

    apply_event(&mut app, key(KeyCode::Tab));
    // Energy (catalog index 7) first, then Apparel (index 1).
    for _ in 0..7 {
        apply_event(&mut app, key(KeyCode::Down));
    }
    apply_event(&mut app, key(KeyCode::Char(' ')));
    for _ in 0..6 {
        apply_event(&mut app, key(KeyCode::Up));
    }
    apply_event(&mut app, key(KeyCode::Char(' ')));

    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, key(KeyCode::Right));
    apply_event(&mut app, key(KeyCode::Right));
    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, key(KeyCode::Right));
    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, key(KeyCode::Right));
    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), FormField::Submit);

    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.submission_phase(), SubmissionPhase::Submitting);
    tick_until_settled(&mut app).await;

    assert_eq!(app.submission_phase(), SubmissionPhase::Succeeded);
    let text = app.results_view().to_string();
    assert!(text.starts_with("Recommended Certifications:\n"));
    let a = text.find("\nA\nCertification Details\n").unwrap();
    let b = text.find("\nB\nCertification Details\n").unwrap();
    assert!(a < b);
    assert!(text.contains("  Program Name: Alpha Program\n"));
    assert!(text.ends_with("\nFound 2\n"));
}

#[tokio::test]
async fn ctrl_s_with_bad_email_never_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    type_text(&mut app, "owner@example");
    apply_event(&mut app, key(KeyCode::Tab));
    apply_event(&mut app, ctrl('s'));

    assert_eq!(app.submission_phase(), SubmissionPhase::Failed);
    assert_eq!(
        app.result().message,
        "Please fix the email error before submitting."
    );
    assert_eq!(app.focus(), FormField::Email);
}

#[tokio::test]
async fn missing_certificates_show_placeholder_and_message() {
    let server = MockServer::start().await;
    mount_recommendations(&server, json!({"message": "No matches for this profile"})).await;

    let mut app = app_for(&server);
    fill_valid_form(&mut app);
    app.submit();
    tick_until_settled(&mut app).await;

    assert_eq!(
        app.results_view().to_string(),
        "Recommended Certifications:\nNo certificates to display\n\nNo matches for this profile\n"
    );
}

#[tokio::test]
async fn non_array_certificates_degrade_to_empty() {
    let server = MockServer::start().await;
    mount_recommendations(&server, json!({"message": "odd", "certificates": "B Corp"})).await;

    let mut app = app_for(&server);
    fill_valid_form(&mut app);
    app.submit();
    app.finish_submission().await;

    assert_eq!(app.submission_phase(), SubmissionPhase::Succeeded);
    assert!(app.results_view().is_empty());
    assert_eq!(app.result().message, "odd");
}

#[tokio::test]
async fn refused_connection_yields_generic_error() {
    let mut app = offline_app();
    fill_valid_form(&mut app);
    app.submit();
    tick_until_settled(&mut app).await;

    assert_eq!(app.submission_phase(), SubmissionPhase::Failed);
    assert_eq!(app.result().message, "Error submitting form. Please try again.");
}

#[tokio::test]
async fn server_error_keeps_previous_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_certificates()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    fill_valid_form(&mut app);
    app.submit();
    app.finish_submission().await;
    app.submit();
    app.finish_submission().await;

    assert_eq!(app.submission_phase(), SubmissionPhase::Failed);
    assert_eq!(app.result().message, "Error submitting form. Please try again.");
    let keys: Vec<_> = app
        .results_view()
        .blocks()
        .map(|b| b.key.into_owned())
        .collect();
    assert_eq!(keys, ["A", "B"]);
}

#[tokio::test]
async fn html_error_page_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    fill_valid_form(&mut app);
    app.submit();
    app.finish_submission().await;

    assert_eq!(app.submission_phase(), SubmissionPhase::Failed);
    assert_eq!(app.result().message, "Error submitting form. Please try again.");
}

#[tokio::test]
async fn duplicate_names_render_every_block() {
    let server = MockServer::start().await;
    mount_recommendations(
        &server,
        json!({"certificates": [
            {"certification_name": "Fair Trade"},
            {"certification_name": "Fair Trade"}
        ]}),
    )
    .await;

    let mut app = app_for(&server);
    fill_valid_form(&mut app);
    app.submit();
    app.finish_submission().await;

    let view = app.results_view();
    assert_eq!(view.blocks().count(), 2);
    assert_eq!(view.duplicate_keys(), ["Fair Trade"]);
    assert_eq!(view.message(), None);
}
