//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use advisor_engine::{App, ClientSettings, Endpoint, RecommendationClient, UiOptions};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SUBMIT_PATH: &str = "/submitForm";

/// Mount a 200 response carrying `body` for every POST to [`SUBMIT_PATH`].
pub async fn mount_recommendations(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Two certificates, "A" then "B", and the message "Found 2".
pub fn two_certificates() -> serde_json::Value {
    serde_json::json!({
        "message": "Found 2",
        "certificates": [
            {
                "certification_name": "A",
                "program_name": "Alpha Program",
                "description": "First certificate",
                "renewal": "Annual"
            },
            {
                "certification_name": "B",
                "program_name": "Beta Program",
                "certification_scope": "Supply chain"
            }
        ]
    })
}

pub fn client_for(endpoint: &str) -> RecommendationClient {
    let settings = ClientSettings {
        endpoint: Endpoint::parse(endpoint, true).expect("test endpoint"),
        connect_timeout: Duration::from_secs(2),
    };
    RecommendationClient::new(&settings).expect("test client")
}

pub fn app_for(server: &MockServer) -> App {
    app_with_options(server, UiOptions::default())
}

pub fn app_with_options(server: &MockServer, options: UiOptions) -> App {
    App::with_client(
        client_for(&format!("{}{SUBMIT_PATH}", server.uri())),
        options,
    )
}

/// App whose endpoint refuses connections.
pub fn offline_app() -> App {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    App::with_client(
        client_for(&format!("http://{addr}{SUBMIT_PATH}")),
        UiOptions::default(),
    )
}

pub fn fill_valid_form(app: &mut App) {
    let form = app.form_mut();
    form.set_email("owner@example.com");
    form.toggle_industry(advisor_engine::Industry::parse("Energy").expect("catalog"));
    form.toggle_industry(advisor_engine::Industry::parse("Apparel").expect("catalog"));
    form.set_revenue(250_000);
    form.set_budget(1_500);
    form.set_interest(advisor_engine::Interest::EnvironmentalFocus);
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn shift_tab() -> Event {
    Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))
}

/// Feed `text` as individual key presses.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        advisor_tui::apply_event(app, key(KeyCode::Char(c)));
    }
}

/// Tick the app the way the render loop does until the request settles.
pub async fn tick_until_settled(app: &mut App) {
    for _ in 0..500 {
        app.tick();
        if !app.is_submitting() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("submission did not settle");
}
