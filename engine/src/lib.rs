//! Application state for the certification advisor.
//!
//! [`App`] owns the profile form, the latest submission result, and the
//! submission controller. The TUI reads from it to draw and calls its
//! operations in response to key events; [`App::tick`] is called once per
//! frame to advance the spinner and collect a finished request.

use std::time::{Duration, Instant};

pub use advisor_client::{
    ClientError, ClientSettings, DEFAULT_ENDPOINT, Endpoint, EndpointError, RecommendationClient,
};
pub use advisor_types::ui::{FormField, UiOptions};
pub use advisor_types::{
    Budget, CertificateRecord, INDUSTRY_CATALOG, Industry, IndustryOption, IndustrySelection,
    Interest, RecommendationRequest, RecommendationResponse, Revenue, industry_options,
};

mod config;
mod form;
mod results;
mod submission;
mod text_input;
mod view_state;

pub use config::{
    AdvisorConfig, AppConfig, ConfigError, ENDPOINT_ENV, ProfileConfig, ServiceConfig,
    config_path, expand_env_vars,
};
pub use form::FormState;
pub use results::{
    BLOCK_HEADING, CertificateBlock, RESULTS_HEADING, ResultsView, SubmissionResult,
};
pub use submission::{SubmissionPhase, SubmitOutcome};
pub use text_input::TextInput;
pub use view_state::ViewState;

use submission::SubmissionState;

const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    form: FormState,
    result: SubmissionResult,
    submission: SubmissionState,
    client: RecommendationClient,
    view: ViewState,
    focus: FormField,
    /// Focus moved since the last frame; the UI scrolls it into view.
    reveal_focus: bool,
    /// Highlighted row of the industry picker.
    industry_cursor: usize,
    status: Option<String>,
    tick: usize,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    /// Build from an optional config. Profile values prefill the form; bad
    /// profile entries are reported in the status line.
    pub fn new(config: Option<&AdvisorConfig>) -> anyhow::Result<Self> {
        let settings = match config {
            Some(config) => config.client_settings()?,
            None => AdvisorConfig::default().client_settings()?,
        };
        let client = RecommendationClient::new(&settings)?;
        let ui_options = config.map(AdvisorConfig::ui_options).unwrap_or_default();
        let mut app = Self::with_client(client, ui_options);

        if let Some(profile) = config.and_then(|c| c.profile.as_ref()) {
            let warnings = profile.apply(&mut app.form);
            for warning in &warnings {
                tracing::warn!("Ignoring profile entry: {warning}");
            }
            if !warnings.is_empty() {
                app.set_status(format!("Config: {}", warnings.join("; ")));
            }
        }

        tracing::info!(endpoint = %settings.endpoint, "Advisor ready");
        Ok(app)
    }

    #[must_use]
    pub fn with_client(client: RecommendationClient, ui_options: UiOptions) -> Self {
        Self {
            form: FormState::default(),
            result: SubmissionResult::default(),
            submission: SubmissionState::Idle,
            client,
            view: ViewState::new(ui_options),
            focus: FormField::default(),
            reveal_focus: false,
            industry_cursor: 0,
            status: None,
            tick: 0,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    #[must_use]
    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    #[must_use]
    pub fn results_view(&self) -> ResultsView<'_> {
        ResultsView::new(&self.result)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        self.client.endpoint()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        self.poll_submission();

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= SPINNER_INTERVAL {
            self.last_tick = now;
            self.tick = self.tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Focus and field navigation
    // ========================================================================

    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.reveal_focus = true;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn take_reveal_focus(&mut self) -> bool {
        std::mem::take(&mut self.reveal_focus)
    }

    #[must_use]
    pub fn industry_cursor(&self) -> Industry {
        Industry::from_index_saturating(self.industry_cursor)
    }

    pub fn industry_cursor_up(&mut self) {
        self.industry_cursor = self.industry_cursor.saturating_sub(1);
    }

    pub fn industry_cursor_down(&mut self) {
        self.industry_cursor = (self.industry_cursor + 1).min(INDUSTRY_CATALOG.len() - 1);
    }

    pub fn toggle_industry_at_cursor(&mut self) {
        let industry = self.industry_cursor();
        self.form.toggle_industry(industry);
    }

    /// Left/Right on the focused control. `forward` is Right.
    pub fn adjust_focused(&mut self, forward: bool) {
        let notches = if forward { 1 } else { -1 };
        match self.focus {
            FormField::Revenue => self.form.step_revenue(notches),
            FormField::Budget => self.form.step_budget(notches),
            FormField::Interest => self.form.cycle_interest(forward),
            FormField::Email => self.form.edit_email(|input| {
                if forward {
                    input.move_cursor_right();
                } else {
                    input.move_cursor_left();
                }
            }),
            FormField::Industries | FormField::Submit => {}
        }
    }
}
