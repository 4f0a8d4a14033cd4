//! Submission controller: one outbound request at a time.
//!
//! The request runs on a spawned task. The UI loop calls [`App::tick`], which
//! polls the task handle and applies the outcome once it has finished.

use std::time::Instant;

use advisor_client::{ClientError, RecommendationResponse};
use advisor_types::{FIX_EMAIL_MESSAGE, SUBMIT_FAILED_MESSAGE};
use futures_util::future::FutureExt;
use tokio::task::{JoinError, JoinHandle};

use crate::App;
use crate::results::{ResultsView, SubmissionResult};

type SubmitResult = Result<RecommendationResponse, ClientError>;

#[derive(Debug)]
pub(crate) struct SubmissionTask {
    handle: JoinHandle<SubmitResult>,
    started_at: Instant,
}

#[derive(Debug, Default)]
pub(crate) enum SubmissionState {
    #[default]
    Idle,
    Submitting(SubmissionTask),
    Succeeded,
    Failed,
}

/// Observable phase of the current submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What a call to [`App::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was sent.
    Started,
    /// The email is invalid; nothing was sent.
    Blocked,
    /// A request is already in flight; nothing was sent.
    AlreadySubmitting,
}

impl SubmissionState {
    fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Submitting(_) => SubmissionPhase::Submitting,
            SubmissionState::Succeeded => SubmissionPhase::Succeeded,
            SubmissionState::Failed => SubmissionPhase::Failed,
        }
    }
}

impl App {
    #[must_use]
    pub fn submission_phase(&self) -> SubmissionPhase {
        self.submission.phase()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting(_))
    }

    /// Validate the form and, if it is clean, send one request built from a
    /// snapshot of it. Must be called inside a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            self.set_status("A submission is already in progress");
            return SubmitOutcome::AlreadySubmitting;
        }

        if self.form.email_error().is_some() {
            self.form.mark_email_touched();
            self.result.message = FIX_EMAIL_MESSAGE.as_str().to_string();
            self.submission = SubmissionState::Failed;
            tracing::debug!("Submit blocked by invalid email");
            return SubmitOutcome::Blocked;
        }

        let request = self.form.snapshot();
        let client = self.client.clone();
        tracing::info!(
            endpoint = %client.endpoint(),
            industries = request.industries.len(),
            revenue = %request.revenue,
            budget = %request.budget,
            interest = %request.interest,
            "Submitting profile"
        );

        let handle = tokio::spawn(async move { client.submit(&request).await });
        self.submission = SubmissionState::Submitting(SubmissionTask {
            handle,
            started_at: Instant::now(),
        });
        self.set_status("Submitting...");
        SubmitOutcome::Started
    }

    /// Apply the outcome of a finished request. Non-blocking.
    pub(crate) fn poll_submission(&mut self) {
        let finished = match &self.submission {
            SubmissionState::Submitting(task) => task.handle.is_finished(),
            _ => return,
        };
        if !finished {
            return;
        }

        let task = match std::mem::take(&mut self.submission) {
            SubmissionState::Submitting(task) => task,
            other => {
                self.submission = other;
                return;
            }
        };

        let SubmissionTask { handle, started_at } = task;
        match handle.now_or_never() {
            Some(joined) => self.apply_outcome(joined, started_at),
            None => {
                // is_finished() was true, so the handle must be ready.
                tracing::error!("Submission task finished but result was not ready");
                self.fail_submission();
            }
        }
    }

    /// Wait for the in-flight request, if any, and apply its outcome.
    pub async fn finish_submission(&mut self) {
        let task = match std::mem::take(&mut self.submission) {
            SubmissionState::Submitting(task) => task,
            other => {
                self.submission = other;
                return;
            }
        };
        let SubmissionTask { handle, started_at } = task;
        let joined = handle.await;
        self.apply_outcome(joined, started_at);
    }

    fn apply_outcome(&mut self, joined: Result<SubmitResult, JoinError>, started_at: Instant) {
        let elapsed_ms = started_at.elapsed().as_millis();
        match joined {
            Ok(Ok(response)) => {
                self.result = SubmissionResult::from(response);
                self.submission = SubmissionState::Succeeded;
                self.clear_status();
                self.view.request_scroll_to_results();

                let view = ResultsView::new(&self.result);
                tracing::info!(
                    certificates = view.len(),
                    elapsed_ms,
                    "Recommendations received"
                );
                for key in view.duplicate_keys() {
                    tracing::warn!(key, "Duplicate certification name in response");
                }
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    error = %err,
                    status = ?err.status(),
                    elapsed_ms,
                    "Submission failed"
                );
                self.fail_submission();
            }
            Err(err) => {
                tracing::error!(error = %err, "Submission task failed to complete");
                self.fail_submission();
            }
        }
    }

    fn fail_submission(&mut self) {
        self.result.message = SUBMIT_FAILED_MESSAGE.as_str().to_string();
        self.submission = SubmissionState::Failed;
        self.clear_status();
    }
}
