//! Form state store for the business profile.
//!
//! Every field has a setter that replaces its value. The email error is
//! recomputed on every email write, so it is never stale relative to the
//! text. Amount setters clamp and snap via [`Amount::new`].
//!
//! [`Amount::new`]: advisor_types::Amount::new

use advisor_types::{
    Budget, EMAIL_ERROR_MESSAGE, Industry, IndustryOption, IndustrySelection, Interest,
    NonEmptyStaticStr, RecommendationRequest, Revenue, validate_email,
};

use crate::text_input::TextInput;

#[derive(Debug, Clone)]
pub struct FormState {
    email: TextInput,
    email_error: Option<NonEmptyStaticStr>,
    /// Set once the user edits the email or a submit is blocked by it.
    email_touched: bool,
    industries: IndustrySelection,
    revenue: Revenue,
    budget: Budget,
    interest: Interest,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: TextInput::default(),
            email_error: email_error_for(""),
            email_touched: false,
            industries: IndustrySelection::empty(),
            revenue: Revenue::zero(),
            budget: Budget::zero(),
            interest: Interest::default(),
        }
    }
}

fn email_error_for(email: &str) -> Option<NonEmptyStaticStr> {
    (!validate_email(email)).then_some(EMAIL_ERROR_MESSAGE)
}

impl FormState {
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.text()
    }

    #[must_use]
    pub fn email_input(&self) -> &TextInput {
        &self.email
    }

    /// Replace the email and revalidate it.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email.set_text(email.into());
        self.revalidate_email();
    }

    /// Apply an in-place edit to the email field and revalidate it.
    pub fn edit_email(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let before = self.email.text().to_string();
        edit(&mut self.email);
        if self.email.text() != before {
            self.email_touched = true;
            self.revalidate_email();
        }
    }

    fn revalidate_email(&mut self) {
        self.email_error = email_error_for(self.email.text());
    }

    /// The current email error, if the address is malformed.
    #[must_use]
    pub fn email_error(&self) -> Option<&'static str> {
        self.email_error.map(NonEmptyStaticStr::as_str)
    }

    /// Whether the inline email error should be displayed.
    #[must_use]
    pub fn show_email_error(&self) -> bool {
        self.email_touched && self.email_error.is_some()
    }

    pub fn mark_email_touched(&mut self) {
        self.email_touched = true;
    }

    #[must_use]
    pub fn industries(&self) -> IndustrySelection {
        self.industries
    }

    pub fn set_industries(&mut self, industries: IndustrySelection) {
        self.industries = industries;
    }

    /// Replace the selection with the values of the chosen options.
    pub fn choose_industries<I>(&mut self, chosen: I)
    where
        I: IntoIterator<Item = IndustryOption>,
    {
        self.industries.replace_with(chosen);
    }

    pub fn toggle_industry(&mut self, industry: Industry) {
        self.industries.toggle(industry);
    }

    /// Selected options in catalog order, for the multi-select widget.
    pub fn selected_options(&self) -> impl Iterator<Item = IndustryOption> + Clone {
        self.industries.selected_options()
    }

    #[must_use]
    pub fn revenue(&self) -> Revenue {
        self.revenue
    }

    pub fn set_revenue(&mut self, raw: i64) {
        self.revenue = Revenue::new(raw);
    }

    pub fn step_revenue(&mut self, notches: i32) {
        self.revenue = self.revenue.step_by(notches);
    }

    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn set_budget(&mut self, raw: i64) {
        self.budget = Budget::new(raw);
    }

    pub fn step_budget(&mut self, notches: i32) {
        self.budget = self.budget.step_by(notches);
    }

    #[must_use]
    pub fn interest(&self) -> Interest {
        self.interest
    }

    pub fn set_interest(&mut self, interest: Interest) {
        self.interest = interest;
    }

    /// Move the dropdown one entry forward (`forward`) or back, wrapping.
    pub fn cycle_interest(&mut self, forward: bool) {
        self.interest = if forward {
            self.interest.next()
        } else {
            self.interest.prev()
        };
    }

    /// Copy of the current values as a wire request.
    #[must_use]
    pub fn snapshot(&self) -> RecommendationRequest {
        RecommendationRequest {
            email: self.email.text().to_string(),
            industries: self.industries,
            revenue: self.revenue,
            budget: self.budget,
            interest: self.interest,
        }
    }
}
