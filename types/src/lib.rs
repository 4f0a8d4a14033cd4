//! Core domain types for the certification advisor.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod amount;
mod certificate;
mod email;
mod industry;
mod interest;
mod request;
mod text;
pub mod ui;

pub use amount::{Amount, Budget, Revenue};
pub use certificate::{CertificateRecord, RecommendationResponse};
pub use email::validate_email;
pub use industry::{
    INDUSTRY_CATALOG, Industry, IndustryOption, IndustrySelection, UnknownIndustry,
    industry_options,
};
pub use interest::{Interest, UnknownInterest};
pub use request::RecommendationRequest;
pub use text::sanitize_display_text;

// ============================================================================
// Fixed user-facing messages
// ============================================================================

/// A compile-time checked non-empty static string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for NonEmptyStaticStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Inline error shown under the email field while the address is malformed.
pub const EMAIL_ERROR_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Enter a valid email address");

/// Banner message when a submit is attempted with an email error outstanding.
pub const FIX_EMAIL_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Please fix the email error before submitting.");

/// Banner message for any transport, status, or decode failure.
pub const SUBMIT_FAILED_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Error submitting form. Please try again.");

/// Placeholder rendered in place of an empty result set.
pub const NO_CERTIFICATES_MESSAGE: NonEmptyStaticStr =
    NonEmptyStaticStr::new("No certificates to display");
