//! Submission results and the read-only view the UI renders from.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use advisor_types::{
    CertificateRecord, NO_CERTIFICATES_MESSAGE, RecommendationResponse, sanitize_display_text,
};

pub const RESULTS_HEADING: &str = "Recommended Certifications:";
pub const BLOCK_HEADING: &str = "Certification Details";

/// Message and certificates from the latest submission cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    pub message: String,
    pub certificates: Vec<CertificateRecord>,
}

impl From<RecommendationResponse> for SubmissionResult {
    fn from(response: RecommendationResponse) -> Self {
        Self {
            message: response.message,
            certificates: response.certificates,
        }
    }
}

/// One rendered certificate. Text is sanitized for terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateBlock<'a> {
    pub key: Cow<'a, str>,
    pub rows: Vec<(&'static str, Cow<'a, str>)>,
}

impl<'a> CertificateBlock<'a> {
    fn new(record: &'a CertificateRecord) -> Self {
        Self {
            key: sanitize_display_text(&record.certification_name),
            rows: record
                .details()
                .into_iter()
                .map(|(label, value)| (label, sanitize_display_text(value)))
                .collect(),
        }
    }
}

/// Borrowed view over a [`SubmissionResult`].
///
/// `blocks()` can be called any number of times; each call starts a fresh
/// pass over the certificates in response order.
#[derive(Debug, Clone, Copy)]
pub struct ResultsView<'a> {
    result: &'a SubmissionResult,
}

impl<'a> ResultsView<'a> {
    #[must_use]
    pub fn new(result: &'a SubmissionResult) -> Self {
        Self { result }
    }

    pub fn blocks(&self) -> impl ExactSizeIterator<Item = CertificateBlock<'a>> + use<'a> {
        self.result.certificates.iter().map(CertificateBlock::new)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.certificates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.result.certificates.len()
    }

    /// Placeholder shown instead of blocks when there are no certificates.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_CERTIFICATES_MESSAGE.as_str())
    }

    /// The banner message, if any.
    #[must_use]
    pub fn message(&self) -> Option<Cow<'a, str>> {
        (!self.result.message.is_empty()).then(|| sanitize_display_text(&self.result.message))
    }

    /// Keys that appear more than once, in order of their second occurrence.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for record in &self.result.certificates {
            let key = record.certification_name.as_str();
            if !seen.insert(key) && !duplicates.contains(&key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}

/// Plain-text rendering, used by the headless mode and tests.
impl fmt::Display for ResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RESULTS_HEADING}")?;
        if let Some(placeholder) = self.placeholder() {
            writeln!(f, "{placeholder}")?;
        }
        for block in self.blocks() {
            writeln!(f)?;
            writeln!(f, "{}", block.key)?;
            writeln!(f, "{BLOCK_HEADING}")?;
            for (label, value) in &block.rows {
                writeln!(f, "  {label}: {value}")?;
            }
        }
        if let Some(message) = self.message() {
            writeln!(f)?;
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}
