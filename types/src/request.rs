//! Outbound request payload.

use serde::Serialize;

use crate::{Budget, IndustrySelection, Interest, Revenue};

/// Snapshot of the form taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRequest {
    pub email: String,
    pub industries: IndustrySelection,
    pub revenue: Revenue,
    pub budget: Budget,
    pub interest: Interest,
}
