//! Sustainability interest dropdown values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interest: {0:?}")]
pub struct UnknownInterest(pub String);

/// Exactly one of these is selected at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interest {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "No Prior Research")]
    NoPriorResearch,
    #[serde(rename = "Environmental Focus For Customers")]
    EnvironmentalFocus,
    #[serde(rename = "Social Focus For Investors")]
    SocialFocus,
}

impl Interest {
    /// Dropdown order.
    pub const ALL: [Interest; 4] = [
        Interest::None,
        Interest::NoPriorResearch,
        Interest::EnvironmentalFocus,
        Interest::SocialFocus,
    ];

    /// Label shown in the dropdown and sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Interest::None => "None",
            Interest::NoPriorResearch => "No Prior Research",
            Interest::EnvironmentalFocus => "Environmental Focus For Customers",
            Interest::SocialFocus => "Social Focus For Investors",
        }
    }

    pub fn parse(label: &str) -> Result<Self, UnknownInterest> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|interest| interest.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownInterest(label.to_string()))
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        match self {
            Interest::None => 0,
            Interest::NoPriorResearch => 1,
            Interest::EnvironmentalFocus => 2,
            Interest::SocialFocus => 3,
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Interest;

    #[test]
    fn default_is_none() {
        assert_eq!(Interest::default(), Interest::None);
    }

    #[test]
    fn wire_labels_match_dropdown() {
        for interest in Interest::ALL {
            let json = serde_json::to_value(interest).unwrap();
            assert_eq!(json, serde_json::Value::String(interest.as_str().to_string()));
        }
    }

    #[test]
    fn parse_accepts_labels_case_insensitively() {
        assert_eq!(
            Interest::parse("environmental focus for customers").unwrap(),
            Interest::EnvironmentalFocus
        );
        assert_eq!(Interest::parse(" None ").unwrap(), Interest::None);
        assert!(Interest::parse("Governance").is_err());
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Interest::SocialFocus.next(), Interest::None);
        assert_eq!(Interest::None.prev(), Interest::SocialFocus);
        assert_eq!(Interest::None.next(), Interest::NoPriorResearch);
    }
}
