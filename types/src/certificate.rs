//! Recommendation response records.
//!
//! The service is loosely typed: either top-level field may be missing,
//! `certificates` may not be an array, and any record field may be absent or
//! null. Decoding never fails on shape; anything unusable becomes blank text
//! or an empty list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recommended certification. All fields are free text; missing ones are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CertificateRecord {
    pub certification_name: String,
    pub program_name: String,
    pub description: String,
    pub benefits: String,
    pub timeline: String,
    pub required_documentation: String,
    pub certification_process: String,
    pub renewal: String,
    pub certification_scope: String,
}

impl CertificateRecord {
    /// The labelled detail rows, in display order.
    #[must_use]
    pub fn details(&self) -> [(&'static str, &str); 8] {
        [
            ("Program Name", self.program_name.as_str()),
            ("Certification Description", self.description.as_str()),
            ("Certification Benefits", self.benefits.as_str()),
            ("Timeline For Certification Acquisition", self.timeline.as_str()),
            ("Required Documents", self.required_documentation.as_str()),
            ("Certification Process", self.certification_process.as_str()),
            ("Certification Renewal", self.renewal.as_str()),
            ("Certification Scope", self.certification_scope.as_str()),
        ]
    }
}

impl From<Value> for CertificateRecord {
    fn from(value: Value) -> Self {
        let field = |name: &str| value.get(name).map(text_of).unwrap_or_default();
        Self {
            certification_name: field("certification_name"),
            program_name: field("program_name"),
            description: field("description"),
            benefits: field("benefits"),
            timeline: field("timeline"),
            required_documentation: field("required_documentation"),
            certification_process: field("certification_process"),
            renewal: field("renewal"),
            certification_scope: field("certification_scope"),
        }
    }
}

/// Decoded body of a successful recommendation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct RecommendationResponse {
    pub message: String,
    pub certificates: Vec<CertificateRecord>,
}

impl From<Value> for RecommendationResponse {
    fn from(value: Value) -> Self {
        let message = value.get("message").map(text_of).unwrap_or_default();
        let certificates = match value.get("certificates") {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| item.is_object())
                .cloned()
                .map(CertificateRecord::from)
                .collect(),
            _ => Vec::new(),
        };
        Self {
            message,
            certificates,
        }
    }
}

/// Render a JSON scalar as display text; null and containers become empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{CertificateRecord, RecommendationResponse};
    use serde_json::json;

    #[test]
    fn decodes_full_response_in_order() {
        let body = json!({
            "message": "Found 2",
            "certificates": [
                {"certification_name": "A", "program_name": "Alpha"},
                {"certification_name": "B", "renewal": "Annual"}
            ]
        });
        let response: RecommendationResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message, "Found 2");
        let names: Vec<_> = response
            .certificates
            .iter()
            .map(|c| c.certification_name.as_str())
            .collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(response.certificates[0].program_name, "Alpha");
        assert_eq!(response.certificates[1].renewal, "Annual");
        assert_eq!(response.certificates[1].program_name, "");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let response: RecommendationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, RecommendationResponse::default());
    }

    #[test]
    fn non_array_certificates_become_empty() {
        for certificates in [json!("nope"), json!(null), json!({"a": 1}), json!(7)] {
            let body = json!({"message": "ok", "certificates": certificates});
            let response: RecommendationResponse = serde_json::from_value(body).unwrap();
            assert!(response.certificates.is_empty());
            assert_eq!(response.message, "ok");
        }
    }

    #[test]
    fn non_object_body_decodes_as_empty() {
        let response: RecommendationResponse = serde_json::from_str("[1, 2, 3]").unwrap();
        assert!(response.certificates.is_empty());
        assert!(response.message.is_empty());
    }

    #[test]
    fn null_and_scalar_fields_render_as_text() {
        let record: CertificateRecord = serde_json::from_value(json!({
            "certification_name": "B Corp",
            "description": null,
            "timeline": 6,
            "benefits": ["not", "text"]
        }))
        .unwrap();
        assert_eq!(record.certification_name, "B Corp");
        assert_eq!(record.description, "");
        assert_eq!(record.timeline, "6");
        assert_eq!(record.benefits, "");
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let body = json!({"certificates": [null, "x", {"certification_name": "C"}]});
        let response: RecommendationResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.certificates.len(), 1);
        assert_eq!(response.certificates[0].certification_name, "C");
    }

    #[test]
    fn details_follow_display_order() {
        let record = CertificateRecord {
            program_name: "P".into(),
            certification_scope: "S".into(),
            ..CertificateRecord::default()
        };
        let details = record.details();
        assert_eq!(details[0], ("Program Name", "P"));
        assert_eq!(details[7], ("Certification Scope", "S"));
    }
}
