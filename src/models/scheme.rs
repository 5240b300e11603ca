// src/models/scheme.rs
use serde::{Deserialize, Serialize};

/// A scheme from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub publish_date: String,
    pub category: String,
    pub eligibility: String,
    pub documents: Vec<String>,
    pub apply_link: String,
}

/// A scheme returned by `/api/recommend`, with the engine's justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedScheme {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub eligibility: String,
    #[serde(default)]
    pub documents: Vec<String>,
    pub apply_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub source: String,
    pub why_recommended: String,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recommend_payload() {
        let raw = r#"{
            "id": 9,
            "title": "Atal Pension Yojana",
            "category": "Pension",
            "description": "Pension for unorganised workers.",
            "eligibility": "18-40 years",
            "documents": ["Aadhaar Card"],
            "applyLink": "https://npscra.nsdl.co.in/",
            "source": "apy.pdf",
            "whyRecommended": "You are 30 and self-employed.",
            "confidence": 0.82
        }"#;

        let scheme: RecommendedScheme = serde_json::from_str(raw).unwrap();
        assert_eq!(scheme.apply_link, "https://npscra.nsdl.co.in/");
        assert_eq!(scheme.why_recommended, "You are 30 and self-employed.");
        assert!(scheme.publish_date.is_none());
        assert!((scheme.confidence - 0.82).abs() < f64::EPSILON);
    }
}
