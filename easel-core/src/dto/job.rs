//! Job submission DTOs

use serde::{Deserialize, Serialize};

/// Request to render a mockup
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitJob {
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub layout: Option<String>,
}

/// Successful job result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobResponse {
    pub success: bool,
    pub job_id: String,
    pub result_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mockup_context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: SubmitJob = serde_json::from_str(r#"{"imageUrl":"http://x"}"#).unwrap();
        assert_eq!(req.image_url.as_deref(), Some("http://x"));
        assert!(req.category.is_none());
        assert!(req.layout.is_none());
    }

    #[test]
    fn test_response_omits_absent_context() {
        let resp = SubmitJobResponse {
            success: true,
            job_id: "job_1".into(),
            result_path: "http://r".into(),
            mockup_context: None,
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["jobId"], "job_1");
        assert_eq!(value["resultPath"], "http://r");
        assert!(value.get("mockupContext").is_none());
    }
}
