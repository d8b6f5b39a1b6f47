//! Request bodies sent to the service
//!
//! Field names go over the wire in camelCase, matching what the handlers
//! accept.

use gtm_common::models::{ImageSide, ResearchType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LandscapeScan {
    pub category: String,
    pub geography: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentMining {
    pub project_id: String,
    pub category: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationForm {
    pub project_id: String,
    pub product_name: String,
    pub product_form: String,
    pub price_range: String,
    pub ingredients: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_consumer: Option<String>,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVisionForm {
    pub project_id: String,
    pub mission: String,
    pub tone: String,
    pub communication_dos: Vec<String>,
    pub communication_donts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingUpload {
    pub project_id: String,
    pub image_type: ImageSide,
    pub image_url: String,
    pub scanned_text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefRequest {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchUpload {
    pub project_id: String,
    pub research_type: ResearchType,
    pub file_name: String,
    pub file_content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectOnly<'a> {
    pub project_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_wire_names() {
        let body = serde_json::to_value(SegmentationForm {
            project_id: "new".to_string(),
            product_name: "OatFuel".to_string(),
            product_form: "bar".to_string(),
            price_range: "premium".to_string(),
            ingredients: "oats".to_string(),
            target_consumer: None,
            channels: vec!["D2C".to_string()],
        })
        .unwrap();

        assert_eq!(body["productName"], "OatFuel");
        assert_eq!(body["priceRange"], "premium");
        assert!(body.get("targetConsumer").is_none());
    }

    #[test]
    fn test_enum_fields_use_service_spelling() {
        let body = serde_json::to_value(ResearchUpload {
            project_id: "p".to_string(),
            research_type: ResearchType::ExpertInterview,
            file_name: "notes.txt".to_string(),
            file_content: String::new(),
        })
        .unwrap();
        assert_eq!(body["researchType"], json!("expert_interview"));

        let body = serde_json::to_value(PackagingUpload {
            project_id: "p".to_string(),
            image_type: ImageSide::Back,
            image_url: "b.png".to_string(),
            scanned_text: String::new(),
        })
        .unwrap();
        assert_eq!(body["imageType"], json!("back"));
    }
}
