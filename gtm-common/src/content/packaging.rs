//! Packaging review findings

use crate::models::ComplianceIssue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingFindings {
    pub claims: Vec<String>,
    pub readability_score: i64,
    pub clutter_score: i64,
    pub compliance_issues: Vec<ComplianceIssue>,
    pub recommendations: Vec<String>,
}

fn issue(issue_type: &str, description: &str, severity: &str) -> ComplianceIssue {
    ComplianceIssue {
        issue_type: issue_type.to_string(),
        description: description.to_string(),
        severity: severity.to_string(),
    }
}

pub fn review_findings() -> PackagingFindings {
    PackagingFindings {
        claims: [
            "100% Natural",
            "No Artificial Colors",
            "High in Protein",
            "Gluten Free",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        readability_score: 85,
        clutter_score: 25,
        compliance_issues: vec![
            issue(
                "Font Size",
                "Nutritional information font size below minimum requirement",
                "high",
            ),
            issue(
                "Claims Validation",
                "Natural claim requires supporting documentation",
                "medium",
            ),
            issue(
                "Allergen Statement",
                "Missing clear allergen declaration",
                "high",
            ),
        ],
        recommendations: [
            "Increase font size of nutritional information to meet regulations",
            "Add clear allergen declaration box",
            "Reduce visual clutter in the main panel",
            "Ensure all claims have supporting documentation",
            "Consider adding batch code for better traceability",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}
