//! Qualitative research transcript analysis

use crate::models::ResearchTheme;

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchAnalysis {
    pub themes: Vec<ResearchTheme>,
    pub key_quotes: Vec<String>,
    pub sentiment: String,
    pub barriers: Vec<String>,
    pub drivers: Vec<String>,
}

fn theme(name: &str, description: &str, confidence: f64) -> ResearchTheme {
    ResearchTheme {
        name: name.to_string(),
        description: description.to_string(),
        confidence,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn transcript_analysis() -> ResearchAnalysis {
    ResearchAnalysis {
        themes: vec![
            theme(
                "Price Sensitivity",
                "Consumers are highly price conscious and compare across brands",
                0.85,
            ),
            theme(
                "Health Awareness",
                "Growing interest in natural and healthy ingredients",
                0.92,
            ),
            theme(
                "Convenience",
                "Easy-to-use packaging and portability are key drivers",
                0.78,
            ),
        ],
        key_quotes: strings(&[
            "I always check the ingredients list before buying",
            "The price is a bit high compared to regular options",
            "I love how easy it is to carry in my gym bag",
        ]),
        sentiment: "positive".to_string(),
        barriers: strings(&["High price point", "Limited availability", "Lack of awareness"]),
        drivers: strings(&["Health benefits", "Natural ingredients", "Convenient packaging"]),
    }
}
