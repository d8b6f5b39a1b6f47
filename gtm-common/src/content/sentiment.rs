//! Mined consumer sentiment

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTemplate {
    pub source_type: &'static str,
    pub source_url: &'static str,
    pub source_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentTemplate {
    pub insight_type: &'static str,
    pub sentiment: &'static str,
    pub content: &'static str,
    pub keywords: &'static [&'static str],
    pub source: SourceTemplate,
}

/// One buying driver and one objection, each backed by a single review
pub fn mined_insights() -> Vec<SentimentTemplate> {
    vec![
        SentimentTemplate {
            insight_type: "buying_driver",
            sentiment: "positive",
            content: "Users consistently praise the natural ingredients and clean label",
            keywords: &["natural", "clean label", "ingredients"],
            source: SourceTemplate {
                source_type: "amazon",
                source_url: "https://amazon.com/sample-review-1",
                source_text: "Love how natural this product is, no artificial ingredients!",
            },
        },
        SentimentTemplate {
            insight_type: "objection",
            sentiment: "negative",
            content: "Price point is considered too high compared to traditional alternatives",
            keywords: &["price", "expensive", "cost"],
            source: SourceTemplate {
                source_type: "reddit",
                source_url: "https://reddit.com/r/sample/comments/1",
                source_text: "Great product but way too expensive compared to regular options",
            },
        },
    ]
}
