//! Competitor listings returned by the landscape scan

#[derive(Debug, Clone, PartialEq)]
pub struct ListingTemplate {
    pub competitor_name: String,
    pub product_name: String,
    pub price: f64,
    pub pack_size: String,
    pub claims: Vec<String>,
    pub listing_url: String,
    pub platform: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two marketplace listings; product names interpolate the category
pub fn competitor_listings(category: &str) -> Vec<ListingTemplate> {
    vec![
        ListingTemplate {
            competitor_name: "Health Foods Co".to_string(),
            product_name: format!("Organic {}", category),
            price: 499.99,
            pack_size: "500ml".to_string(),
            claims: strings(&["Organic", "Sugar-free", "Vegan"]),
            listing_url: "https://amazon.com/sample".to_string(),
            platform: "Amazon".to_string(),
        },
        ListingTemplate {
            competitor_name: "Nature's Best".to_string(),
            product_name: format!("Premium {}", category),
            price: 599.99,
            pack_size: "750ml".to_string(),
            claims: strings(&["Natural", "No preservatives", "High protein"]),
            listing_url: "https://flipkart.com/sample".to_string(),
            platform: "Flipkart".to_string(),
        },
    ]
}
