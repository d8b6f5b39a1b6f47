//! Consumer segment templates
//!
//! Positioning and channel messages interpolate the product details the
//! user entered on the segmentation form.

use crate::models::SegmentMessages;

/// Product details every segment template needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub product_name: String,
    pub product_form: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTemplate {
    pub name: String,
    pub description: String,
    pub demographics: Vec<String>,
    pub psychographics: Vec<String>,
    pub behaviors: Vec<String>,
    pub channels: Vec<String>,
    pub positioning: String,
    pub tagline: String,
    pub messages: SegmentMessages,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn segment_templates(product: &ProductDetails) -> Vec<SegmentTemplate> {
    let ProductDetails {
        product_name: name,
        product_form: form,
        ingredients,
    } = product;

    vec![
        SegmentTemplate {
            name: "Health-Conscious Professionals".to_string(),
            description: "Urban professionals aged 25-40 who prioritize health and convenience"
                .to_string(),
            demographics: strings(&[
                "Age: 25-40",
                "Urban areas",
                "High disposable income",
                "College educated",
            ]),
            psychographics: strings(&[
                "Health-conscious",
                "Time-starved",
                "Quality-oriented",
                "Brand conscious",
            ]),
            behaviors: strings(&[
                "Regular gym-goers",
                "Online shoppers",
                "Social media active",
                "Willing to pay premium for quality",
            ]),
            channels: strings(&["Modern Trade", "E-commerce", "Instagram"]),
            positioning: format!(
                "For busy professionals who want a healthy lifestyle, {} is a premium {} that \
                 delivers convenience without compromising on nutrition.",
                name, form
            ),
            tagline: "Fuel Your Success, Naturally".to_string(),
            messages: SegmentMessages {
                whatsapp: format!(
                    "🌟 Introducing {}: Your daily dose of wellness in a convenient {}! Made with \
                     {}. Perfect for your busy lifestyle. Order now and get 10% off your first \
                     purchase! 💪",
                    name, form, ingredients
                ),
                instagram: format!(
                    "Elevate your wellness journey with {} 🌱✨\n\nPacked with {}, our premium {} \
                     is designed for those who refuse to compromise on health or taste.\n\n\
                     #HealthyLiving #WellnessJourney #CleanEating",
                    name, ingredients, form
                ),
            },
        },
        SegmentTemplate {
            name: "Fitness Enthusiasts".to_string(),
            description: "Active individuals focused on performance and muscle recovery"
                .to_string(),
            demographics: strings(&[
                "Age: 18-35",
                "Gym members",
                "Sports enthusiasts",
                "Suburban/urban",
            ]),
            psychographics: strings(&[
                "Performance-driven",
                "Nutrition-conscious",
                "Goal-oriented",
                "Community-focused",
            ]),
            behaviors: strings(&[
                "Regular workout routine",
                "Tracks macros",
                "Follows fitness influencers",
                "Uses fitness apps",
            ]),
            channels: strings(&["D2C", "Modern Trade", "Instagram"]),
            positioning: format!(
                "For fitness enthusiasts seeking peak performance, {} is the premium {} that \
                 delivers optimal nutrition for maximum results.",
                name, form
            ),
            tagline: "Power Your Performance".to_string(),
            messages: SegmentMessages {
                whatsapp: format!(
                    "💪 Level up your gains with {}! Premium {} packed with {}. Perfect pre/post \
                     workout nutrition. Join our fitness community and save 15% on your first \
                     order! 🏋️‍♂️",
                    name, form, ingredients
                ),
                instagram: format!(
                    "Transform your workout with {} 💪\n\nEngineered for performance with {}. \
                     Your perfect workout partner in a convenient {}.\n\n\
                     #FitnessGoals #WorkoutNutrition #PerformanceFuel",
                    name, ingredients, form
                ),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_interpolate_product() {
        let product = ProductDetails {
            product_name: "OatFuel".to_string(),
            product_form: "bar".to_string(),
            ingredients: "oats and dates".to_string(),
        };
        let segments = segment_templates(&product);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].positioning.contains("OatFuel is a premium bar"));
        assert!(segments[1].messages.instagram.contains("oats and dates"));
        assert_eq!(segments[1].tagline, "Power Your Performance");
    }
}
