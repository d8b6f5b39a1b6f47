//! Starter strategies for a generated GTM plan

use crate::funnel::{FunnelStage, GtmPlan, Strategy};

/// Two starter strategies per stage
pub fn starter_strategies(stage: FunnelStage) -> Vec<Strategy> {
    match stage {
        FunnelStage::Awareness => vec![
            Strategy::new(
                "Social Media Engagement",
                "Leverage Instagram and Facebook for brand awareness",
                &["Instagram", "Facebook"],
                &["Reach", "Impressions", "Engagement Rate"],
                "25%",
            ),
            Strategy::new(
                "Influencer Partnerships",
                "Partner with micro-influencers in health and wellness",
                &["Instagram", "YouTube"],
                &["Reach", "Engagement", "Brand Mentions"],
                "20%",
            ),
        ],
        FunnelStage::Consideration => vec![
            Strategy::new(
                "Educational Content",
                "Create valuable content about product benefits",
                &["Blog", "YouTube", "Email"],
                &["Time on Page", "Video Views", "Email Open Rate"],
                "15%",
            ),
            Strategy::new(
                "Product Sampling",
                "Distribute samples at relevant events",
                &["Events", "Direct Mail"],
                &["Sample Requests", "Event Attendance"],
                "15%",
            ),
        ],
        FunnelStage::Conversion => vec![
            Strategy::new(
                "Performance Marketing",
                "Run targeted ads to drive sales",
                &["Google Ads", "Facebook Ads"],
                &["ROAS", "CPA", "Conversion Rate"],
                "15%",
            ),
            Strategy::new(
                "Retail Partnerships",
                "Expand retail presence",
                &["Modern Trade", "E-commerce"],
                &["Sales Volume", "Market Share"],
                "10%",
            ),
        ],
        FunnelStage::Loyalty => vec![
            Strategy::new(
                "Loyalty Program",
                "Implement rewards program",
                &["Email", "Mobile App"],
                &["Repeat Purchase Rate", "Customer LTV"],
                "10%",
            ),
            Strategy::new(
                "Community Building",
                "Create brand community",
                &["Social Media", "Events"],
                &["Member Growth", "Engagement Rate"],
                "10%",
            ),
        ],
    }
}

/// A plan with all four stages populated and identifiers assigned
pub fn starter_plan(
    id: impl Into<String>,
    name: impl Into<String>,
    description: impl Into<String>,
) -> GtmPlan {
    let mut plan = GtmPlan::new(id, name, description);
    for stage in FunnelStage::ALL {
        *plan.strategies_mut(stage) = starter_strategies(stage);
    }
    plan.assign_ids();
    plan
}

/// The "Suggest" button's recommendation
pub fn suggested_strategy() -> Strategy {
    Strategy::new(
        "AI Suggested: Influencer Sampling Program",
        "Based on your audience demographics and competitor analysis, we recommend \
         implementing an influencer sampling program targeting micro-influencers in the \
         health and wellness space.",
        &["Instagram", "TikTok"],
        &["Engagement Rate", "Sample Requests", "Conversion Rate"],
        "15%",
    )
}
