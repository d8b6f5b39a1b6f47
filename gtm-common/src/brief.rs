//! Creative brief drafting and section edits
//!
//! A brief is drafted from a segment, the brand vision and a GTM plan. After
//! that the user edits it one section at a time through [`BriefEdit`].

use crate::content;
use crate::models::{BrandVision, CreativeBrief, GtmPlanRecord, Segment, TargetSegment, ToneVoice};
use crate::uuid_utils;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One editable section of a brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "snake_case")]
pub enum BriefEdit {
    Objective(String),
    KeyMessages(Vec<String>),
    MandatoryClaims(Vec<String>),
    VisualIdeas(Vec<String>),
    Tone(ToneVoice),
    TargetSegment(TargetSegment),
}

impl BriefEdit {
    /// Replace the section on `brief`; returns whether anything changed
    pub fn apply(self, brief: &mut CreativeBrief) -> bool {
        fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        match self {
            BriefEdit::Objective(text) => replace(&mut brief.objective, text),
            BriefEdit::KeyMessages(list) => replace(&mut brief.key_messages, list),
            BriefEdit::MandatoryClaims(list) => replace(&mut brief.mandatory_claims, list),
            BriefEdit::VisualIdeas(list) => replace(&mut brief.visual_ideas, list),
            BriefEdit::Tone(tone) => replace(&mut brief.tone_voice, tone),
            BriefEdit::TargetSegment(segment) => replace(&mut brief.target_segment, segment),
        }
    }
}

/// Draft the next version of a project's brief
///
/// Key messages open with the segment's positioning, followed by the
/// descriptions of the plan's critical awareness strategies.
pub fn draft_brief(
    user_id: &str,
    version: i64,
    segment: &Segment,
    vision: &BrandVision,
    plan: &GtmPlanRecord,
) -> CreativeBrief {
    let mut key_messages = vec![segment.positioning.clone()];
    key_messages.extend(
        plan.awareness_strategies
            .iter()
            .filter(|s| s.is_critical)
            .map(|s| s.description.clone()),
    );

    CreativeBrief {
        id: uuid_utils::generate().to_string(),
        project_id: plan.project_id.clone(),
        user_id: user_id.to_string(),
        version,
        objective: content::brief::objective(&segment.name),
        target_segment: TargetSegment {
            name: segment.name.clone(),
            description: segment.description.clone(),
            demographics: segment.demographics.clone(),
            psychographics: segment.psychographics.clone(),
            behaviors: segment.behaviors.clone(),
        },
        key_messages,
        mandatory_claims: content::brief::MANDATORY_CLAIMS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        tone_voice: ToneVoice {
            brand_tone: vision.tone.clone(),
            communication_dos: vision.communication_dos.clone(),
            communication_donts: vision.communication_donts.clone(),
        },
        visual_ideas: content::brief::VISUAL_IDEAS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        created_at: Utc::now(),
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering offered as a download
pub fn brief_text(brief: &CreativeBrief) -> String {
    let segment = &brief.target_segment;
    let tone = &brief.tone_voice;
    format!(
        "CREATIVE BRIEF - v{version}\n\
         Generated on {date}\n\n\
         OBJECTIVE\n{objective}\n\n\
         TARGET SEGMENT\n{name}\n{description}\n\n\
         Demographics:\n{demographics}\n\n\
         Psychographics:\n{psychographics}\n\n\
         Behaviors:\n{behaviors}\n\n\
         KEY MESSAGES\n{messages}\n\n\
         MANDATORY CLAIMS\n{claims}\n\n\
         TONE & VOICE\nBrand Tone: {tone}\n\n\
         Do's:\n{dos}\n\n\
         Don'ts:\n{donts}\n\n\
         VISUAL IDEAS\n{visuals}",
        version = brief.version,
        date = brief.created_at.format("%Y-%m-%d"),
        objective = brief.objective,
        name = segment.name,
        description = segment.description,
        demographics = bullets(&segment.demographics),
        psychographics = bullets(&segment.psychographics),
        behaviors = bullets(&segment.behaviors),
        messages = bullets(&brief.key_messages),
        claims = bullets(&brief.mandatory_claims),
        tone = tone.brand_tone,
        dos = bullets(&tone.communication_dos),
        donts = bullets(&tone.communication_donts),
        visuals = bullets(&brief.visual_ideas),
    )
}

pub fn brief_file_name(brief: &CreativeBrief) -> String {
    format!("creative-brief-v{}.txt", brief.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::gtm::starter_plan;
    use crate::models::SegmentMessages;

    fn segment() -> Segment {
        Segment {
            id: "s1".to_string(),
            project_id: "p1".to_string(),
            user_id: "u1".to_string(),
            name: "Fitness Enthusiasts".to_string(),
            description: "Active individuals".to_string(),
            demographics: vec!["Age: 18-35".to_string()],
            psychographics: vec!["Goal-oriented".to_string()],
            behaviors: vec!["Tracks macros".to_string()],
            channels: vec!["D2C".to_string()],
            positioning: "The premium bar for results.".to_string(),
            tagline: "Power Your Performance".to_string(),
            messages: SegmentMessages {
                whatsapp: String::new(),
                instagram: String::new(),
            },
            created_at: Utc::now(),
        }
    }

    fn vision() -> BrandVision {
        BrandVision {
            id: "v1".to_string(),
            project_id: "p1".to_string(),
            user_id: "u1".to_string(),
            mission: "Honest snacks".to_string(),
            tone: "Playful".to_string(),
            communication_dos: vec!["Be direct".to_string()],
            communication_donts: vec!["Overclaim".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn plan_record() -> GtmPlanRecord {
        let mut plan = starter_plan("g1", "Launch", "");
        plan.awareness_strategies[1].is_critical = true;
        GtmPlanRecord {
            id: plan.id.clone(),
            project_id: "p1".to_string(),
            user_id: "u1".to_string(),
            name: plan.name,
            description: plan.description,
            awareness_strategies: plan.awareness_strategies,
            consideration_strategies: plan.consideration_strategies,
            conversion_strategies: plan.conversion_strategies,
            loyalty_strategies: plan.loyalty_strategies,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_draft_pulls_critical_awareness_descriptions() {
        let brief = draft_brief("u1", 3, &segment(), &vision(), &plan_record());
        assert_eq!(brief.version, 3);
        assert_eq!(brief.project_id, "p1");
        assert_eq!(
            brief.key_messages,
            vec![
                "The premium bar for results.".to_string(),
                "Partner with micro-influencers in health and wellness".to_string(),
            ]
        );
        assert_eq!(brief.tone_voice.brand_tone, "Playful");
        assert!(brief.objective.contains("Fitness Enthusiasts"));
        assert_eq!(brief.mandatory_claims.len(), 3);
        assert_eq!(brief.visual_ideas.len(), 4);
    }

    #[test]
    fn test_edit_replaces_one_section() {
        let mut brief = draft_brief("u1", 1, &segment(), &vision(), &plan_record());
        let before = brief.clone();

        assert!(BriefEdit::Objective("Win the gym crowd".to_string()).apply(&mut brief));
        assert_eq!(brief.objective, "Win the gym crowd");
        assert_eq!(brief.key_messages, before.key_messages);
        assert_eq!(brief.tone_voice, before.tone_voice);

        assert!(!BriefEdit::Objective("Win the gym crowd".to_string()).apply(&mut brief));
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: BriefEdit =
            serde_json::from_str(r#"{"section":"visual_ideas","value":["Gym floor shoot"]}"#)
                .unwrap();
        assert_eq!(edit, BriefEdit::VisualIdeas(vec!["Gym floor shoot".to_string()]));
    }

    #[test]
    fn test_text_rendering() {
        let brief = draft_brief("u1", 2, &segment(), &vision(), &plan_record());
        let text = brief_text(&brief);
        assert!(text.starts_with("CREATIVE BRIEF - v2\n"));
        assert!(text.contains("Do's:\n- Be direct"));
        assert!(text.ends_with("- User-generated content featuring real testimonials"));
        assert_eq!(brief_file_name(&brief), "creative-brief-v2.txt");
    }
}
