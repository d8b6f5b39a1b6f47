//! Channel feasibility grid

use rand::seq::SliceRandom;
use rand::Rng;

pub const CITY_TIERS: [&str; 3] = ["Tier-1", "Tier-2", "Tier-3"];
pub const CHANNELS: [&str; 4] = ["E-commerce", "Quick Commerce", "Modern Trade", "General Trade"];
pub const SCORES: [&str; 3] = ["High", "Medium", "Low"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityCell {
    pub city_tier: &'static str,
    pub channel: &'static str,
    pub score: &'static str,
    pub rationale: String,
}

/// Rationale for a scored cell; combinations without a written rationale
/// get a generic sentence.
pub fn rationale(tier: &str, channel: &str, score: &str) -> String {
    let known = match (tier, channel, score) {
        ("Tier-1", "E-commerce", "High") => Some(
            "Strong digital adoption and high smartphone penetration. Consumers value \
             convenience and are willing to pay premium for doorstep delivery.",
        ),
        ("Tier-1", "E-commerce", "Medium") => {
            Some("Moderate digital adoption but high competition in the space.")
        }
        ("Tier-1", "E-commerce", "Low") => {
            Some("Market saturation and high customer acquisition costs.")
        }
        ("Tier-1", "Quick Commerce", "High") => {
            Some("Dense urban population with high demand for instant delivery.")
        }
        ("Tier-1", "Quick Commerce", "Medium") => {
            Some("Growing demand but operational challenges in some areas.")
        }
        ("Tier-1", "Quick Commerce", "Low") => Some("Limited reach and high operational costs."),
        ("Tier-2", "Modern Trade", "High") => {
            Some("Rapidly growing organized retail presence with strong consumer pull.")
        }
        ("Tier-2", "Modern Trade", "Medium") => Some("Emerging market with potential for growth."),
        ("Tier-2", "Modern Trade", "Low") => Some("Limited presence of organized retail chains."),
        ("Tier-2", "General Trade", "High") => Some("Strong existing network and consumer trust."),
        ("Tier-2", "General Trade", "Medium") => Some("Good coverage but modernization needed."),
        ("Tier-2", "General Trade", "Low") => {
            Some("Fragmented market with logistics challenges.")
        }
        _ => None,
    };

    match known {
        Some(text) => text.to_string(),
        None => format!(
            "{} feasibility based on market analysis of {} in {} cities.",
            score, channel, tier
        ),
    }
}

/// Every tier × channel combination, tier-major, each scored at random
pub fn scored_grid<R: Rng + ?Sized>(rng: &mut R) -> Vec<FeasibilityCell> {
    let mut cells = Vec::with_capacity(CITY_TIERS.len() * CHANNELS.len());
    for tier in CITY_TIERS {
        for channel in CHANNELS {
            let score = SCORES.choose(rng).copied().unwrap_or("Medium");
            cells.push(FeasibilityCell {
                city_tier: tier,
                channel,
                score,
                rationale: rationale(tier, channel, score),
            });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_covers_every_combination() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = scored_grid(&mut rng);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid[0].city_tier, "Tier-1");
        assert_eq!(grid[0].channel, "E-commerce");
        assert_eq!(grid[11].city_tier, "Tier-3");
        assert_eq!(grid[11].channel, "General Trade");
        assert!(grid.iter().all(|c| SCORES.contains(&c.score)));
    }

    #[test]
    fn test_rationale_fallback() {
        assert_eq!(
            rationale("Tier-3", "Modern Trade", "Low"),
            "Low feasibility based on market analysis of Modern Trade in Tier-3 cities."
        );
        assert_eq!(
            rationale("Tier-2", "General Trade", "High"),
            "Strong existing network and consumer trust."
        );
    }
}
