//! Funnel stages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed marketing lifecycle buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    Conversion,
    Loyalty,
}

impl FunnelStage {
    /// Display and export order
    pub const ALL: [FunnelStage; 4] = [
        FunnelStage::Awareness,
        FunnelStage::Consideration,
        FunnelStage::Conversion,
        FunnelStage::Loyalty,
    ];

    /// Lowercase key, also the identifier prefix of every strategy in the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            FunnelStage::Awareness => "awareness",
            FunnelStage::Consideration => "consideration",
            FunnelStage::Conversion => "conversion",
            FunnelStage::Loyalty => "loyalty",
        }
    }

    /// Human-readable label, used as the first export column
    pub fn label(&self) -> &'static str {
        match self {
            FunnelStage::Awareness => "Awareness",
            FunnelStage::Consideration => "Consideration",
            FunnelStage::Conversion => "Conversion",
            FunnelStage::Loyalty => "Loyalty",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Stage encoded in a strategy identifier (`"<stage>-<n>"`, `"<stage>-<n>-sub-..."`)
    ///
    /// # Examples
    /// ```
    /// use gtm_common::funnel::FunnelStage;
    ///
    /// assert_eq!(FunnelStage::of_id("loyalty-3"), Some(FunnelStage::Loyalty));
    /// assert_eq!(FunnelStage::of_id("awareness-0-sub-ab12"), Some(FunnelStage::Awareness));
    /// assert_eq!(FunnelStage::of_id("retention-1"), None);
    /// ```
    pub fn of_id(id: &str) -> Option<Self> {
        let prefix = id.split('-').next()?;
        prefix.parse().ok()
    }

    /// Identifier for the `n`th slot of this stage
    pub fn item_id(&self, n: usize) -> String {
        format!("{}-{}", self.as_str(), n)
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunnelStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awareness" => Ok(FunnelStage::Awareness),
            "consideration" => Ok(FunnelStage::Consideration),
            "conversion" => Ok(FunnelStage::Conversion),
            "loyalty" => Ok(FunnelStage::Loyalty),
            other => Err(format!("unknown funnel stage: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for stage in FunnelStage::ALL {
            assert_eq!(stage.as_str().parse::<FunnelStage>().unwrap(), stage);
            assert_eq!(FunnelStage::from_label(stage.label()), Some(stage));
        }
    }

    #[test]
    fn test_item_id_prefix() {
        let id = FunnelStage::Conversion.item_id(4);
        assert_eq!(id, "conversion-4");
        assert_eq!(FunnelStage::of_id(&id), Some(FunnelStage::Conversion));
    }

    #[test]
    fn test_bare_stage_name_is_its_own_prefix() {
        assert_eq!(FunnelStage::of_id("consideration"), Some(FunnelStage::Consideration));
        assert_eq!(FunnelStage::of_id(""), None);
    }
}
