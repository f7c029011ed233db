//! Guideline grading enumerations.
//!
//! These follow the ACC/AHA grading scheme. Wire values match the labels clinicians read in the
//! guideline documents (for example `"Class IIa"` and `"B-R"`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Strength of a guideline recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RecommendationClass {
    /// Strong: benefit >>> risk.
    #[serde(rename = "Class I")]
    I,
    /// Moderate: benefit >> risk.
    #[serde(rename = "Class IIa")]
    IIa,
    /// Weak: benefit >= risk.
    #[serde(rename = "Class IIb")]
    IIb,
    /// No benefit or harm.
    #[serde(rename = "Class III")]
    III,
}

impl RecommendationClass {
    /// Short label as written in guideline tables, e.g. `IIa`.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationClass::I => "I",
            RecommendationClass::IIa => "IIa",
            RecommendationClass::IIb => "IIb",
            RecommendationClass::III => "III",
        }
    }
}

/// Quality of the evidence behind a recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EvidenceLevel {
    /// High quality evidence from more than one RCT.
    #[serde(rename = "A")]
    A,
    /// Moderate quality evidence from one or more RCTs.
    #[serde(rename = "B-R")]
    BR,
    /// Moderate quality evidence from non-randomized studies.
    #[serde(rename = "B-NR")]
    BNR,
    /// Limited data.
    #[serde(rename = "C-LD")]
    CLD,
    /// Consensus of expert opinion.
    #[serde(rename = "C-EO")]
    CEO,
}

impl EvidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EvidenceLevel::A => "A",
            EvidenceLevel::BR => "B-R",
            EvidenceLevel::BNR => "B-NR",
            EvidenceLevel::CLD => "C-LD",
            EvidenceLevel::CEO => "C-EO",
        }
    }
}

/// Overall confidence in the evidence supporting a pathway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EvidenceConfidence {
    High,
    Moderate,
    Emerging,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_class_uses_guideline_wording() {
        let json = serde_json::to_string(&RecommendationClass::IIa).expect("serialize");
        assert_eq!(json, r#""Class IIa""#);

        let parsed: RecommendationClass =
            serde_json::from_str(r#""Class III""#).expect("deserialize");
        assert_eq!(parsed, RecommendationClass::III);
    }

    #[test]
    fn evidence_level_wire_value_matches_label() {
        for level in [
            EvidenceLevel::A,
            EvidenceLevel::BR,
            EvidenceLevel::BNR,
            EvidenceLevel::CLD,
            EvidenceLevel::CEO,
        ] {
            let json = serde_json::to_string(&level).expect("serialize");
            assert_eq!(json, format!("\"{}\"", level.label()));
        }
    }

    #[test]
    fn rejects_unknown_grades() {
        assert!(serde_json::from_str::<EvidenceLevel>(r#""D""#).is_err());
        assert!(serde_json::from_str::<RecommendationClass>(r#""I""#).is_err());
    }

    #[test]
    fn confidence_serializes_as_plain_label() {
        let json = serde_json::to_string(&EvidenceConfidence::High).expect("serialize");
        assert_eq!(json, r#""High""#);
    }
}
