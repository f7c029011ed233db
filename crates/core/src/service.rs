//! Pathway service.
//!
//! Binds a reference data source to the generator and the boundary checks. API crates call into
//! this service and only map its errors onto their transport.

use crate::config::CoreConfig;
use crate::constants::{GUIDELINE_VERSION, LAST_UPDATED, SUPPORTED_DISEASE};
use crate::evidence::EvidenceConfidence;
use crate::modifiers::ModifierVector;
use crate::pathway::{generate, PathwayResult};
use crate::reference::{JsonFileSource, ReferenceSource};
use crate::trials::{leading_trial_records, GuidelineData, TrialData};
use crate::validation::{validate_disease, validate_pathway};
use crate::CdsResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// A request for a management pathway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PathwayRequest {
    /// Disease selector. Only `HFpEF` is supported.
    #[serde(default = "default_disease")]
    pub disease: String,
    pub modifiers: ModifierVector,
}

fn default_disease() -> String {
    SUPPORTED_DISEASE.to_owned()
}

impl PathwayRequest {
    pub fn new(modifiers: ModifierVector) -> Self {
        Self {
            disease: default_disease(),
            modifiers,
        }
    }
}

/// Version information for the guideline content behind the pathway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct GuidelineMetadata {
    pub disease: String,
    pub guideline_version: String,
    pub last_updated: String,
    pub evidence_confidence: EvidenceConfidence,
}

/// Pathway operations over a reference data source.
#[derive(Clone)]
pub struct PathwayService {
    source: Arc<dyn ReferenceSource>,
}

impl PathwayService {
    pub fn new(source: Arc<dyn ReferenceSource>) -> Self {
        Self { source }
    }

    /// Creates a service that reads the JSON reference files from the configured data directory
    /// on every call.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self::new(Arc::new(JsonFileSource::new(cfg.data_dir())))
    }

    /// Generates and validates a pathway for `request`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `CdsError::UnsupportedDisease` if the disease selector is not `HFpEF`,
    /// - `CdsError::FileRead` / `CdsError::Deserialization` if reference data cannot be loaded or
    ///   one of the leading trial records is malformed,
    /// - `CdsError::ValidationFailed` if the pathway has no steps or no supporting trials.
    pub fn pathway(&self, request: &PathwayRequest) -> CdsResult<PathwayResult> {
        validate_disease(&request.disease)?;

        let guidelines = self.source.load_guidelines()?;
        let trials = leading_trial_records(&self.source.load_trials()?)?;

        let pathway = generate(&request.modifiers, &guidelines, &trials);
        validate_pathway(&pathway)?;

        tracing::info!(
            "generated pathway ({} steps, {} trials)",
            pathway.steps.len(),
            pathway.trial_support.len()
        );
        Ok(pathway)
    }

    /// All trial records, in reference order and as stored.
    pub fn trials(&self) -> CdsResult<TrialData> {
        self.source.load_trials()
    }

    /// The full guideline document.
    pub fn guidelines(&self) -> CdsResult<GuidelineData> {
        self.source.load_guidelines()
    }

    pub fn metadata(&self) -> GuidelineMetadata {
        GuidelineMetadata {
            disease: SUPPORTED_DISEASE.to_owned(),
            guideline_version: GUIDELINE_VERSION.to_owned(),
            last_updated: LAST_UPDATED.to_owned(),
            evidence_confidence: EvidenceConfidence::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::StaticSource;
    use crate::trials::TrialRecord;
    use crate::CdsError;
    use serde_json::Value;

    fn trial(name: &str) -> TrialRecord {
        TrialRecord {
            name: name.to_owned(),
            population: "HFpEF".to_owned(),
            intervention: "Active therapy".to_owned(),
            comparator: "Placebo".to_owned(),
            primary_endpoint: "CV death or HF hospitalization".to_owned(),
            outcome: "Reduced events".to_owned(),
            abstract_link: None,
            relevance_general: Some(format!("{name} relevance")),
            relevance_by_phenotype: None,
        }
    }

    fn to_data(trials: &[TrialRecord]) -> TrialData {
        trials
            .iter()
            .map(|t| serde_json::to_value(t).expect("serialize trial"))
            .collect()
    }

    fn service_with(trials: TrialData) -> PathwayService {
        let mut guidelines = GuidelineData::new();
        guidelines.insert("version".into(), serde_json::json!("2022"));
        PathwayService::new(Arc::new(StaticSource::new(guidelines, trials)))
    }

    fn shipped_service() -> PathwayService {
        let data_dir = crate::config::resolve_data_dir(None).expect("resolve data dir");
        PathwayService::from_config(&CoreConfig::new(data_dir))
    }

    fn keys(value: &Value) -> Vec<&str> {
        value
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn request_disease_defaults_to_hfpef() {
        let request: PathwayRequest =
            serde_json::from_str(r#"{"modifiers": {"ckd": true}}"#).expect("parse request");
        assert_eq!(request.disease, "HFpEF");
        assert!(request.modifiers.ckd);
    }

    #[test]
    fn request_requires_modifiers() {
        assert!(serde_json::from_str::<PathwayRequest>(r#"{"disease": "HFpEF"}"#).is_err());
    }

    #[test]
    fn pathway_rejects_other_diseases_before_loading_data() {
        let service = service_with(TrialData::new());
        let request = PathwayRequest {
            disease: "HFrEF".into(),
            modifiers: ModifierVector::default(),
        };

        let err = service.pathway(&request).expect_err("should reject");
        assert!(matches!(err, CdsError::UnsupportedDisease(_)));
    }

    #[test]
    fn pathway_without_trials_fails_validation() {
        let service = service_with(TrialData::new());
        let err = service
            .pathway(&PathwayRequest::new(ModifierVector::default()))
            .expect_err("should fail validation");
        assert!(matches!(err, CdsError::ValidationFailed(_)));
    }

    #[test]
    fn pathway_uses_source_trials() {
        let trials: Vec<_> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|n| trial(n))
            .collect();
        let service = service_with(to_data(&trials));

        let pathway = service
            .pathway(&PathwayRequest::new(ModifierVector::default()))
            .expect("generate pathway");
        assert_eq!(pathway.trial_support, trials[..4].to_vec());
    }

    #[test]
    fn read_surfaces_return_source_data_untouched() {
        let trials = to_data(&[trial("A"), trial("B"), trial("C"), trial("D"), trial("E")]);
        let service = service_with(trials.clone());

        assert_eq!(service.trials().expect("trials"), trials);
        assert_eq!(service.guidelines().expect("guidelines")["version"], "2022");
    }

    #[test]
    fn malformed_record_after_the_leading_four_does_not_fail_either_surface() {
        let mut trials = to_data(&[trial("A"), trial("B"), trial("C"), trial("D"), trial("E")]);
        trials.push(serde_json::json!({"name": "partial"}));
        let service = service_with(trials.clone());

        let pathway = service
            .pathway(&PathwayRequest::new(ModifierVector::default()))
            .expect("generate pathway");
        let names: Vec<_> = pathway.trial_support.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        let listed = service.trials().expect("trials");
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[5], serde_json::json!({"name": "partial"}));
    }

    #[test]
    fn malformed_leading_record_fails_the_pathway_only() {
        let mut trials = vec![serde_json::json!({"name": "partial"})];
        trials.extend(to_data(&[trial("B"), trial("C")]));
        let service = service_with(trials);

        let err = service
            .pathway(&PathwayRequest::new(ModifierVector::default()))
            .expect_err("should fail");
        assert!(matches!(err, CdsError::Deserialization(_)));
        assert_eq!(service.trials().expect("trials").len(), 3);
    }

    #[test]
    fn trials_listing_keeps_fields_outside_the_record_model() {
        let mut record = serde_json::to_value(trial("A")).expect("serialize trial");
        record["registry_id"] = serde_json::json!("NCT03057977");
        let service = service_with(vec![record.clone()]);

        let listed = service.trials().expect("trials");
        assert_eq!(listed, vec![record]);
        assert_eq!(listed[0]["registry_id"], "NCT03057977");
    }

    #[test]
    fn shipped_reference_data_produces_a_valid_pathway() {
        let service = shipped_service();

        let trials = service.trials().expect("load shipped trials");
        assert!(trials.len() > 4);

        let pathway = service
            .pathway(&PathwayRequest::new(ModifierVector::from_bits(0b111_1111)))
            .expect("generate pathway");
        let leading = leading_trial_records(&trials).expect("type shipped trials");
        assert_eq!(pathway.trial_support, leading);
        assert!(!service.guidelines().expect("load guidelines").is_empty());
    }

    #[test]
    fn shipped_reference_data_keeps_file_key_order() {
        let service = shipped_service();

        let guidelines = service.guidelines().expect("load guidelines");
        let guideline_keys: Vec<_> = guidelines.keys().map(String::as_str).collect();
        assert_eq!(guideline_keys, vec!["disease", "sources", "recommendations"]);

        let trials = service.trials().expect("load shipped trials");
        let deliver = trials
            .iter()
            .find(|t| t["name"] == "DELIVER")
            .expect("DELIVER is shipped");
        assert_eq!(
            keys(&deliver["relevance_by_phenotype"]),
            vec!["frailty_dominant", "afib_predominant"]
        );

        let pathway = service
            .pathway(&PathwayRequest::new(ModifierVector::default()))
            .expect("generate pathway");
        let typed = pathway
            .trial_support
            .iter()
            .find(|t| t.name == "DELIVER")
            .and_then(|t| t.relevance_by_phenotype.as_ref())
            .expect("DELIVER phenotype relevance");
        let typed_keys: Vec<_> = typed.keys().map(String::as_str).collect();
        assert_eq!(typed_keys, vec!["frailty_dominant", "afib_predominant"]);
    }

    #[test]
    fn metadata_is_fixed() {
        let metadata = service_with(TrialData::new()).metadata();
        assert_eq!(metadata.disease, "HFpEF");
        assert_eq!(metadata.guideline_version, "ACC/AHA/HFSA 2022, ESC 2021");
        assert_eq!(metadata.last_updated, "2024-01-15");
        assert_eq!(metadata.evidence_confidence, EvidenceConfidence::High);
    }
}
