//! HFpEF pathway generation.
//!
//! A pathway is built from a fixed three-step template. Each step is annotated by a short list of
//! modifier rules, run in a fixed order, and the result is bundled with the leading trial records
//! and the fixed guideline provenance.
//!
//! Rules write into the same annotation fields, so when several modifiers touch one step the rule
//! that runs last decides the final value. In particular the frailty warning replaces the CKD and
//! hypotension warnings on step 2.

use crate::constants::{
    GUIDELINE_SOURCES, LAST_UPDATED, MAX_TRIAL_SUPPORT, MECHANISTIC_RATIONALE, SUPPORTED_DISEASE,
};
use crate::evidence::{EvidenceConfidence, EvidenceLevel, RecommendationClass};
use crate::modifiers::{KeyModifiers, ModifierVector};
use crate::trials::{GuidelineData, TrialRecord};
use serde::Serialize;
use utoipa::ToSchema;

pub const CKD_WARNING: &str = "Monitor eGFR and potassium; dose adjustment may be required";
pub const HYPOTENSION_WARNING: &str = "Use with caution; monitor blood pressure closely";
pub const FRAILTY_WARNING: &str =
    "Consider frailty assessment; may need dose reduction or slower titration";
pub const AFIB_RATIONALE: &str = "Beta-blocker for rate control in atrial fibrillation; consider rhythm control in select patients";

/// Static definition of one pathway step.
#[derive(Debug)]
pub struct StepTemplate {
    pub step_number: u8,
    pub step_name: &'static str,
    pub therapy_class: &'static str,
    pub recommendation_class: RecommendationClass,
    pub level_of_evidence: EvidenceLevel,
    pub rationale: &'static str,
    /// Trial or practice evidence quoted under the guideline grading bullet.
    pub evidence_note: &'static str,
}

impl StepTemplate {
    /// Guideline and evidence bullets shown with the step.
    pub fn why_recommended(&self) -> Vec<String> {
        vec![
            format!(
                "Guideline: ACC/AHA Class {}, Level {} for {}.",
                self.recommendation_class.label(),
                self.level_of_evidence.label(),
                SUPPORTED_DISEASE
            ),
            format!("Evidence: {}", self.evidence_note),
        ]
    }
}

/// The HFpEF pathway template, in step order.
pub const BASE_STEPS: [StepTemplate; 3] = [
    StepTemplate {
        step_number: 1,
        step_name: "Foundational Therapy",
        therapy_class: "SGLT2 Inhibitor",
        recommendation_class: RecommendationClass::I,
        level_of_evidence: EvidenceLevel::A,
        rationale: "SGLT2 inhibitors reduce heart failure hospitalizations and cardiovascular death in HFpEF regardless of diabetes status.",
        evidence_note: "Supported by EMPEROR-Preserved and DELIVER trials.",
    },
    StepTemplate {
        step_number: 2,
        step_name: "Neurohormonal Modulation",
        therapy_class: "ARNI or ACEi/ARB",
        recommendation_class: RecommendationClass::IIa,
        level_of_evidence: EvidenceLevel::BR,
        rationale: "ARNI may provide benefit in selected HFpEF patients; ACEi/ARB are considered when ARNI is not appropriate.",
        evidence_note: "PARAGON-HF trial demonstrated benefit in selected patients.",
    },
    StepTemplate {
        step_number: 3,
        step_name: "Comorbidity Optimization",
        therapy_class: "MRA, Beta-blocker, or Rate Control",
        recommendation_class: RecommendationClass::IIb,
        level_of_evidence: EvidenceLevel::CLD,
        rationale: "MRA may be considered in select patients; beta-blockers for rate control in AFib; optimize comorbidities.",
        evidence_note: "Individualized approach based on comorbidities and patient factors.",
    },
];

/// One annotated step of a generated pathway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct TherapyStep {
    pub step_number: u8,
    pub step_name: String,
    pub therapy_class: String,
    pub recommendation_class: RecommendationClass,
    pub level_of_evidence: EvidenceLevel,
    pub rationale: String,
    pub contraindicated: bool,
    pub priority: bool,
    pub warning: Option<String>,
    /// Guideline and evidence bullets.
    pub why_recommended: Option<Vec<String>>,
    pub phenotype_note: Option<String>,
}

impl From<&StepTemplate> for TherapyStep {
    fn from(template: &StepTemplate) -> Self {
        Self {
            step_number: template.step_number,
            step_name: template.step_name.to_owned(),
            therapy_class: template.therapy_class.to_owned(),
            recommendation_class: template.recommendation_class,
            level_of_evidence: template.level_of_evidence,
            rationale: template.rationale.to_owned(),
            contraindicated: false,
            priority: false,
            warning: None,
            why_recommended: Some(template.why_recommended()),
            phenotype_note: None,
        }
    }
}

/// A generated pathway with its supporting evidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct PathwayResult {
    pub clinical_summary: String,
    pub steps: Vec<TherapyStep>,
    /// Modifier label mapped to whether it is present, in a fixed order.
    #[schema(value_type = Object)]
    pub key_modifiers: KeyModifiers,
    pub mechanistic_rationale: String,
    pub trial_support: Vec<TrialRecord>,
    pub evidence_confidence: EvidenceConfidence,
    pub guideline_sources: Vec<String>,
    pub last_updated: String,
}

type AnnotationRule = fn(&ModifierVector, &mut TherapyStep);

/// Annotation rules in evaluation order. Order matters: later rules overwrite earlier ones.
const ANNOTATION_RULES: [AnnotationRule; 5] = [
    annotate_ckd,
    annotate_hypotension,
    annotate_afib,
    annotate_diabetes,
    annotate_frailty,
];

fn annotate_ckd(modifiers: &ModifierVector, step: &mut TherapyStep) {
    if modifiers.ckd && step.step_number == 2 {
        step.warning = Some(CKD_WARNING.to_owned());
    }
}

fn annotate_hypotension(modifiers: &ModifierVector, step: &mut TherapyStep) {
    if modifiers.hypotension && matches!(step.step_number, 2 | 3) {
        // A caution, not an absolute contraindication.
        step.contraindicated = false;
        step.warning = Some(HYPOTENSION_WARNING.to_owned());
    }
}

fn annotate_afib(modifiers: &ModifierVector, step: &mut TherapyStep) {
    if modifiers.afib && step.step_number == 3 {
        step.priority = true;
        step.rationale = AFIB_RATIONALE.to_owned();
    }
}

fn annotate_diabetes(modifiers: &ModifierVector, step: &mut TherapyStep) {
    if modifiers.diabetes && step.step_number == 1 {
        step.priority = true;
    }
}

fn annotate_frailty(modifiers: &ModifierVector, step: &mut TherapyStep) {
    if modifiers.frailty && matches!(step.step_number, 2 | 3) {
        step.warning = Some(FRAILTY_WARNING.to_owned());
    }
}

/// Builds the one-sentence clinical summary for the given modifiers.
pub fn clinical_summary(key_modifiers: &KeyModifiers) -> String {
    let active: Vec<&str> = key_modifiers.active().collect();
    if active.is_empty() {
        format!(
            "For a patient with {}, the following standard management pathway is recommended:",
            SUPPORTED_DISEASE
        )
    } else {
        format!(
            "For a patient with {} and {}, the following management pathway is recommended:",
            SUPPORTED_DISEASE,
            active.join(", ")
        )
    }
}

/// Generates the HFpEF management pathway for a set of patient modifiers.
///
/// This is total over its inputs. Empty reference data produces an empty `trial_support`; it is
/// up to the caller to decide whether that is acceptable (see
/// [`crate::validation::validate_pathway`]).
///
/// # Arguments
///
/// * `modifiers` - Patient modifiers for this request.
/// * `guidelines` - Guideline document. Provenance on the result is fixed, so this is only
///   inspected for diagnostics.
/// * `trials` - Trial records in reference order. The first few are attached unfiltered.
pub fn generate(
    modifiers: &ModifierVector,
    guidelines: &GuidelineData,
    trials: &[TrialRecord],
) -> PathwayResult {
    let steps: Vec<TherapyStep> = BASE_STEPS
        .iter()
        .map(|template| {
            let mut step = TherapyStep::from(template);
            for rule in ANNOTATION_RULES {
                rule(modifiers, &mut step);
            }
            step
        })
        .collect();

    let key_modifiers = modifiers.labelled();
    let clinical_summary = clinical_summary(&key_modifiers);

    let trial_support: Vec<TrialRecord> =
        trials.iter().take(MAX_TRIAL_SUPPORT).cloned().collect();

    tracing::debug!(
        active_modifiers = key_modifiers.active().count(),
        guideline_sections = guidelines.len(),
        trials_available = trials.len(),
        trials_attached = trial_support.len(),
        "generated pathway"
    );

    PathwayResult {
        clinical_summary,
        steps,
        key_modifiers,
        mechanistic_rationale: MECHANISTIC_RATIONALE.to_owned(),
        trial_support,
        evidence_confidence: EvidenceConfidence::High,
        guideline_sources: GUIDELINE_SOURCES.iter().map(|s| (*s).to_owned()).collect(),
        last_updated: LAST_UPDATED.to_owned(),
    }
}
