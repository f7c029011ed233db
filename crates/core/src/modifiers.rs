//! Patient modifiers and their echoed summary map.
//!
//! A [`ModifierVector`] is the only per-request input to the pathway generator. Every one of the
//! 128 flag combinations is a legal input, so there is no validation step here.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Boolean patient risk modifiers. Omitted flags default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ModifierVector {
    /// Severe chronic kidney disease (eGFR < 30).
    pub ckd: bool,
    /// Systolic blood pressure < 100.
    pub hypotension: bool,
    /// Atrial fibrillation present.
    pub afib: bool,
    /// Diabetes present.
    pub diabetes: bool,
    /// Advanced frailty.
    pub frailty: bool,
    pub obesity: bool,
    /// Systolic blood pressure above target.
    #[serde(
        rename = "uncontrolledHypertension",
        alias = "uncontrolled_hypertension"
    )]
    pub uncontrolled_hypertension: bool,
}

impl ModifierVector {
    /// Builds a vector from the low seven bits of `bits`, in label order (bit 0 is CKD).
    ///
    /// Used to walk every combination of modifiers.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            ckd: bits & 0b000_0001 != 0,
            hypotension: bits & 0b000_0010 != 0,
            afib: bits & 0b000_0100 != 0,
            diabetes: bits & 0b000_1000 != 0,
            frailty: bits & 0b001_0000 != 0,
            obesity: bits & 0b010_0000 != 0,
            uncontrolled_hypertension: bits & 0b100_0000 != 0,
        }
    }

    /// Returns the display label and value of every modifier, in the fixed label order.
    pub fn labelled(&self) -> KeyModifiers {
        KeyModifiers([
            ("CKD", self.ckd),
            ("Hypotension", self.hypotension),
            ("Atrial Fibrillation", self.afib),
            ("Diabetes", self.diabetes),
            ("Advanced Frailty", self.frailty),
            ("Obesity", self.obesity),
            ("Uncontrolled Hypertension", self.uncontrolled_hypertension),
        ])
    }
}

/// Modifier vector echoed back as a label → flag map.
///
/// Serializes as a JSON object whose keys keep the fixed label order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyModifiers([(&'static str, bool); 7]);

impl KeyModifiers {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.0.iter().copied()
    }

    /// Labels of the modifiers that are set, in label order.
    pub fn active(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter()
            .filter_map(|(label, set)| if set { Some(label) } else { None })
    }
}

impl Serialize for KeyModifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, set) in self.iter() {
            map.serialize_entry(label, &set)?;
        }
        map.end()
    }
}
