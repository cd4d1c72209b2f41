use serde::{Deserialize, Serialize};

use super::common::{Quantity, Reference};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRequest {
    pub medication_reference: Option<Reference>,
    #[serde(default)]
    pub dosage_instruction: Vec<Dosage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    pub timing: Option<Timing>,
    #[serde(default)]
    pub dose_and_rate: Vec<DoseAndRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub repeat: Option<TimingRepeat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingRepeat {
    pub frequency: Option<f64>,
    pub period: Option<f64>,
    pub period_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseAndRate {
    pub dose_quantity: Option<Quantity>,
}

impl MedicationRequest {
    /// Segment `index` (0-based) of the medication reference path.
    ///
    /// References look like `medications/{medicationCode}/drugs/{drugCode}`;
    /// shorter paths simply have fewer segments.
    pub fn reference_segment(&self, index: usize) -> Option<&str> {
        self.medication_reference
            .as_ref()?
            .reference
            .as_deref()?
            .split('/')
            .nth(index)
    }

    pub fn medication_code(&self) -> Option<&str> {
        self.reference_segment(1)
    }

    pub fn drug_code(&self) -> Option<&str> {
        self.reference_segment(3)
    }

    /// `dosageInstruction[0].doseAndRate[0].doseQuantity`
    pub fn dose_quantity(&self) -> Option<&Quantity> {
        self.dosage_instruction
            .first()?
            .dose_and_rate
            .first()?
            .dose_quantity
            .as_ref()
    }

    /// `dosageInstruction[0].timing.repeat.frequency`
    pub fn frequency(&self) -> Option<f64> {
        self.dosage_instruction
            .first()?
            .timing
            .as_ref()?
            .repeat
            .as_ref()?
            .frequency
    }
}
