use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{CodeableConcept, Quantity};
use crate::time::FhirDateTime;

/// LOINC codes used to pick blood pressure components.
pub mod loinc {
    pub const SYSTEM: &str = "http://loinc.org";
    pub const SYSTOLIC_BLOOD_PRESSURE: &str = "8480-6";
    pub const DIASTOLIC_BLOOD_PRESSURE: &str = "8462-4";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub status: Option<String>,
    pub code: Option<CodeableConcept>,
    pub value_quantity: Option<Quantity>,
    pub effective_date_time: Option<FhirDateTime>,
    #[serde(default)]
    pub component: Vec<ObservationComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    #[serde(default)]
    pub code: CodeableConcept,
    pub value_quantity: Option<Quantity>,
}

impl Observation {
    /// Quantity of the first component whose code contains `system|code`.
    pub fn component_quantity(&self, system: &str, code: &str) -> Option<&Quantity> {
        self.component
            .iter()
            .find(|component| component.code.contains(system, code))?
            .value_quantity
            .as_ref()
    }

    pub fn systolic(&self) -> Option<&Quantity> {
        self.component_quantity(loinc::SYSTEM, loinc::SYSTOLIC_BLOOD_PRESSURE)
    }

    pub fn diastolic(&self) -> Option<&Quantity> {
        self.component_quantity(loinc::SYSTEM, loinc::DIASTOLIC_BLOOD_PRESSURE)
    }
}

/// The observation collections kept per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationCategory {
    BodyWeight,
    BloodPressure,
    Creatinine,
    DryWeight,
    EstimatedGlomerularFiltrationRate,
    HeartRate,
    Potassium,
}

impl ObservationCategory {
    pub const ALL: [Self; 7] = [
        Self::BodyWeight,
        Self::BloodPressure,
        Self::Creatinine,
        Self::DryWeight,
        Self::EstimatedGlomerularFiltrationRate,
        Self::HeartRate,
        Self::Potassium,
    ];

    /// Name of the per-user collection holding this category.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::BodyWeight => "bodyWeightObservations",
            Self::BloodPressure => "bloodPressureObservations",
            Self::Creatinine => "creatinineObservations",
            Self::DryWeight => "dryWeightObservations",
            Self::EstimatedGlomerularFiltrationRate => "eGfrObservations",
            Self::HeartRate => "heartRateObservations",
            Self::Potassium => "potassiumObservations",
        }
    }

    pub fn from_collection_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.collection_name() == name)
    }
}

impl fmt::Display for ObservationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}
