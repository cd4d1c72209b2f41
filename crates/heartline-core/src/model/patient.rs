use serde::{Deserialize, Serialize};

/// The part of a user document that scope resolution needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub organization: Option<String>,
}

impl PatientProfile {
    pub const PATIENT_TYPE: &'static str = "patient";

    pub fn is_patient(&self) -> bool {
        self.user_type.as_deref() == Some(Self::PATIENT_TYPE)
    }

    /// Exact, case-sensitive organization comparison.
    pub fn belongs_to(&self, organization: &str) -> bool {
        self.organization.as_deref() == Some(organization)
    }
}
