use serde::{Deserialize, Serialize};

use super::common::Reference;
use crate::time::FhirDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub status: String,
    pub created: Option<FhirDateTime>,
    pub start: FhirDateTime,
    pub end: FhirDateTime,
    pub comment: Option<String>,
    pub patient_instruction: Option<String>,
    #[serde(default)]
    pub participant: Vec<AppointmentParticipant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentParticipant {
    pub actor: Option<Reference>,
    pub status: Option<String>,
}

impl Appointment {
    /// Actor references of all participants that carry one.
    pub fn participant_references(&self) -> impl Iterator<Item = &str> {
        self.participant
            .iter()
            .filter_map(|participant| participant.actor.as_ref())
            .filter_map(|actor| actor.reference.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_appointment() {
        let appointment: Appointment = serde_json::from_value(json!({
            "status": "booked",
            "start": "2024-05-01T09:00:00Z",
            "end": "2024-05-01T09:30:00Z"
        }))
        .unwrap();

        assert!(appointment.created.is_none());
        assert_eq!(appointment.participant_references().count(), 0);
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let result = serde_json::from_value::<Appointment>(json!({
            "status": "booked",
            "end": "2024-05-01T09:30:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_participant_references() {
        let appointment: Appointment = serde_json::from_value(json!({
            "status": "booked",
            "start": "2024-05-01T09:00:00Z",
            "end": "2024-05-01T09:30:00Z",
            "participant": [
                {"actor": {"reference": "users/patient-1"}},
                {"status": "accepted"},
                {"actor": {"reference": "users/clinician-7"}}
            ]
        }))
        .unwrap();

        let references: Vec<_> = appointment.participant_references().collect();
        assert_eq!(references, vec!["users/patient-1", "users/clinician-7"]);
    }
}
