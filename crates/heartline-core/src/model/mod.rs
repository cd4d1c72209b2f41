//! Clinical record types read by the exporter.
//!
//! Field names follow the FHIR JSON representation (camelCase). Every type is
//! tolerant of absent optional elements; only the fields the export tables
//! need are modelled, unknown fields are ignored.

mod appointment;
mod common;
mod medication;
mod message;
mod observation;
mod patient;
mod questionnaire;
mod questionnaire_response;
mod symptom_score;

pub use appointment::{Appointment, AppointmentParticipant};
pub use common::{CodeableConcept, Coding, Quantity, Reference};
pub use medication::{Dosage, DoseAndRate, MedicationRequest, Timing, TimingRepeat};
pub use message::UserMessage;
pub use observation::{Observation, ObservationCategory, ObservationComponent, loinc};
pub use patient::PatientProfile;
pub use questionnaire::{Questionnaire, QuestionnaireAnswerOption, QuestionnaireItem};
pub use questionnaire_response::{
    QuestionnaireResponse, QuestionnaireResponseAnswer, QuestionnaireResponseItem,
};
pub use symptom_score::SymptomScore;
