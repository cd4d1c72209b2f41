//! # heartline-core
//!
//! Clinical record model shared by the Heartline export crates.
//!
//! The types in [`model`] mirror the subset of FHIR (and ENGAGE-HF specific
//! records) that the exporter reads. They are read-only snapshots: nothing in
//! this workspace mutates or persists them.

pub mod error;
pub mod item_tree;
pub mod localized;
pub mod model;
pub mod time;

pub use error::{CoreError, Result};
pub use item_tree::{ItemTree, TreeItem};
pub use localized::LocalizedText;
pub use model::{
    Appointment, AppointmentParticipant, CodeableConcept, Coding, Dosage, DoseAndRate,
    MedicationRequest, Observation, ObservationCategory, ObservationComponent, PatientProfile,
    Quantity, Questionnaire, QuestionnaireAnswerOption, QuestionnaireItem, QuestionnaireResponse,
    QuestionnaireResponseAnswer, QuestionnaireResponseItem, Reference, SymptomScore, Timing,
    TimingRepeat, UserMessage,
};
pub use time::FhirDateTime;
