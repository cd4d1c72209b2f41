//! Observation tables, one per category.
//!
//! Blood pressure readings carry their values in LOINC-coded components;
//! every other category carries a single `valueQuantity`.

use heartline_core::{Observation, ObservationCategory, Quantity};
use heartline_storage::ClinicalRecord;
use heartline_tabular::build_table;

use super::{cell, text};

pub const STANDARD_HEADERS: [&str; 4] = ["id", "effectiveDateTime", "value", "unit"];

pub const BLOOD_PRESSURE_HEADERS: [&str; 6] = [
    "id",
    "effectiveDateTime",
    "systolicValue",
    "systolicUnit",
    "diastolicValue",
    "diastolicUnit",
];

/// Renders the table of one observation category.
pub type ObservationRenderer = fn(&[ClinicalRecord<Observation>]) -> Vec<u8>;

/// Table renderer for `category`.
pub fn renderer(category: ObservationCategory) -> ObservationRenderer {
    match category {
        ObservationCategory::BloodPressure => render_blood_pressure,
        ObservationCategory::BodyWeight
        | ObservationCategory::Creatinine
        | ObservationCategory::DryWeight
        | ObservationCategory::EstimatedGlomerularFiltrationRate
        | ObservationCategory::HeartRate
        | ObservationCategory::Potassium => render_standard,
    }
}

fn quantity_cells(quantity: Option<&Quantity>) -> [String; 2] {
    [
        cell(quantity.and_then(|quantity| quantity.value)),
        text(quantity.and_then(|quantity| quantity.unit.as_deref())),
    ]
}

pub fn project_standard(record: &ClinicalRecord<Observation>) -> [String; 4] {
    let observation = &record.content;
    let [value, unit] = quantity_cells(observation.value_quantity.as_ref());
    [
        record.id.clone(),
        cell(observation.effective_date_time),
        value,
        unit,
    ]
}

pub fn project_blood_pressure(record: &ClinicalRecord<Observation>) -> [String; 6] {
    let observation = &record.content;
    let [systolic_value, systolic_unit] = quantity_cells(observation.systolic());
    let [diastolic_value, diastolic_unit] = quantity_cells(observation.diastolic());
    [
        record.id.clone(),
        cell(observation.effective_date_time),
        systolic_value,
        systolic_unit,
        diastolic_value,
        diastolic_unit,
    ]
}

pub fn render_standard(records: &[ClinicalRecord<Observation>]) -> Vec<u8> {
    build_table(&STANDARD_HEADERS, records, project_standard)
}

pub fn render_blood_pressure(records: &[ClinicalRecord<Observation>]) -> Vec<u8> {
    build_table(&BLOOD_PRESSURE_HEADERS, records, project_blood_pressure)
}
