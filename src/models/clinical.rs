// ============================================================================
// CLINICAL MODELS - Historia clínica, recetas y visitas
// ============================================================================

use serde::{Deserialize, Serialize};

use super::lab::LabOrder;

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalRecord {
    pub record_id: Option<i64>,
    pub reg_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    /// Motivo de consulta
    pub symptom: Option<String>,
    pub diagnosis: Option<String>,
    pub content: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Guardado de historia clínica con recetas y pruebas de laboratorio
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmrRequest {
    pub reg_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub prescriptions: Vec<PrescriptionItem>,
    #[serde(default)]
    pub lab_orders: Vec<LabOrderItem>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItem {
    pub drug_id: i64,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_instruction: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LabOrderItem {
    pub item_name: String,
    pub price: f64,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Prescription {
    pub pres_id: Option<i64>,
    pub record_id: Option<i64>,
    pub drug_id: Option<i64>,
    pub quantity: Option<i32>,
    pub usage_instruction: Option<String>,
    pub status: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct PrescriptionDetail {
    #[serde(flatten)]
    pub prescription: Prescription,
    pub drug_name: Option<String>,
    pub drug_spec: Option<String>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub patient_name: Option<String>,
}

/// Plantilla de historia clínica o de receta
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct EmrTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpl_id: Option<i64>,
    /// `None` = plantilla de todo el hospital
    pub dept_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub name: Option<String>,
    pub content: Option<String>,
    /// EMR o PRESCRIPTION
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<i32>,
}

/// Visita completa tal como la ve la estación del médico
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitDetail {
    pub reg_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub schedule_id: Option<i64>,
    pub status: Option<i32>,
    pub queue_number: Option<i32>,
    pub fee: Option<f64>,
    pub create_time: Option<String>,
    pub patient_name: Option<String>,
    pub gender: Option<i32>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub id_card: Option<String>,
    pub schedule_date: Option<String>,
    pub shift_type: Option<String>,
    pub dept_name: Option<String>,
    pub doctor_name: Option<String>,
    pub room_id: Option<i64>,
    pub room_name: Option<String>,
    pub room_location: Option<String>,
    pub medical_record: Option<MedicalRecord>,
    pub prescriptions: Vec<PrescriptionDetail>,
    pub lab_orders: Vec<LabOrder>,
    pub is_today: Option<bool>,
}
