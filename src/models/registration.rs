use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub patient_id: i64,
    pub schedule_id: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub reg_id: i64,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub reg_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub schedule_id: Option<i64>,
    pub status: Option<i32>,
    pub queue_number: Option<i32>,
    pub fee: Option<f64>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Registro del paciente con datos de departamento y médico
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDetail {
    #[serde(flatten)]
    pub registration: Registration,
    pub dept_name: Option<String>,
    pub doctor_name: Option<String>,
    /// yyyy-MM-dd
    pub schedule_date: Option<String>,
    pub shift: Option<String>,
}
