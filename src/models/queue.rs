use serde::{Deserialize, Serialize};

/// Estado de la cola de un departamento para la pantalla pública
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueInfo {
    pub dept_id: Option<i64>,
    pub dept_name: Option<String>,
    pub current: Option<CurrentPatient>,
    pub waiting: Vec<WaitingPatient>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentPatient {
    pub reg_id: Option<i64>,
    pub queue_number: Option<i32>,
    pub patient_name: Option<String>,
    pub room_number: Option<String>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct WaitingPatient {
    pub reg_id: Option<i64>,
    pub queue_number: Option<i32>,
    pub patient_name: Option<String>,
}
