use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    pub dept_name: Option<String>,
    pub location: Option<String>,
    /// Pantalla de cola asociada
    pub screen_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
}

/// Hueco de agenda con cupo, tal como lo lista `/schedule/list`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleSlot {
    pub schedule_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub doctor_name: Option<String>,
    pub dept_id: Option<i64>,
    pub dept_name: Option<String>,
    pub room_id: Option<i64>,
    pub room_name: Option<String>,
    pub room_location: Option<String>,
    pub date: Option<NaiveDate>,
    pub shift: Option<String>,
    pub max_quota: Option<i32>,
    pub current_count: Option<i32>,
    pub quota_left: Option<i32>,
    pub fee: Option<f64>,
    pub expired: Option<bool>,
}

impl ScheduleSlot {
    pub fn is_bookable(&self) -> bool {
        !self.expired.unwrap_or(false) && self.quota_left.unwrap_or(0) > 0
    }
}

/// Registro de agenda tal como se guarda (`/schedule/save`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Schedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub schedule_date: Option<NaiveDate>,
    /// AM o PM
    pub shift_type: Option<String>,
    pub max_quota: Option<i32>,
    pub current_count: Option<i32>,
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}
