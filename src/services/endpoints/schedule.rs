use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{Department, Schedule, ScheduleSlot, StaffUser};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

pub struct ScheduleApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ScheduleApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.get("schedule/departments").send().await
    }

    pub async fn department(&self, dept_id: i64) -> Result<Department, ApiError> {
        self.client.get(&format!("schedule/department/{}", dept_id)).send().await
    }

    pub async fn doctors(&self, dept_id: i64) -> Result<Vec<StaffUser>, ApiError> {
        self.client.get("schedule/doctors").query("deptId", dept_id).send().await
    }

    /// Turnos de un departamento entre dos fechas (inclusive)
    pub async fn list(&self, dept_id: i64, start: NaiveDate, end: NaiveDate) -> Result<Vec<ScheduleSlot>, ApiError> {
        self.client
            .get("schedule/list")
            .query("deptId", dept_id)
            .query("startDate", start)
            .query("endDate", end)
            .send()
            .await
    }

    pub async fn get(&self, schedule_id: i64) -> Result<ScheduleSlot, ApiError> {
        self.client.get(&format!("schedule/{}", schedule_id)).send().await
    }

    pub async fn save(&self, schedule: &Schedule) -> Result<(), ApiError> {
        self.client.post("schedule/save").json(schedule).execute().await
    }
}
