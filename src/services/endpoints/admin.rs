use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{
    ConsultingRoom, DataQuery, Department, ExportedFile, GenerateSchedulesRequest, ScheduleSlot,
    ScheduleTemplate, StaffUser, UserQuery,
};
use crate::services::api_client::ApiClient;
use crate::services::transport::{FilePart, Transport};

/// Administración: usuarios, departamentos, consultas, horarios, fármacos, estadísticas
pub struct AdminApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AdminApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    // ========================================================================
    // USUARIOS
    // ========================================================================

    /// Página de usuarios (`{records, total, ...}` tal cual lo manda el backend)
    pub async fn users(&self, query: &UserQuery) -> Result<Value, ApiError> {
        self.client.get("admin/users").query_pairs(query.to_query()).send().await
    }

    pub async fn save_user(&self, user: &StaffUser) -> Result<(), ApiError> {
        self.client.post("admin/user/save").json(user).execute().await
    }

    pub async fn set_user_status(&self, user_id: i64, status: i32) -> Result<(), ApiError> {
        self.client
            .post(&format!("admin/user/{}/status", user_id))
            .query("status", status)
            .execute()
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/user/{}", user_id)).execute().await
    }

    // ========================================================================
    // DEPARTAMENTOS Y CONSULTAS
    // ========================================================================

    pub async fn save_department(&self, department: &Department) -> Result<(), ApiError> {
        self.client.post("admin/department/save").json(department).execute().await
    }

    pub async fn set_department_status(&self, dept_id: i64, status: i32) -> Result<(), ApiError> {
        self.client
            .post(&format!("admin/department/{}/status", dept_id))
            .query("status", status)
            .execute()
            .await
    }

    pub async fn delete_department(&self, dept_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/department/{}", dept_id)).execute().await
    }

    pub async fn rooms(&self) -> Result<Vec<ConsultingRoom>, ApiError> {
        self.client.get("admin/rooms").send().await
    }

    pub async fn room(&self, room_id: i64) -> Result<ConsultingRoom, ApiError> {
        self.client.get(&format!("admin/rooms/{}", room_id)).send().await
    }

    /// Alta o edición según lleve `roomId`
    pub async fn save_room(&self, room: &ConsultingRoom) -> Result<(), ApiError> {
        self.client.post("admin/rooms").json(room).execute().await
    }

    pub async fn delete_room(&self, room_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/rooms/{}", room_id)).execute().await
    }

    // ========================================================================
    // HORARIOS
    // ========================================================================

    pub async fn schedule_templates(&self, dept_id: Option<i64>) -> Result<Vec<ScheduleTemplate>, ApiError> {
        self.client.get("admin/schedule-templates").query_opt("deptId", dept_id).send().await
    }

    pub async fn save_schedule_template(&self, template: &ScheduleTemplate) -> Result<(), ApiError> {
        self.client.post("admin/schedule-template/save").json(template).execute().await
    }

    pub async fn delete_schedule_template(&self, template_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/schedule-template/{}", template_id)).execute().await
    }

    /// Genera la semana siguiente a partir de las plantillas
    pub async fn generate_week_schedules(&self) -> Result<Value, ApiError> {
        log::info!("📅 [ADMIN] Generando horarios de la semana");
        self.client.post("admin/schedules/generate").send().await
    }

    pub async fn generate_schedules(&self, range: &GenerateSchedulesRequest) -> Result<Value, ApiError> {
        log::info!("📅 [ADMIN] Generando horarios {} → {}", range.start_date, range.end_date);
        self.client.post("admin/schedule/generate-week").json(range).send().await
    }

    pub async fn schedules(
        &self,
        dept_id: Option<i64>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<ScheduleSlot>, ApiError> {
        self.client
            .get("admin/schedules")
            .query_opt("deptId", dept_id)
            .query_opt("startDate", start)
            .query_opt("endDate", end)
            .send()
            .await
    }

    pub async fn delete_schedule(&self, schedule_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/schedule/{}", schedule_id)).execute().await
    }

    // ========================================================================
    // FÁRMACOS
    // ========================================================================

    /// Importación masiva desde hoja de cálculo (campo `file`)
    pub async fn import_drugs(&self, file: FilePart) -> Result<Value, ApiError> {
        log::info!("📥 [ADMIN] Importando fármacos desde {}", file.file_name);
        self.client.post("admin/drugs/import").multipart(file).send().await
    }

    pub async fn export_drugs(&self) -> Result<Vec<u8>, ApiError> {
        self.client.get("admin/drugs/export").download().await
    }

    // ========================================================================
    // ESTADÍSTICAS Y CONSULTAS
    // ========================================================================

    pub async fn stats(&self) -> Result<Value, ApiError> {
        self.client.get("admin/stats").send().await
    }

    pub async fn dashboard_stats(&self) -> Result<Value, ApiError> {
        self.client.get("admin/dashboard-stats").send().await
    }

    pub async fn query(&self, query: &DataQuery) -> Result<Value, ApiError> {
        self.client.get("admin/query").query_pairs(query.to_query()).send().await
    }

    /// Exporta con la fecha UTC de hoy en el nombre del archivo
    pub async fn export_data(&self, query: &DataQuery) -> Result<ExportedFile, ApiError> {
        self.export_data_on(query, Utc::now().date_naive()).await
    }

    pub async fn export_data_on(&self, query: &DataQuery, date: NaiveDate) -> Result<ExportedFile, ApiError> {
        let bytes = self.client.get("admin/export").query_pairs(query.to_query()).download().await?;
        let file = ExportedFile::spreadsheet(&query.kind, date, bytes);
        log::info!("📊 [ADMIN] Exportado {} ({} bytes)", file.file_name, file.bytes.len());
        Ok(file)
    }
}
