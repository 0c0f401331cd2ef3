use serde_json::Value;

use crate::error::ApiError;
use crate::models::VisitDetail;
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

/// Cola del médico y ciclo de vida de cada visita
pub struct DoctorApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> DoctorApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn queue(&self, doctor_id: &str) -> Result<Vec<VisitDetail>, ApiError> {
        self.client.get(&format!("doctor/queue/{}", doctor_id)).send().await
    }

    pub async fn today_patients(&self, doctor_id: &str) -> Result<Vec<VisitDetail>, ApiError> {
        self.client.get(&format!("doctor/patients/{}", doctor_id)).send().await
    }

    pub async fn visit(&self, reg_id: i64) -> Result<VisitDetail, ApiError> {
        self.client.get(&format!("doctor/visit/{}", reg_id)).send().await
    }

    pub async fn history(&self, patient_id: i64, doctor_id: &str) -> Result<Vec<VisitDetail>, ApiError> {
        self.client
            .get(&format!("doctor/history/{}", patient_id))
            .query("doctorId", doctor_id)
            .send()
            .await
    }

    pub async fn pause(&self, reg_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("doctor/pause/{}", reg_id)).execute().await
    }

    pub async fn resume(&self, reg_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("doctor/resume/{}", reg_id)).execute().await
    }

    pub async fn complete(&self, reg_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("doctor/complete/{}", reg_id)).execute().await
    }

    /// Llama al siguiente de la cola; `null` si la cola está vacía
    pub async fn call_next(&self, doctor_id: &str) -> Result<Option<Value>, ApiError> {
        log::info!("📢 [DOCTOR] Llamando siguiente paciente (médico {})", doctor_id);
        self.client.post(&format!("doctor/callNext/{}", doctor_id)).send().await
    }

    /// Llama a un paciente concreto saltando el orden de la cola
    pub async fn call(&self, doctor_id: &str, reg_id: i64) -> Result<Option<Value>, ApiError> {
        self.client.post(&format!("doctor/call/{}/{}", doctor_id, reg_id)).send().await
    }
}
