use serde_json::Value;

use crate::error::ApiError;
use crate::models::{EmrRequest, EmrTemplate, LabOrder, MedicalRecord, PrescriptionDetail};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

/// Historia clínica electrónica
pub struct EmrApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> EmrApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Guarda diagnóstico, recetas y peticiones de laboratorio en una sola llamada
    pub async fn save(&self, request: &EmrRequest) -> Result<Value, ApiError> {
        log::info!(
            "💾 [EMR] Registro {}: {} recetas, {} pruebas",
            request.reg_id,
            request.prescriptions.len(),
            request.lab_orders.len()
        );
        self.client.post("emr/save").json(request).send().await
    }

    pub async fn by_record(&self, record_id: i64) -> Result<MedicalRecord, ApiError> {
        self.client.get(&format!("emr/{}", record_id)).send().await
    }

    pub async fn by_patient(&self, patient_id: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.client.get(&format!("emr/patient/{}", patient_id)).send().await
    }

    pub async fn by_registration(&self, reg_id: i64) -> Result<Option<MedicalRecord>, ApiError> {
        self.client.get(&format!("emr/registration/{}", reg_id)).send().await
    }

    pub async fn prescriptions(&self, record_id: i64) -> Result<Vec<PrescriptionDetail>, ApiError> {
        self.client.get(&format!("emr/prescriptions/{}", record_id)).send().await
    }

    pub async fn lab_orders(&self, record_id: i64) -> Result<Vec<LabOrder>, ApiError> {
        self.client.get(&format!("emr/laborders/{}", record_id)).send().await
    }

    pub async fn templates(&self, dept_id: Option<i64>) -> Result<Vec<EmrTemplate>, ApiError> {
        self.client.get("emr/templates").query_opt("deptId", dept_id).send().await
    }

    pub async fn save_template(&self, template: &EmrTemplate) -> Result<(), ApiError> {
        self.client.post("emr/template/save").json(template).execute().await
    }

    pub async fn delete_template(&self, tpl_id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("emr/template/{}", tpl_id)).execute().await
    }
}
