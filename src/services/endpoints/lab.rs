use crate::error::ApiError;
use crate::models::{LabOrderView, LabResultRequest};
use crate::services::api_client::ApiClient;
use crate::services::transport::{FilePart, Transport};

pub struct LabApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> LabApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn pending(&self) -> Result<Vec<LabOrderView>, ApiError> {
        self.client.get("lab/pending").send().await
    }

    /// Peticiones filtradas por estado; sin estado devuelve todas
    pub async fn orders(&self, status: Option<i32>) -> Result<Vec<LabOrderView>, ApiError> {
        self.client.get("lab/orders").query_opt("status", status).send().await
    }

    pub async fn order(&self, order_id: i64) -> Result<LabOrderView, ApiError> {
        self.client.get(&format!("lab/{}", order_id)).send().await
    }

    pub async fn pay(&self, order_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("lab/pay/{}", order_id)).execute().await
    }

    pub async fn submit_result(&self, request: &LabResultRequest) -> Result<(), ApiError> {
        log::info!("🧪 [LAB] Resultado de la petición {}", request.order_id);
        self.client.post("lab/result").json(request).execute().await
    }

    pub async fn by_patient(&self, patient_id: &str) -> Result<Vec<LabOrderView>, ApiError> {
        self.client.get(&format!("lab/patient/{}", patient_id)).send().await
    }

    /// Sube una imagen del resultado; devuelve su URL
    pub async fn upload_image(&self, file: FilePart) -> Result<String, ApiError> {
        log::info!("📤 [LAB] Subiendo {} ({} bytes)", file.file_name, file.bytes.len());
        self.client.post("lab/upload").multipart(file).send().await
    }
}
