use crate::error::ApiError;
use crate::models::{Drug, PrescriptionDetail};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

pub struct PharmacyApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> PharmacyApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn drugs(&self) -> Result<Vec<Drug>, ApiError> {
        self.client.get("pharmacy/drugs").send().await
    }

    pub async fn search_drugs(&self, keyword: &str) -> Result<Vec<Drug>, ApiError> {
        self.client.get("pharmacy/drugs/search").query("keyword", keyword).send().await
    }

    pub async fn drug(&self, drug_id: i64) -> Result<Drug, ApiError> {
        self.client.get(&format!("pharmacy/drug/{}", drug_id)).send().await
    }

    /// Recetas pagadas pendientes de dispensar
    pub async fn paid_prescriptions(&self) -> Result<Vec<PrescriptionDetail>, ApiError> {
        self.client.get("pharmacy/prescriptions/paid").send().await
    }

    pub async fn pay_prescription(&self, pres_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("pharmacy/prescription/pay/{}", pres_id)).execute().await
    }

    pub async fn pay_by_record(&self, record_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("pharmacy/prescriptions/pay/record/{}", record_id)).execute().await
    }

    pub async fn dispense(&self, pres_id: i64) -> Result<(), ApiError> {
        log::info!("💊 [PHARMACY] Dispensando receta {}", pres_id);
        self.client.post(&format!("pharmacy/dispense/{}", pres_id)).execute().await
    }

    /// Ajuste de stock por query string, sin cuerpo
    pub async fn update_stock(&self, drug_id: i64, quantity: i32) -> Result<(), ApiError> {
        self.client
            .post("pharmacy/drug/stock")
            .query("drugId", drug_id)
            .query("quantity", quantity)
            .execute()
            .await
    }

    pub async fn add_drug(&self, drug: &Drug) -> Result<(), ApiError> {
        self.client.post("pharmacy/drug/add").json(drug).execute().await
    }
}
