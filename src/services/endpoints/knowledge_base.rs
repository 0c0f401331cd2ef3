use serde_json::Value;

use crate::error::ApiError;
use crate::models::{KnowledgeFilter, MedicalDocument};
use crate::services::api_client::ApiClient;
use crate::services::transport::{FilePart, Transport};

/// Base de conocimiento médica (administración)
pub struct KnowledgeBaseApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> KnowledgeBaseApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<MedicalDocument>, ApiError> {
        self.search(&KnowledgeFilter::default()).await
    }

    pub async fn search(&self, filter: &KnowledgeFilter) -> Result<Vec<MedicalDocument>, ApiError> {
        self.client
            .get("admin/kb/list")
            .query_opt("keyword", filter.keyword.as_deref())
            .query_opt("department", filter.department.as_deref())
            .send()
            .await
    }

    pub async fn get(&self, id: &str) -> Result<MedicalDocument, ApiError> {
        self.client.get(&format!("admin/kb/{}", id)).send().await
    }

    pub async fn add(&self, document: &MedicalDocument) -> Result<(), ApiError> {
        self.client.post("admin/kb").json(document).execute().await
    }

    pub async fn update(&self, id: &str, document: &MedicalDocument) -> Result<(), ApiError> {
        self.client.put(&format!("admin/kb/{}", id)).json(document).execute().await
    }

    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("admin/kb/{}", id)).execute().await
    }

    /// Importación en lote (`.json` como documento, resto como texto).
    /// Devuelve cuántos documentos se importaron.
    pub async fn import(&self, files: Vec<FilePart>) -> Result<u32, ApiError> {
        log::info!("📚 [KB] Importando {} ficheros", files.len());
        files
            .into_iter()
            .map(|f| FilePart { field: "files".to_string(), ..f })
            .fold(self.client.post("admin/kb/import"), |request, part| request.multipart(part))
            .send()
            .await
    }

    pub async fn stats(&self) -> Result<Value, ApiError> {
        self.client.get("admin/kb/stats").send().await
    }
}
