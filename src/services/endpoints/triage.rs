use crate::error::ApiError;
use crate::models::{KnowledgeSearchRequest, MedicalDocument, TriageRequest, TriageResult};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

pub struct TriageApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> TriageApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Departamento recomendado a partir de los síntomas
    pub async fn recommend(&self, request: &TriageRequest) -> Result<TriageResult, ApiError> {
        self.client.post("triage/recommend").json(request).send().await
    }

    pub async fn search_knowledge(&self, request: &KnowledgeSearchRequest) -> Result<Vec<MedicalDocument>, ApiError> {
        self.client.post("triage/search-knowledge").json(request).send().await
    }
}
