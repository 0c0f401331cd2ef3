use crate::error::ApiError;
use crate::models::QueueInfo;
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

/// Pantalla de cola por departamento
pub struct QueueApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> QueueApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn info(&self, dept_id: &str) -> Result<QueueInfo, ApiError> {
        self.client.get(&format!("queue/{}", dept_id)).send().await
    }

    pub async fn broadcast(&self, dept_id: &str) -> Result<(), ApiError> {
        self.client.post(&format!("queue/broadcast/{}", dept_id)).execute().await
    }
}
