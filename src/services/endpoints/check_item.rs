use crate::error::ApiError;
use crate::models::CheckItem;
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

/// Catálogo de pruebas de laboratorio
pub struct CheckItemApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CheckItemApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<CheckItem>, ApiError> {
        self.client.get("check-item/list").send().await
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<CheckItem>, ApiError> {
        self.client.get("check-item/search").query("keyword", keyword).send().await
    }
}
