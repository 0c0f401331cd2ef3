use crate::error::ApiError;
use crate::models::{PaymentRequest, PaymentResponse};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

pub struct PaymentApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> PaymentApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn registration(&self, reg_id: i64) -> Result<PaymentResponse, ApiError> {
        self.client.post(&format!("payment/registration/{}", reg_id)).send().await
    }

    /// Todas las recetas de un registro médico
    pub async fn prescriptions(&self, record_id: i64) -> Result<PaymentResponse, ApiError> {
        self.client.post(&format!("payment/prescription/record/{}", record_id)).send().await
    }

    pub async fn lab_order(&self, order_id: i64) -> Result<PaymentResponse, ApiError> {
        self.client.post(&format!("payment/lab/{}", order_id)).send().await
    }

    pub async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResponse, ApiError> {
        log::info!("💳 [PAYMENT] {} x{}", request.payment_type, request.item_ids.len());
        self.client.post("payment/pay").json(request).send().await
    }
}
