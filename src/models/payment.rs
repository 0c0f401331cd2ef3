use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: Option<String>,
    pub total_amount: Option<f64>,
    pub payment_type: Option<String>,
}

/// Pago genérico (`/payment/pay`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// REGISTRATION, PRESCRIPTION o LAB
    pub payment_type: String,
    pub item_ids: Vec<i64>,
}
