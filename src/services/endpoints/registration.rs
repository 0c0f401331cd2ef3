use crate::error::ApiError;
use crate::models::{CheckInRequest, Registration, RegistrationDetail, RegistrationRequest};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

pub struct RegistrationApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> RegistrationApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &RegistrationRequest) -> Result<Registration, ApiError> {
        log::info!("🎫 [REG] Paciente {} → turno {}", request.patient_id, request.schedule_id);
        self.client.post("registration/create").json(request).send().await
    }

    pub async fn get(&self, reg_id: i64) -> Result<RegistrationDetail, ApiError> {
        self.client.get(&format!("registration/{}", reg_id)).send().await
    }

    pub async fn by_patient(&self, patient_id: &str) -> Result<Vec<RegistrationDetail>, ApiError> {
        self.client.get(&format!("registration/patient/{}", patient_id)).send().await
    }

    pub async fn pay(&self, reg_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("registration/pay/{}", reg_id)).execute().await
    }

    pub async fn check_in(&self, request: &CheckInRequest) -> Result<(), ApiError> {
        self.client.post("registration/checkin").json(request).execute().await
    }

    pub async fn cancel(&self, reg_id: i64) -> Result<(), ApiError> {
        self.client.post(&format!("registration/cancel/{}", reg_id)).execute().await
    }
}
