use serde_json::Value;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, PatientInfo, PatientRegisterRequest, StaffUser};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

/// `/auth`: registro y login de pacientes y personal
pub struct AuthApi<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn patient_register(&self, request: &PatientRegisterRequest) -> Result<PatientInfo, ApiError> {
        log::info!("📝 [AUTH] Registro de paciente: {}", request.phone);
        self.client.post("auth/patient/register").json(request).send().await
    }

    /// El llamador guarda el resultado con `SessionStore::login`
    pub async fn patient_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [AUTH] Login paciente: {}", request.username);
        self.client.post("auth/patient/login").json(request).send().await
    }

    pub async fn staff_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [AUTH] Login personal: {}", request.username);
        self.client.post("auth/staff/login").json(request).send().await
    }

    /// Mismo endpoint que el login del personal
    pub async fn admin_login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.staff_login(request).await
    }

    pub async fn patient(&self, patient_id: i64) -> Result<PatientInfo, ApiError> {
        self.client.get(&format!("auth/patient/{}", patient_id)).send().await
    }

    pub async fn staff(&self, user_id: i64) -> Result<StaffUser, ApiError> {
        self.client.get(&format!("auth/staff/{}", user_id)).send().await
    }

    /// Cuentas de demostración que muestra la pantalla de login
    pub async fn demo_info(&self) -> Result<Value, ApiError> {
        self.client.get("auth/demo-info").send().await
    }
}
