// ============================================================================
// API CLIENT - Cliente HTTP único con interceptores de entrada y salida
// ============================================================================
// Salida: token Bearer + X-User-Id / X-Doctor-Id desde la sesión.
// Entrada: descargas binarias tal cual; si no, envelope {code,message,data}.
// HTTP 401 invalida la sesión. Todo fallo se notifica al usuario.
// ============================================================================

use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Envelope;
use crate::state::SessionStore;
use crate::utils::constants::{
    DEFAULT_FAILURE_MESSAGE, DEFAULT_NETWORK_ERROR_MESSAGE, ENVELOPE_SUCCESS_CODE, HEADER_AUTHORIZATION,
    HEADER_DOCTOR_ID, HEADER_USER_ID, HTTP_UNAUTHORIZED, SESSION_EXPIRED_MESSAGE,
};

use super::endpoints::{
    AdminApi, AuthApi, CheckItemApi, DoctorApi, EmrApi, KnowledgeBaseApi, LabApi, PaymentApi,
    PharmacyApi, QueueApi, RegistrationApi, ScheduleApi, TriageApi,
};
use super::notifier::Notifier;
use super::transport::{FilePart, HttpMethod, HttpRequest, HttpResponse, RequestBody, ResponseKind, Transport};

pub struct ApiClient<T: Transport> {
    transport: Rc<T>,
    session: SessionStore,
    notifier: Rc<dyn Notifier>,
    base_url: String,
    timeout: Duration,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            notifier: self.notifier.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: SessionStore, notifier: Rc<dyn Notifier>, config: &AppConfig) -> Self {
        Self::with_base(transport, session, notifier, &config.api_base_url, config.request_timeout())
    }

    pub fn with_base(
        transport: T,
        session: SessionStore,
        notifier: Rc<dyn Notifier>,
        base_url: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            transport: Rc::new(transport),
            session,
            notifier,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ------------------------------------------------------------------------
    // Recursos
    // ------------------------------------------------------------------------

    pub fn auth(&self) -> AuthApi<'_, T> {
        AuthApi::new(self)
    }

    pub fn schedule(&self) -> ScheduleApi<'_, T> {
        ScheduleApi::new(self)
    }

    pub fn registration(&self) -> RegistrationApi<'_, T> {
        RegistrationApi::new(self)
    }

    pub fn doctor(&self) -> DoctorApi<'_, T> {
        DoctorApi::new(self)
    }

    pub fn emr(&self) -> EmrApi<'_, T> {
        EmrApi::new(self)
    }

    pub fn triage(&self) -> TriageApi<'_, T> {
        TriageApi::new(self)
    }

    pub fn queue(&self) -> QueueApi<'_, T> {
        QueueApi::new(self)
    }

    pub fn lab(&self) -> LabApi<'_, T> {
        LabApi::new(self)
    }

    pub fn check_items(&self) -> CheckItemApi<'_, T> {
        CheckItemApi::new(self)
    }

    pub fn pharmacy(&self) -> PharmacyApi<'_, T> {
        PharmacyApi::new(self)
    }

    pub fn payment(&self) -> PaymentApi<'_, T> {
        PaymentApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_, T> {
        AdminApi::new(self)
    }

    pub fn knowledge_base(&self) -> KnowledgeBaseApi<'_, T> {
        KnowledgeBaseApi::new(self)
    }

    // ------------------------------------------------------------------------
    // Builder de peticiones
    // ------------------------------------------------------------------------

    pub fn get(&self, path: &str) -> ApiRequest<'_, T> {
        self.request(HttpMethod::Get, path)
    }

    pub fn post(&self, path: &str) -> ApiRequest<'_, T> {
        self.request(HttpMethod::Post, path)
    }

    pub fn put(&self, path: &str) -> ApiRequest<'_, T> {
        self.request(HttpMethod::Put, path)
    }

    pub fn delete(&self, path: &str) -> ApiRequest<'_, T> {
        self.request(HttpMethod::Delete, path)
    }

    fn request(&self, method: HttpMethod, path: &str) -> ApiRequest<'_, T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        ApiRequest {
            client: self,
            request: HttpRequest::new(method, url, self.timeout),
            body_error: None,
        }
    }

    // ------------------------------------------------------------------------
    // Interceptores
    // ------------------------------------------------------------------------

    /// Interceptor de salida: cabeceras de autenticación desde la sesión
    fn authorize(&self, request: &mut HttpRequest) {
        if let Some(token) = self.session.token() {
            request.set_header(HEADER_AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(user_id) = self.session.header_user_id() {
            request.set_header(HEADER_USER_ID, user_id.clone());
            request.set_header(HEADER_DOCTOR_ID, user_id);
        }
    }

    /// Envía y filtra errores de transporte y de status HTTP
    async fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.authorize(&mut request);
        let method = request.method;
        let url = request.url.clone();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ [API] {} {}: {}", method, url, e);
                let message = if e.message.is_empty() {
                    DEFAULT_NETWORK_ERROR_MESSAGE.to_string()
                } else {
                    e.message
                };
                return Err(self.fail(ApiError::Transport { status: None, message }));
            }
        };

        if response.status == HTTP_UNAUTHORIZED {
            log::warn!("⛔ [API] {} {} → 401", method, url);
            let message = envelope_message(&response.body).unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string());
            self.session.invalidate();
            return Err(self.fail(ApiError::Unauthorized(message)));
        }

        if !response.is_success() {
            log::error!("❌ [API] {} {} → HTTP {}", method, url, response.status);
            return Err(self.fail(ApiError::Transport {
                status: Some(response.status),
                message: format!("Request failed with status code {}", response.status),
            }));
        }

        Ok(response)
    }

    /// Interceptor de entrada: `code == 200` devuelve solo `data`
    fn unwrap_envelope(&self, response: &HttpResponse) -> Result<Option<Value>, ApiError> {
        let envelope: Envelope<Value> = match serde_json::from_slice(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => return Err(self.fail(ApiError::Decode(e.to_string()))),
        };

        if envelope.code != ENVELOPE_SUCCESS_CODE {
            let message = envelope.message().unwrap_or(DEFAULT_FAILURE_MESSAGE).to_string();
            log::warn!("⚠️ [API] code {}: {}", envelope.code, message);
            return Err(self.fail(ApiError::Application { code: envelope.code, message }));
        }

        Ok(envelope.data)
    }

    fn decode<R: DeserializeOwned>(&self, data: Option<Value>) -> Result<R, ApiError> {
        serde_json::from_value(data.unwrap_or(Value::Null)).map_err(|e| self.fail(ApiError::Decode(e.to_string())))
    }

    /// Notifica y devuelve el mismo error
    fn fail(&self, error: ApiError) -> ApiError {
        self.notifier.error(&error.to_string());
        error
    }
}

fn envelope_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Envelope<Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message().map(str::to_string))
}

/// Petición en construcción contra un `ApiClient`
pub struct ApiRequest<'a, T: Transport> {
    client: &'a ApiClient<T>,
    request: HttpRequest,
    body_error: Option<String>,
}

impl<'a, T: Transport> ApiRequest<'a, T> {
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.request.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Parámetro omitido si no hay valor
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.request.query.extend(pairs);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.request.body = RequestBody::Json(value),
            Err(e) => self.body_error = Some(e.to_string()),
        }
        self
    }

    /// Añade un fichero al `multipart/form-data` (repetible)
    pub fn multipart(mut self, part: FilePart) -> Self {
        match &mut self.request.body {
            RequestBody::Multipart(parts) => parts.push(part),
            body => *body = RequestBody::Multipart(vec![part]),
        }
        self
    }

    /// Envelope → `data` deserializado como `R`
    pub async fn send<R: DeserializeOwned>(self) -> Result<R, ApiError> {
        let client = self.client;
        let data = self.send_value().await?;
        client.decode(data)
    }

    /// Envelope validado; `data` se descarta
    pub async fn execute(self) -> Result<(), ApiError> {
        self.send_value().await.map(|_| ())
    }

    /// Descarga binaria: sin envelope
    pub async fn download(mut self) -> Result<Vec<u8>, ApiError> {
        self.request.response_kind = ResponseKind::Binary;
        let response = self.dispatch().await?;
        Ok(response.body)
    }

    async fn send_value(self) -> Result<Option<Value>, ApiError> {
        let client = self.client;
        let response = self.dispatch().await?;
        client.unwrap_envelope(&response)
    }

    async fn dispatch(self) -> Result<HttpResponse, ApiError> {
        if let Some(reason) = self.body_error {
            return Err(self.client.fail(ApiError::Decode(reason)));
        }
        self.client.dispatch(self.request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::services::notifier::recording::RecordingNotifier;
    use crate::services::transport::mock::MockTransport;
    use crate::services::transport::TransportError;
    use crate::state::SessionEvent;
    use crate::utils::constants::{STORAGE_KEY_PROFILE, STORAGE_KEY_TOKEN};
    use crate::utils::storage::{KeyValueStorage, MemoryStorage};
    use serde_json::json;
    use std::cell::RefCell;

    struct Fixture {
        client: ApiClient<MockTransport>,
        transport: MockTransport,
        notifier: RecordingNotifier,
        storage: Rc<MemoryStorage>,
    }

    fn fixture() -> Fixture {
        let storage = Rc::new(MemoryStorage::new());
        let session = SessionStore::rehydrate(storage.clone());
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::default();
        let client = ApiClient::new(transport.clone(), session, Rc::new(notifier.clone()), &AppConfig::default());
        Fixture { client, transport, notifier, storage }
    }

    fn login(client: &ApiClient<MockTransport>, payload: Value) {
        let payload: LoginResponse = serde_json::from_value(payload).unwrap();
        client.session().login(&payload);
    }

    #[tokio::test]
    async fn anonymous_requests_carry_no_auth_headers() {
        let f = fixture();
        f.transport.ok(json!([]));
        let _: Vec<Value> = f.client.get("/schedule/departments").send().await.unwrap();

        let request = f.transport.last();
        assert_eq!(request.url, "/api/schedule/departments");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.headers.is_empty());
        assert_eq!(request.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn session_headers_are_attached() {
        let f = fixture();
        login(&f.client, json!({ "token": "abc", "userId": 42, "role": "DOCTOR" }));
        f.transport.ok(json!(null));
        f.client.post("doctor/callNext/42").execute().await.unwrap();

        let request = f.transport.last();
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
        assert_eq!(request.header("X-User-Id"), Some("42"));
        assert_eq!(request.header("X-Doctor-Id"), Some("42"));
    }

    #[tokio::test]
    async fn patient_without_user_id_sends_token_only() {
        let f = fixture();
        login(&f.client, json!({ "token": "p", "patientId": 7, "role": "PATIENT" }));
        f.transport.ok(json!([]));
        let _: Vec<Value> = f.client.get("registration/patient/7").send().await.unwrap();

        let request = f.transport.last();
        assert_eq!(request.header("Authorization"), Some("Bearer p"));
        assert_eq!(request.header("X-User-Id"), None);
        assert_eq!(request.header("X-Doctor-Id"), None);
    }

    #[tokio::test]
    async fn success_envelope_returns_data_only() {
        let f = fixture();
        f.transport.ok(json!({ "deptId": 3, "deptName": "Cardiology" }));
        let data: Value = f.client.get("schedule/department/3").send().await.unwrap();
        assert_eq!(data, json!({ "deptId": 3, "deptName": "Cardiology" }));
        assert!(f.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn failure_envelope_notifies_backend_message() {
        let f = fixture();
        f.transport.reply(200, json!({ "code": 500, "message": "boom" }));
        let err = f.client.get("admin/stats").send::<Value>().await.unwrap_err();

        assert_eq!(err, ApiError::Application { code: 500, message: "boom".into() });
        assert_eq!(err.to_string(), "boom");
        assert_eq!(f.notifier.messages(), vec!["boom".to_string()]);
    }

    #[tokio::test]
    async fn failure_envelope_without_message_uses_generic_text() {
        let f = fixture();
        f.transport.reply(200, json!({ "code": 400, "message": "" }));
        let err = f.client.post("registration/cancel/1").execute().await.unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(f.notifier.messages(), vec![DEFAULT_FAILURE_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_emits_event() {
        let f = fixture();
        login(&f.client, json!({ "token": "stale", "userId": 5, "role": "ADMIN" }));
        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            f.client.session().subscribe(move |e| events.borrow_mut().push(e.clone()));
        }

        f.transport.reply(401, json!({ "code": 401, "message": "Token expired" }));
        let err = f.client.get("admin/users").send::<Value>().await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!f.client.session().is_logged_in());
        assert_eq!(f.storage.get_item(STORAGE_KEY_TOKEN), None);
        assert_eq!(f.storage.get_item(STORAGE_KEY_PROFILE), None);
        assert_eq!(*events.borrow(), vec![SessionEvent::Invalidated]);
        assert_eq!(f.notifier.messages(), vec!["Token expired".to_string()]);
    }

    #[tokio::test]
    async fn unauthorized_without_body_uses_session_expired_text() {
        let f = fixture();
        f.transport.push(Ok(HttpResponse::new(401, Vec::new())));
        let err = f.client.get("lab/pending").send::<Value>().await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized(SESSION_EXPIRED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn other_http_errors_are_transport_failures() {
        let f = fixture();
        f.transport.push(Ok(HttpResponse::new(502, "Bad Gateway")));
        let err = f.client.get("queue/1").send::<Value>().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Transport { status: Some(502), message: "Request failed with status code 502".into() }
        );
        assert_eq!(f.notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn network_failures_notify_transport_message() {
        let f = fixture();
        f.transport.push(Err(TransportError::timeout(Duration::from_secs(30))));
        f.transport.push(Err(TransportError::network("")));

        let first = f.client.get("lab/pending").send::<Value>().await.unwrap_err();
        let second = f.client.get("lab/pending").send::<Value>().await.unwrap_err();

        assert_eq!(first.to_string(), "timeout of 30000ms exceeded");
        assert_eq!(second.to_string(), DEFAULT_NETWORK_ERROR_MESSAGE);
        assert_eq!(f.notifier.messages().len(), 2);
    }

    #[tokio::test]
    async fn binary_download_bypasses_envelope() {
        let f = fixture();
        f.transport.push(Ok(HttpResponse::new(200, vec![0x50, 0x4b, 0x03, 0x04])));
        let bytes = f.client.get("admin/drugs/export").download().await.unwrap();

        assert_eq!(bytes, vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(f.transport.last().response_kind, ResponseKind::Binary);
    }

    #[tokio::test]
    async fn non_envelope_body_is_a_decode_error() {
        let f = fixture();
        f.transport.push(Ok(HttpResponse::new(200, "<html>")));
        let err = f.client.get("admin/stats").send::<Value>().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(f.notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn mismatched_data_is_a_decode_error() {
        let f = fixture();
        f.transport.ok(json!("not a list"));
        let err = f.client.get("pharmacy/drugs").send::<Vec<Value>>().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn base_url_is_configurable() {
        let storage = Rc::new(MemoryStorage::new());
        let transport = MockTransport::new();
        let client = ApiClient::with_base(
            transport.clone(),
            SessionStore::rehydrate(storage),
            Rc::new(RecordingNotifier::default()),
            "https://his.example.org/api/",
            Duration::from_secs(5),
        );
        client.get("auth/demo-info").send::<Value>().await.unwrap();

        let request = transport.last();
        assert_eq!(request.url, "https://his.example.org/api/auth/demo-info");
        assert_eq!(request.timeout, Duration::from_secs(5));
    }
}
