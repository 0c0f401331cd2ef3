// Claves de localStorage (compatibles con sesiones existentes del navegador)
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_PROFILE: &str = "userInfo";

// Cabeceras que el backend lee en cada request
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_USER_ID: &str = "X-User-Id";
pub const HEADER_DOCTOR_ID: &str = "X-Doctor-Id";

pub const ENVELOPE_SUCCESS_CODE: i64 = 200;
pub const HTTP_UNAUTHORIZED: u16 = 401;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";
pub const DEFAULT_NETWORK_ERROR_MESSAGE: &str = "Network error";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please log in again";

pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
