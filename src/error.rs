// ============================================================================
// ERRORES - Taxonomía de fallos del cliente
// ============================================================================

use thiserror::Error;

/// Fallo de una llamada al backend.
///
/// `Display` devuelve exactamente el mensaje que se muestra al usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// El envelope llegó con `code != 200`
    #[error("{message}")]
    Application { code: i64, message: String },

    /// HTTP 401: la sesión ya no es válida
    #[error("{0}")]
    Unauthorized(String),

    /// Red caída, timeout o status HTTP no exitoso
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// El cuerpo no es un envelope válido o `data` no tiene la forma esperada
    #[error("Parse error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Application { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Fallo del almacenamiento clave-valor persistente
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("storage not available")]
    Unavailable,

    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("failed to remove '{key}': {reason}")]
    Remove { key: String, reason: String },

    #[error("failed to serialize '{key}': {reason}")]
    Serialize { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_error_displays_backend_message() {
        let err = ApiError::Application { code: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.code(), Some(500));
        assert!(!err.is_unauthorized());
    }
}
