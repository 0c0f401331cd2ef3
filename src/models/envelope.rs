use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::constants::ENVELOPE_SUCCESS_CODE;

/// Envoltorio `{ code, message, data }` de todas las respuestas del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Solo `code == 200` es éxito, sin importar el status HTTP
    pub fn is_success(&self) -> bool {
        self.code == ENVELOPE_SUCCESS_CODE
    }

    /// Mensaje del backend si viene y no está vacío
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_message_and_data_are_tolerated() {
        let env: Envelope = serde_json::from_value(json!({ "code": 200 })).unwrap();
        assert!(env.is_success());
        assert!(env.data.is_none());
        assert!(env.message().is_none());
    }

    #[test]
    fn only_200_is_success() {
        let code = |code: i64| -> Envelope { serde_json::from_value(json!({ "code": code, "data": 1 })).unwrap() };
        assert!(!code(0).is_success());
        assert!(!code(201).is_success());
        assert!(code(200).is_success());
    }

    #[test]
    fn empty_message_counts_as_absent() {
        let env: Envelope = serde_json::from_value(json!({ "code": 500, "message": "" })).unwrap();
        assert_eq!(env.message(), None);
    }
}
