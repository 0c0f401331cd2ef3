use serde::{Deserialize, Serialize};

use crate::router::GuardPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub request_timeout_seconds: u32,
    pub notification_duration_ms: u32,
    pub enforce_portal_roles: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            request_timeout_seconds: 30,
            notification_duration_ms: 3000,
            enforce_portal_roles: false,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            request_timeout_seconds: option_env!("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            notification_duration_ms: option_env!("NOTIFICATION_DURATION_MS")
                .unwrap_or("3000").parse().unwrap_or(3000),
            enforce_portal_roles: option_env!("ENFORCE_PORTAL_ROLES")
                .unwrap_or("false").parse().unwrap_or(false),
        }
    }

    /// Presupuesto de tiempo por request (fijo para todo el cliente)
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.request_timeout_seconds))
    }

    pub fn guard_policy(&self) -> GuardPolicy {
        if self.enforce_portal_roles {
            GuardPolicy::RolePortal
        } else {
            GuardPolicy::TokenPresence
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.request_timeout().as_secs(), 30);
        assert_eq!(config.guard_policy(), GuardPolicy::TokenPresence);
    }

    #[test]
    fn portal_enforcement_switches_policy() {
        let config = AppConfig {
            enforce_portal_roles: true,
            ..AppConfig::default()
        };
        assert_eq!(config.guard_policy(), GuardPolicy::RolePortal);
    }
}
