// ============================================================================
// NAVIGATION GUARD - ¿Ruta pública? Si no, ¿hay token?
// ============================================================================

use crate::models::Role;
use crate::state::SessionStore;

/// Rutas accesibles sin sesión (coincidencia exacta)
pub const PUBLIC_PATHS: [&str; 7] = [
    "/",
    "/patient/login",
    "/patient/register",
    "/doctor/login",
    "/lab/login",
    "/pharmacy/login",
    "/admin/login",
];

/// Prefijo de la pantalla de cola a pantalla completa
pub const SCREEN_PREFIX: &str = "/screen/";

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || path.starts_with(SCREEN_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPolicy {
    /// Basta con tener token; el rol no se compara con el portal
    #[default]
    TokenPresence,
    /// Además, un usuario con rol conocido solo entra en su propio portal
    RolePortal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decisión pura del guard, sin estado
pub fn evaluate(
    to: &str,
    token_present: bool,
    session_role: Option<Role>,
    policy: GuardPolicy,
) -> GuardDecision {
    if is_public(to) {
        return GuardDecision::Proceed;
    }

    let destination = Role::from_path(to);

    if !token_present {
        // Prefijo desconocido: ninguna regla aplica
        return match destination {
            Some(role) => GuardDecision::Redirect(role.login_path()),
            None => GuardDecision::Proceed,
        };
    }

    match (policy, destination, session_role) {
        (GuardPolicy::RolePortal, Some(dest), Some(own)) if dest != own => {
            GuardDecision::Redirect(own.home_path())
        }
        _ => GuardDecision::Proceed,
    }
}

/// Guard que consulta la sesión antes de cada navegación
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionStore,
    policy: GuardPolicy,
}

impl NavigationGuard {
    pub fn new(session: SessionStore, policy: GuardPolicy) -> Self {
        Self { session, policy }
    }

    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    pub fn check(&self, to: &str) -> GuardDecision {
        let decision = evaluate(to, self.session.is_logged_in(), self.session.role(), self.policy);
        if let GuardDecision::Redirect(target) = &decision {
            log::info!("🛡️ [GUARD] {} → {}", to, target);
        }
        decision
    }
}
