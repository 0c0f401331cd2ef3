// ============================================================================
// SESSION STATE - Token + perfil del usuario, persistidos en storage
// ============================================================================
// Cada mutación persiste de inmediato; las lecturas son solo en memoria.
// La copia en memoria es la fuente de verdad después de `rehydrate`.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{LoginResponse, Profile, Role};
use crate::utils::constants::{STORAGE_KEY_PROFILE, STORAGE_KEY_TOKEN};
use crate::utils::storage::{load_json, save_json, KeyValueStorage};

use super::reactivity::{EventHub, SubscriptionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn { role: Option<Role> },
    LoggedOut,
    /// El backend rechazó el token (HTTP 401); el shell debe reiniciarse
    Invalidated,
}

/// Handle compartido de la sesión. Los clones ven el mismo estado.
#[derive(Clone)]
pub struct SessionStore {
    token: Rc<RefCell<String>>,
    profile: Rc<RefCell<Profile>>,
    storage: Rc<dyn KeyValueStorage>,
    events: EventHub<SessionEvent>,
}

impl SessionStore {
    /// Sesión vacía sobre un storage dado, sin leerlo
    pub fn empty(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            token: Rc::new(RefCell::new(String::new())),
            profile: Rc::new(RefCell::new(Profile::default())),
            storage,
            events: EventHub::new(),
        }
    }

    /// Init: restaura token y perfil desde storage.
    /// Un perfil ausente o corrupto queda vacío.
    pub fn rehydrate(storage: Rc<dyn KeyValueStorage>) -> Self {
        let token = storage.get_item(STORAGE_KEY_TOKEN).unwrap_or_default();
        let profile: Profile = load_json(storage.as_ref(), STORAGE_KEY_PROFILE).unwrap_or_default();

        if token.is_empty() {
            log::info!("🔓 [SESSION] Sin sesión guardada");
        } else {
            log::info!(
                "💾 [SESSION] Sesión restaurada desde storage (rol: {})",
                profile.role.as_deref().unwrap_or("-")
            );
        }

        let store = Self::empty(storage);
        *store.token.borrow_mut() = token;
        *store.profile.borrow_mut() = profile;
        store
    }

    /// Reemplaza token y perfil por completo y los persiste.
    ///
    /// Si el storage rechaza la escritura la sesión sigue válida en memoria.
    pub fn login(&self, payload: &LoginResponse) {
        *self.token.borrow_mut() = payload.token.clone();
        *self.profile.borrow_mut() = payload.profile.clone();

        if let Err(e) = self.storage.set_item(STORAGE_KEY_TOKEN, &payload.token) {
            log::warn!("⚠️ [SESSION] Token no persistido, sesión solo en memoria: {}", e);
        }
        if let Err(e) = save_json(self.storage.as_ref(), STORAGE_KEY_PROFILE, &payload.profile) {
            log::warn!("⚠️ [SESSION] Perfil no persistido, sesión solo en memoria: {}", e);
        }

        let role = payload.profile.role();
        log::info!("🔐 [SESSION] Login correcto (rol: {:?})", role);
        self.events.emit(&SessionEvent::LoggedIn { role });
    }

    /// Idempotente
    pub fn logout(&self) {
        let had_session = self.is_logged_in() || !self.profile.borrow().is_empty();
        self.clear();
        if had_session {
            log::info!("🚪 [SESSION] Logout");
            self.events.emit(&SessionEvent::LoggedOut);
        }
    }

    /// Teardown tras un rechazo de autenticación
    pub fn invalidate(&self) {
        log::warn!("⛔ [SESSION] Sesión invalidada por el backend");
        self.clear();
        self.events.emit(&SessionEvent::Invalidated);
    }

    fn clear(&self) {
        self.token.borrow_mut().clear();
        *self.profile.borrow_mut() = Profile::default();
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_PROFILE] {
            if let Err(e) = self.storage.remove_item(key) {
                log::error!("❌ [SESSION] Error eliminando '{}' de storage: {}", key, e);
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        let token = self.token.borrow();
        if token.is_empty() {
            None
        } else {
            Some(token.clone())
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.token.borrow().is_empty()
    }

    pub fn profile(&self) -> Profile {
        self.profile.borrow().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.borrow().role()
    }

    /// Rol tal como vino del backend, o vacío
    pub fn role_name(&self) -> String {
        self.profile.borrow().role.clone().unwrap_or_default()
    }

    /// `userId`, con fallback a `patientId`
    pub fn user_id(&self) -> Option<String> {
        self.profile.borrow().effective_id().map(ToString::to_string)
    }

    /// Id que viaja en `X-User-Id` / `X-Doctor-Id` (solo `userId`)
    pub fn header_user_id(&self) -> Option<String> {
        self.profile.borrow().user_id.as_ref().map(ToString::to_string)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.events.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}
