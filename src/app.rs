// ============================================================================
// APP CONTEXT - Sesión + router + cliente API de una instancia del portal
// ============================================================================
// Init: rehidrata la sesión desde storage y se suscribe a la invalidación.
// Un 401 del backend → router reiniciado + navegación dura a "/".
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::LoginResponse;
use crate::router::{Navigation, Router};
use crate::services::{ApiClient, Notifier, Transport};
use crate::state::{SessionEvent, SessionStore, SubscriptionId};
use crate::utils::storage::KeyValueStorage;

/// Navegación que recarga el shell entero (no pasa por el router)
pub trait Navigator {
    fn hard_navigate(&self, path: &str);
}

pub struct AppContext<T: Transport> {
    config: AppConfig,
    session: SessionStore,
    router: Router,
    api: ApiClient<T>,
    invalidation: Option<SubscriptionId>,
}

impl<T: Transport> AppContext<T> {
    pub fn init(
        config: AppConfig,
        storage: Rc<dyn KeyValueStorage>,
        transport: T,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let session = SessionStore::rehydrate(storage);
        let router = Router::new(session.clone(), config.guard_policy());
        let api = ApiClient::new(transport, session.clone(), notifier, &config);

        let invalidation = {
            let router = router.clone();
            session.subscribe(move |event| {
                if *event == SessionEvent::Invalidated {
                    log::warn!("🔄 [APP] Sesión invalidada, reiniciando en /");
                    router.reset();
                    navigator.hard_navigate("/");
                }
            })
        };

        log::info!(
            "🚀 [APP] Portal listo (api: {}, guard: {:?})",
            config.api_base_url,
            config.guard_policy()
        );

        Self {
            config,
            session,
            router,
            api,
            invalidation: Some(invalidation),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        self.router.navigate(path)
    }

    /// Guarda la sesión y lleva al inicio del portal del rol
    pub fn complete_login(&self, payload: &LoginResponse) -> Navigation {
        self.session.login(payload);
        let home = payload.profile.role().map(|role| role.home_path()).unwrap_or("/");
        self.router.navigate(home)
    }

    /// Cierra la sesión y vuelve al login del portal actual
    pub fn logout(&self) -> Navigation {
        let login = self.session.role().map(|role| role.login_path()).unwrap_or("/");
        self.session.logout();
        self.router.navigate(login)
    }

    /// Suelta la suscripción a la sesión. Idempotente.
    pub fn teardown(&mut self) {
        if let Some(id) = self.invalidation.take() {
            self.session.unsubscribe(id);
            self.router.reset();
            log::info!("👋 [APP] Contexto desmontado");
        }
    }
}
