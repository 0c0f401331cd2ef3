// ============================================================================
// TINYHIS PORTAL - Cliente del sistema hospitalario (RUST PURO, WASM)
// ============================================================================
// Arquitectura:
// - State: sesión (token + perfil) con Rc<RefCell>, persistida en storage
// - Router: tabla de rutas por portal + guard de navegación
// - Services: cliente API con interceptores, un método por endpoint
// - Models: DTOs compartidos con el backend
// - App: contexto que une las tres piezas
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use app::{AppContext, Navigator};
pub use config::{AppConfig, CONFIG};
pub use error::{ApiError, StorageError};
pub use router::{GuardPolicy, Navigation, Router};
pub use state::{SessionEvent, SessionStore};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;

    use crate::app::AppContext;
    use crate::browser::{self, BrowserStorage, LocationNavigator, ToastNotifier};
    use crate::config::CONFIG;
    use crate::dom;
    use crate::models::DataQuery;
    use crate::services::FetchTransport;

    // Instancia global de la aplicación
    thread_local! {
        static APP: RefCell<Option<AppContext<FetchTransport>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
        wasm_logger::init(Config::new(level));
        log::info!("🏥 TinyHIS Portal - {}", CONFIG.environment);

        let app = AppContext::init(
            CONFIG.clone(),
            Rc::new(BrowserStorage::open()),
            FetchTransport::new(),
            Rc::new(ToastNotifier::new(CONFIG.notification_duration_ms)),
            Rc::new(LocationNavigator),
        );
        APP.with(|cell| *cell.borrow_mut() = Some(app));

        navigate(&browser::current_path());

        // Atrás/adelante del navegador (se registra una sola vez)
        dom::on_window_event("popstate", |_| {
            route(&browser::current_path(), false);
        })?;

        Ok(())
    }

    /// Navegación desde el shell JS
    #[wasm_bindgen]
    pub fn navigate(path: &str) {
        route(path, true);
    }

    #[wasm_bindgen]
    pub fn logout() {
        let navigation = APP.with(|cell| cell.borrow().as_ref().map(|app| app.logout()));
        if let Some(navigation) = navigation {
            show(&navigation, true);
        }
    }

    /// Exporta una consulta de datos y la descarga como hoja de cálculo
    #[wasm_bindgen]
    pub fn export_data(kind: String) {
        let Some(api) = APP.with(|cell| cell.borrow().as_ref().map(|app| app.api().clone())) else {
            log::warn!("⚠️ [APP] App no está inicializada");
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            // El interceptor ya notificó cualquier fallo
            if let Ok(file) = api.admin().export_data(&DataQuery::new(kind)).await {
                if let Err(e) = browser::download(&file) {
                    log::error!("❌ [APP] Descarga fallida: {:?}", e);
                }
            }
        });
    }

    fn route(path: &str, push: bool) {
        let navigation = APP.with(|cell| cell.borrow().as_ref().map(|app| app.navigate(path)));
        match navigation {
            Some(navigation) => show(&navigation, push),
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        }
    }

    fn show(navigation: &crate::router::Navigation, push: bool) {
        let push_result = if push || navigation.was_redirected() {
            browser::push_history(navigation.path())
        } else {
            Ok(())
        };
        if let Err(e) = push_result.and_then(|_| browser::render_route(navigation)) {
            log::error!("❌ [APP] Error mostrando {}: {:?}", navigation.path(), e);
        }
    }
}
