// ============================================================================
// BROWSER - Implementaciones de las interfaces del portal sobre el navegador
// ============================================================================
// localStorage (web-sys), toasts en el DOM (gloo-timers), History API,
// descargas de archivos vía Blob + enlace temporal.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::app::Navigator;
use crate::dom;
use crate::error::StorageError;
use crate::models::ExportedFile;
use crate::router::Navigation;
use crate::services::Notifier;
use crate::utils::storage::KeyValueStorage;

// ============================================================================
// STORAGE
// ============================================================================

/// `window.localStorage` con valores crudos (el token no va entre comillas).
///
/// Si el navegador no expone localStorage (modo privado, política de
/// cookies) se queda vacío y la sesión vive solo en memoria.
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage(Option<web_sys::Storage>);

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("⚠️ [STORAGE] localStorage no disponible, sesión solo en memoria");
        }
        Self(storage)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove_item(key)
    }
}

impl KeyValueStorage for web_sys::Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        web_sys::Storage::get_item(self, key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        web_sys::Storage::set_item(self, key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        web_sys::Storage::remove_item(self, key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

// ============================================================================
// NOTIFICACIONES
// ============================================================================

/// Toast flotante que se quita solo tras `duration_ms`
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms }
    }

    fn show(&self, class: &str, message: &str) -> Result<(), JsValue> {
        let toast = dom::create_element("div", &format!("toast {}", class), Some(message))?;
        dom::set_attribute(&toast, "role", "alert")?;
        let body = dom::body()?;
        dom::append_child(&body, &toast)?;
        Timeout::new(self.duration_ms, move || dom::detach(&toast)).forget();
        Ok(())
    }
}

impl Notifier for ToastNotifier {
    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
        if let Err(e) = self.show("toast-error", message) {
            log::warn!("⚠️ [TOAST] No se pudo mostrar: {:?}", e);
        }
    }
}

// ============================================================================
// NAVEGACIÓN
// ============================================================================

/// Recarga completa vía `location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn hard_navigate(&self, path: &str) {
        let result = dom::window().and_then(|w| w.location().set_href(path));
        if let Err(e) = result {
            log::error!("❌ [NAV] No se pudo navegar a {}: {:?}", path, e);
        }
    }
}

pub fn current_path() -> String {
    dom::window()
        .and_then(|w| w.location().pathname())
        .unwrap_or_else(|_| "/".to_string())
}

/// Refleja la ruta resuelta en la barra de direcciones
pub fn push_history(path: &str) -> Result<(), JsValue> {
    if current_path() == path {
        return Ok(());
    }
    dom::window()?.history()?.push_state_with_url(&JsValue::NULL, "", Some(path))
}

/// Marca `#app` con la ruta y la vista a montar; el shell JS monta la vista
pub fn render_route(navigation: &Navigation) -> Result<(), JsValue> {
    let root = dom::get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
    match navigation.route() {
        Some(route) => {
            dom::set_attribute(&root, "data-route", route.name)?;
            let view = route.view().map(|v| format!("{:?}", v)).unwrap_or_default();
            dom::set_attribute(&root, "data-view", &view)?;
        }
        None => {
            dom::set_attribute(&root, "data-route", "NotFound")?;
            dom::set_attribute(&root, "data-view", "")?;
        }
    }
    Ok(())
}

// ============================================================================
// DESCARGAS
// ============================================================================

/// Dispara la descarga de un archivo exportado
pub fn download(file: &ExportedFile) -> Result<(), JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = dom::create_element("a", "", None)?;
    dom::set_attribute(&anchor, "href", &url)?;
    dom::set_attribute(&anchor, "download", &file.file_name)?;
    let clicked = dom::click(&anchor);
    Url::revoke_object_url(&url)?;
    clicked?;

    log::info!("💾 [DOWNLOAD] {}", file.file_name);
    Ok(())
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
