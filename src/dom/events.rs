// ============================================================================
// EVENT HANDLING - Listeners globales
// ============================================================================
// Los listeners de window solo deben registrarse UNA VEZ al inicio de la app;
// el closure se mantiene vivo con `forget()`.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use super::element::window;

/// Registra un listener en `window` para toda la vida de la página
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    window()?.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
