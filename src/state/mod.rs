// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_state;

pub use reactivity::{EventHub, SubscriptionId};
pub use session_state::{SessionEvent, SessionStore};
