// ============================================================================
// ROUTER - Tabla de rutas + guard de navegación
// ============================================================================
// Orden por navegación: normalizar → redirects estáticos → guard (una vez)
// → resolver. El destino de un redirect del guard no se vuelve a evaluar.
// ============================================================================

pub mod guard;
pub mod routes;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::SessionStore;

pub use guard::{evaluate, is_public, GuardDecision, GuardPolicy, NavigationGuard};
pub use routes::{normalize_path, route_table, Resolution, RouteDescriptor, RouteMatch, View, ROUTES};

/// Límite de redirects estáticos encadenados (`/` → `/patient/login`, ...)
const MAX_STATIC_REDIRECTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Se llegó al destino pedido (tras redirects estáticos)
    Arrived(RouteMatch),
    /// El guard desvió la navegación
    Redirected { requested: String, route: RouteMatch },
    NotFound(String),
}

impl Navigation {
    pub fn path(&self) -> &str {
        match self {
            Navigation::Arrived(route) | Navigation::Redirected { route, .. } => &route.path,
            Navigation::NotFound(path) => path,
        }
    }

    pub fn route(&self) -> Option<&RouteMatch> {
        match self {
            Navigation::Arrived(route) | Navigation::Redirected { route, .. } => Some(route),
            Navigation::NotFound(_) => None,
        }
    }

    pub fn was_redirected(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

#[derive(Clone)]
pub struct Router {
    guard: NavigationGuard,
    current: Rc<RefCell<Option<RouteMatch>>>,
}

impl Router {
    pub fn new(session: SessionStore, policy: GuardPolicy) -> Self {
        Self {
            guard: NavigationGuard::new(session, policy),
            current: Rc::new(RefCell::new(None)),
        }
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let requested = follow_static_redirects(&normalize_path(path));

        let navigation = match self.guard.check(&requested) {
            GuardDecision::Proceed => match routes::resolve(&ROUTES, &requested) {
                Resolution::Matched(route) => Navigation::Arrived(route),
                _ => Navigation::NotFound(requested),
            },
            GuardDecision::Redirect(target) => {
                let target = follow_static_redirects(target);
                match routes::resolve(&ROUTES, &target) {
                    Resolution::Matched(route) => Navigation::Redirected { requested, route },
                    _ => Navigation::NotFound(target),
                }
            }
        };

        *self.current.borrow_mut() = navigation.route().cloned();
        navigation
    }

    /// Resuelve sin pasar por el guard
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        match routes::resolve(&ROUTES, &follow_static_redirects(&normalize_path(path))) {
            Resolution::Matched(route) => Some(route),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }

    pub fn reset(&self) {
        *self.current.borrow_mut() = None;
    }

    pub fn policy(&self) -> GuardPolicy {
        self.guard.policy()
    }
}

fn follow_static_redirects(path: &str) -> String {
    let mut path = normalize_path(path);
    for _ in 0..MAX_STATIC_REDIRECTS {
        match routes::resolve(&ROUTES, &path) {
            Resolution::Redirect(to) => path = to.to_string(),
            _ => break,
        }
    }
    path
}
