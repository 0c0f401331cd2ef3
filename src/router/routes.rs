// ============================================================================
// ROUTE TABLE - Árbol estático de rutas por portal
// ============================================================================

use std::collections::BTreeMap;

/// Vista que el shell monta para una ruta. Las vistas viven fuera del crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    PatientLayout,
    PatientHome,
    PatientLogin,
    PatientRegister,
    Triage,
    Appointment,
    Payment,
    CheckIn,
    Reports,
    Records,
    RegistrationRecords,
    /// Login compartido por todos los portales del personal
    StaffLogin,
    DoctorLayout,
    DoctorWorkstation,
    Templates,
    LabLayout,
    LabWorkstation,
    PharmacyLayout,
    Dispense,
    Inventory,
    AdminLayout,
    Dashboard,
    Users,
    Departments,
    Rooms,
    Schedules,
    KnowledgeBase,
    DataQuery,
    QueueScreen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub redirect: Option<&'static str>,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn page(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name: Some(name),
            view: Some(view),
            redirect: None,
            children: Vec::new(),
        }
    }

    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            view: None,
            redirect: Some(to),
            children: Vec::new(),
        }
    }

    pub fn group(path: &'static str, layout: View, children: Vec<RouteDescriptor>) -> Self {
        Self {
            path,
            name: None,
            view: Some(layout),
            redirect: None,
            children,
        }
    }
}

/// Tabla completa de la aplicación
pub fn route_table() -> Vec<RouteDescriptor> {
    use RouteDescriptor as R;
    vec![
        R::redirect("/", "/patient/login"),
        // Pacientes (móvil)
        R::group("/patient", View::PatientLayout, vec![
            R::redirect("", "/patient/home"),
            R::page("home", "PatientHome", View::PatientHome),
            R::page("login", "PatientLogin", View::PatientLogin),
            R::page("register", "PatientRegister", View::PatientRegister),
            R::page("triage", "Triage", View::Triage),
            R::page("appointment", "Appointment", View::Appointment),
            R::page("payment", "Payment", View::Payment),
            R::page("checkin", "CheckIn", View::CheckIn),
            R::page("reports", "Reports", View::Reports),
            R::page("records", "Records", View::Records),
            R::page("registration-records", "RegistrationRecords", View::RegistrationRecords),
        ]),
        R::group("/doctor", View::DoctorLayout, vec![
            R::redirect("", "/doctor/workstation"),
            R::page("login", "DoctorLogin", View::StaffLogin),
            R::page("workstation", "Workstation", View::DoctorWorkstation),
            R::page("templates", "Templates", View::Templates),
        ]),
        R::group("/lab", View::LabLayout, vec![
            R::redirect("", "/lab/workstation"),
            R::page("login", "LabLogin", View::StaffLogin),
            R::page("workstation", "LabWorkstation", View::LabWorkstation),
        ]),
        R::group("/pharmacy", View::PharmacyLayout, vec![
            R::redirect("", "/pharmacy/dispense"),
            R::page("login", "PharmacyLogin", View::StaffLogin),
            R::page("dispense", "Dispense", View::Dispense),
            R::page("inventory", "Inventory", View::Inventory),
        ]),
        R::group("/admin", View::AdminLayout, vec![
            R::redirect("", "/admin/dashboard"),
            R::page("login", "AdminLogin", View::StaffLogin),
            R::page("dashboard", "Dashboard", View::Dashboard),
            R::page("users", "Users", View::Users),
            R::page("departments", "Departments", View::Departments),
            R::page("rooms", "Rooms", View::Rooms),
            R::page("schedules", "Schedules", View::Schedules),
            R::page("kb", "KnowledgeBase", View::KnowledgeBase),
            R::page("query", "DataQuery", View::DataQuery),
        ]),
        // Pantalla de cola (pantalla completa, sin login)
        R::page("/screen/:deptId", "QueueScreen", View::QueueScreen),
    ]
}

lazy_static::lazy_static! {
    pub static ref ROUTES: Vec<FlatRoute> = flatten(&route_table());
}

/// Ruta resuelta lista para montar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub path: String,
    /// Layout primero, página al final
    pub views: Vec<View>,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn view(&self) -> Option<View> {
        self.views.last().copied()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    Redirect(&'static str),
    NotFound,
}

/// Hoja del árbol con el patrón completo ya unido
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRoute {
    pub pattern: String,
    pub name: Option<&'static str>,
    pub views: Vec<View>,
    pub redirect: Option<&'static str>,
}

pub fn flatten(routes: &[RouteDescriptor]) -> Vec<FlatRoute> {
    let mut out = Vec::new();
    for route in routes {
        flatten_into(route, "", &[], &mut out);
    }
    out
}

fn flatten_into(route: &RouteDescriptor, base: &str, views: &[View], out: &mut Vec<FlatRoute>) {
    let pattern = join_path(base, route.path);
    let mut chain = views.to_vec();
    if let Some(view) = route.view {
        chain.push(view);
    }

    if route.children.is_empty() {
        out.push(FlatRoute {
            pattern,
            name: route.name,
            views: chain,
            redirect: route.redirect,
        });
    } else {
        for child in &route.children {
            flatten_into(child, &pattern, &chain, out);
        }
    }
}

fn join_path(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    match (base.trim_end_matches('/'), path) {
        (b, "") if b.is_empty() => "/".to_string(),
        (b, "") => b.to_string(),
        (b, p) => format!("{}/{}", b, p),
    }
}

/// Quita query, fragmento y barra final; garantiza la barra inicial
pub fn normalize_path(raw: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

pub fn resolve(routes: &[FlatRoute], path: &str) -> Resolution {
    let path = normalize_path(path);
    let segments: Vec<&str> = split_segments(&path);

    for route in routes {
        let pattern: Vec<&str> = split_segments(&route.pattern);
        if pattern.len() != segments.len() {
            continue;
        }

        let mut params = BTreeMap::new();
        let matched = pattern.iter().zip(&segments).all(|(p, s)| match p.strip_prefix(':') {
            Some(key) => {
                params.insert(key.to_string(), (*s).to_string());
                true
            }
            None => p == s,
        });
        if !matched {
            continue;
        }

        if let Some(to) = route.redirect {
            return Resolution::Redirect(to);
        }
        return match route.name {
            Some(name) => Resolution::Matched(RouteMatch {
                name,
                path,
                views: route.views.clone(),
                params,
            }),
            None => Resolution::NotFound,
        };
    }
    Resolution::NotFound
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
