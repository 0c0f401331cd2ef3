use serde::{Deserialize, Serialize};

/// Portal al que pertenece un usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Lab,
    Pharmacy,
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Patient, Role::Doctor, Role::Lab, Role::Pharmacy, Role::Admin];

    /// Primer segmento de las rutas del portal
    pub fn segment(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Lab => "lab",
            Role::Pharmacy => "pharmacy",
            Role::Admin => "admin",
        }
    }

    pub fn login_path(self) -> &'static str {
        match self {
            Role::Patient => "/patient/login",
            Role::Doctor => "/doctor/login",
            Role::Lab => "/lab/login",
            Role::Pharmacy => "/pharmacy/login",
            Role::Admin => "/admin/login",
        }
    }

    pub fn home_path(self) -> &'static str {
        match self {
            Role::Patient => "/patient/home",
            Role::Doctor => "/doctor/workstation",
            Role::Lab => "/lab/workstation",
            Role::Pharmacy => "/pharmacy/dispense",
            Role::Admin => "/admin/dashboard",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.segment() == segment)
    }

    /// Rol dueño de la ruta según su primer segmento (`/doctor/...` → Doctor)
    pub fn from_path(path: &str) -> Option<Role> {
        let segment = path.trim_start_matches('/').split('/').next()?;
        Role::from_segment(segment)
    }

    /// Rol tal como lo envía el backend (`PATIENT`, `DOCTOR`, `CHIEF`, ...)
    pub fn from_backend(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "patient" => Some(Role::Patient),
            "doctor" | "chief" => Some(Role::Doctor),
            "lab" => Some(Role::Lab),
            "pharmacy" => Some(Role::Pharmacy),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}
