// ============================================================================
// SESSION MODELS - Token + perfil del actor autenticado
// ============================================================================

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::role::Role;

/// Perfil del usuario tal como lo devuelve el login.
///
/// Pacientes y personal usan claves de id distintas (`patientId` vs
/// `userId`); el resto de campos se conservan en `extra` para que el mirror
/// en storage no pierda nada.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ProfileId>,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<ProfileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<ProfileId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        *self == Profile::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_backend)
    }

    /// `userId`, o `patientId` si el perfil es de paciente
    pub fn effective_id(&self) -> Option<&ProfileId> {
        self.user_id.as_ref().or(self.patient_id.as_ref())
    }
}

/// Id tal como llegó del backend: se vuelve a guardar con el mismo tipo JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{}", n),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

/// Respuesta de `/auth/*/login`: token más los campos del perfil
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub profile: Profile,
}

/// Ids del backend llegan como números; aceptamos también strings.
/// `0` y `""` cuentan como ausentes.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ProfileId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ProfileId>::deserialize(deserializer)?.filter(|id| match id {
        ProfileId::Number(n) => *n != 0,
        ProfileId::Text(s) => !s.is_empty(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    fn id(p: &Profile) -> Option<String> {
        p.effective_id().map(ToString::to_string)
    }

    #[test]
    fn effective_id_prefers_user_id() {
        let p = profile(json!({ "userId": 7, "patientId": 9 }));
        assert_eq!(id(&p).as_deref(), Some("7"));
    }

    #[test]
    fn effective_id_falls_back_to_patient_id() {
        let p = profile(json!({ "patientId": "p-42", "role": "PATIENT" }));
        assert_eq!(id(&p).as_deref(), Some("p-42"));
        assert_eq!(p.role(), Some(Role::Patient));
    }

    #[test]
    fn effective_id_absent_for_anonymous_shapes() {
        assert_eq!(id(&profile(json!({}))), None);
        assert_eq!(id(&profile(json!({ "userId": null, "username": "x" }))), None);
        assert_eq!(id(&profile(json!({ "userId": "" }))), None);
        assert_eq!(id(&profile(json!({ "userId": 0 }))), None);
    }

    #[test]
    fn login_response_keeps_unknown_fields() {
        let login: LoginResponse = serde_json::from_value(json!({
            "token": "jwt",
            "userId": 3,
            "username": "dr.li",
            "realName": "Li Wei",
            "role": "CHIEF",
            "deptId": 12,
            "avatar": "a.png"
        }))
        .unwrap();
        assert_eq!(login.token, "jwt");
        assert_eq!(login.profile.role(), Some(Role::Doctor));
        assert_eq!(login.profile.dept_id, Some(ProfileId::Number(12)));
        assert_eq!(login.profile.extra.get("avatar"), Some(&json!("a.png")));
    }

    #[test]
    fn ids_keep_their_json_type_when_saved_again() {
        let original = json!({ "patientId": 31, "userId": "u-7", "deptId": 4, "role": "PATIENT" });
        let saved = serde_json::to_value(profile(original.clone())).unwrap();
        assert_eq!(saved, original);
    }
}
