use serde::{Deserialize, Serialize};

/// Credenciales para `/auth/patient/login` y `/auth/staff/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

impl LoginRequest {
    pub fn patient(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: phone.into(),
            password: password.into(),
            user_type: Some("patient".to_string()),
        }
    }

    pub fn staff(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            user_type: Some("staff".to_string()),
        }
    }
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegisterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    pub phone: String,
    pub password: String,
    /// 0 = mujer, 1 = hombre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientInfo {
    pub patient_id: Option<i64>,
    pub name: Option<String>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<i32>,
    pub age: Option<i32>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Usuario del personal (`sys_user`): médicos, laboratorio, farmacia, admin
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub username: Option<String>,
    /// Solo al crear o cambiar contraseña desde administración
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub real_name: Option<String>,
    /// DOCTOR, CHIEF, ADMIN, PHARMACY, LAB
    pub role: Option<String>,
    pub dept_id: Option<i64>,
    pub phone: Option<String>,
    /// 0 = deshabilitado, 1 = habilitado
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}
