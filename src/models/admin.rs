// ============================================================================
// ADMIN MODELS - Consultorios, plantillas de agenda, consultas y exportación
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::constants::SPREADSHEET_CONTENT_TYPE;

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsultingRoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    pub room_name: Option<String>,
    pub room_code: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Ids de departamento separados por comas
    pub dept_ids: Option<String>,
    pub status: Option<i32>,
}

impl ConsultingRoom {
    pub fn department_ids(&self) -> Vec<i64> {
        self.dept_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter_map(|id| id.trim().parse().ok())
            .collect()
    }
}

/// Turno semanal recurrente a partir del cual se generan agendas
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    pub dept_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub room_id: Option<i64>,
    /// 0 = lunes ... 6 = domingo
    pub day_of_week: Option<i32>,
    /// AM, PM o ER
    pub shift_type: Option<String>,
    pub max_quota: Option<i32>,
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSchedulesRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Filtros de `/admin/users`
#[derive(Clone, PartialEq, Debug)]
pub struct UserQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: Option<String>,
    pub role: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            keyword: None,
            role: None,
        }
    }
}

impl UserQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        push_opt(&mut pairs, "keyword", self.keyword.as_ref());
        push_opt(&mut pairs, "role", self.role.as_ref());
        pairs
    }
}

/// Consulta flexible de `/admin/query` y `/admin/export`.
///
/// `kind` es obligatorio (registrations, drugs, users, ...); los demás
/// filtros solo viajan si tienen valor.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DataQuery {
    pub kind: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub dept_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub role: Option<String>,
    pub drug_id: Option<i64>,
    pub status: Option<i32>,
    pub keyword: Option<String>,
    pub exclude_chief: bool,
}

impl DataQuery {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("type".to_string(), self.kind.clone())];
        push_opt(&mut pairs, "page", self.page);
        push_opt(&mut pairs, "size", self.size);
        push_opt(&mut pairs, "startDate", self.start_date);
        push_opt(&mut pairs, "endDate", self.end_date);
        push_opt(&mut pairs, "deptId", self.dept_id);
        push_opt(&mut pairs, "doctorId", self.doctor_id);
        push_opt(&mut pairs, "role", self.role.as_ref());
        push_opt(&mut pairs, "drugId", self.drug_id);
        push_opt(&mut pairs, "status", self.status);
        push_opt(&mut pairs, "keyword", self.keyword.as_ref());
        if self.exclude_chief {
            pairs.push(("excludeChief".to_string(), "true".to_string()));
        }
        pairs
    }
}

fn push_opt<V: ToString>(pairs: &mut Vec<(String, String)>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

/// Archivo binario listo para descargar en el navegador
#[derive(Clone, PartialEq, Debug)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn spreadsheet(kind: &str, date: NaiveDate, bytes: Vec<u8>) -> Self {
        Self {
            file_name: export_file_name(kind, date),
            content_type: SPREADSHEET_CONTENT_TYPE.to_string(),
            bytes,
        }
    }
}

/// `<tipo>_export_<YYYY-MM-DD>.xlsx`
pub fn export_file_name(kind: &str, date: NaiveDate) -> String {
    format!("{}_export_{}.xlsx", kind, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn export_name_uses_type_and_iso_date() {
        assert_eq!(export_file_name("drugs", date(2024, 6, 1)), "drugs_export_2024-06-01.xlsx");
        let file = ExportedFile::spreadsheet("users", date(2025, 12, 31), vec![1, 2]);
        assert_eq!(file.file_name, "users_export_2025-12-31.xlsx");
        assert_eq!(file.content_type, SPREADSHEET_CONTENT_TYPE);
    }

    #[test]
    fn data_query_omits_absent_filters() {
        let query = DataQuery::new("registrations")
            .between(date(2024, 1, 1), date(2024, 1, 31))
            .page(2, 20);
        let pairs = query.to_query();
        assert_eq!(pairs[0], ("type".to_string(), "registrations".to_string()));
        assert!(pairs.contains(&("startDate".to_string(), "2024-01-01".to_string())));
        assert!(pairs.contains(&("size".to_string(), "20".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "keyword" || k == "excludeChief"));
    }

    #[test]
    fn user_query_defaults_to_first_page() {
        let pairs = UserQuery::default().to_query();
        assert_eq!(pairs, vec![
            ("page".to_string(), "1".to_string()),
            ("size".to_string(), "10".to_string()),
        ]);
    }

    #[test]
    fn room_department_list_is_parsed() {
        let room = ConsultingRoom {
            dept_ids: Some("1, 4,x,9".to_string()),
            ..ConsultingRoom::default()
        };
        assert_eq!(room.department_ids(), vec![1, 4, 9]);
    }
}
