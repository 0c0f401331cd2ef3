use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TriageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    pub description: String,
}

/// Departamento recomendado por el triaje
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct TriageResult {
    pub dept_id: Option<i64>,
    pub dept_name: Option<String>,
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeSearchRequest {
    pub query: String,
    pub limit: u32,
}

impl KnowledgeSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 5,
        }
    }
}
