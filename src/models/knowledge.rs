use serde::{Deserialize, Serialize};

/// Documento médico de la base de conocimiento del triaje
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub disease_name: Option<String>,
    pub content: Option<String>,
    pub department: Option<String>,
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct KnowledgeFilter {
    pub keyword: Option<String>,
    pub department: Option<String>,
}
