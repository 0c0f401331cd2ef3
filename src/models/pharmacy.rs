use serde::{Deserialize, Serialize};

/// Medicamento del diccionario (`drug_dict`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Drug {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_id: Option<i64>,
    pub name: Option<String>,
    /// Presentación
    pub spec: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub unit: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<i32>,
}

/// Fila importada desde la hoja de cálculo de medicamentos
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct DrugImportRow {
    pub name: Option<String>,
    pub spec: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub unit: Option<String>,
    pub manufacturer: Option<String>,
}
