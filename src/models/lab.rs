use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct LabOrder {
    pub order_id: Option<i64>,
    pub record_id: Option<i64>,
    pub item_name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<i32>,
    pub result_text: Option<String>,
    /// Array JSON de URLs de imágenes
    pub result_images: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
}

/// Orden de laboratorio con datos del paciente (`/lab/orders`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct LabOrderView {
    #[serde(flatten)]
    pub order: LabOrder,
    pub patient_name: Option<String>,
    pub gender: Option<i32>,
    pub age: Option<i32>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LabResultRequest {
    pub order_id: i64,
    pub result_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_images: Option<String>,
}

impl LabResultRequest {
    /// `result_images` viaja como string con un array JSON dentro
    pub fn with_images(order_id: i64, result_text: impl Into<String>, urls: &[String]) -> Self {
        let images = if urls.is_empty() {
            None
        } else {
            serde_json::to_string(urls).ok()
        };
        Self {
            order_id,
            result_text: result_text.into(),
            result_images: images,
        }
    }
}

/// Prueba del catálogo de laboratorio
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckItem {
    pub item_id: Option<i64>,
    pub item_name: Option<String>,
    pub item_code: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_images_are_embedded_as_json_string() {
        let req = LabResultRequest::with_images(5, "normal", &["a.png".to_string()]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["orderId"], 5);
        assert_eq!(json["resultImages"], "[\"a.png\"]");

        let bare = LabResultRequest::with_images(5, "normal", &[]);
        assert!(serde_json::to_value(&bare).unwrap().get("resultImages").is_none());
    }
}
