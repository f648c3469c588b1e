use serde::{Deserialize, Serialize};

/// One row of a car listing, as returned by `GET /Cars`.
///
/// Values are snapshots of the remote record: they are never patched locally
/// and get replaced wholesale whenever the page they belong to is refetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListItem {
    pub id: u64,
    pub company: String,
    pub model: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_image: bool,
    /// Inline `data:` URL of the car picture, when the API embeds one.
    #[serde(default)]
    pub image_data_url: Option<String>,
}

/// A single car fetched through `GET /Cars/CarInfo-{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetail {
    pub id: u64,
    pub company: String,
    pub model: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub image_data_url: Option<String>,
}

impl CarListItem {
    pub fn title(&self) -> String {
        format!("{} {}", self.company, self.model)
    }
}

impl CarDetail {
    pub fn title(&self) -> String {
        format!("{} {}", self.company, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_item_reads_camel_case_payload() {
        let json = r#"{
            "id": 7,
            "company": "Toyota",
            "model": "Sedan 7",
            "price": 45250,
            "description": null,
            "hasImage": true,
            "imageDataUrl": "data:image/png;base64,AAAA"
        }"#;
        let item: CarListItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.price, 45250.0);
        assert!(item.has_image);
        assert_eq!(item.description, None);
        assert_eq!(item.image_data_url.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(item.title(), "Toyota Sedan 7");
    }

    #[test]
    fn detail_tolerates_missing_optional_fields() {
        let json = r#"{"id": 3, "company": "BMW", "model": "Coupe", "price": 41500.5}"#;
        let detail: CarDetail = serde_json::from_str(json).unwrap();
        assert!(!detail.has_image);
        assert!(detail.image_data_url.is_none());
        assert_eq!(detail.price, 41500.5);
    }
}
