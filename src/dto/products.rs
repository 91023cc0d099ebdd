use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    error::{ClientError, ClientResult},
    models::Product,
};

/// A form field whose wire value is JSON text.
///
/// Callers either hand over text they already encoded, which is sent as-is,
/// or a structured value, which is serialized first.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonField {
    Encoded(String),
    Value(Value),
}

impl JsonField {
    pub fn encode(&self) -> ClientResult<String> {
        match self {
            JsonField::Encoded(text) => Ok(text.clone()),
            JsonField::Value(value) => serde_json::to_string(value).map_err(ClientError::Encode),
        }
    }
}

impl From<String> for JsonField {
    fn from(text: String) -> Self {
        JsonField::Encoded(text)
    }
}

impl From<&str> for JsonField {
    fn from(text: &str) -> Self {
        JsonField::Encoded(text.to_string())
    }
}

impl From<Value> for JsonField {
    fn from(value: Value) -> Self {
        JsonField::Value(value)
    }
}

impl From<Vec<String>> for JsonField {
    fn from(items: Vec<String>) -> Self {
        JsonField::Value(json!(items))
    }
}

/// How a single form field is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// Sent verbatim; a missing value becomes an empty string.
    Text,
    /// Sent as JSON text, see [`JsonField`].
    Json,
}

/// Which endpoint the form is headed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The backend assigns the id, so `product_id` is left out.
    Create,
    Update,
}

enum FieldValue<'a> {
    Text(Option<String>),
    Json(&'a JsonField),
}

impl FieldValue<'_> {
    #[cfg(test)]
    fn encoding(&self) -> FieldEncoding {
        match self {
            FieldValue::Text(_) => FieldEncoding::Text,
            FieldValue::Json(_) => FieldEncoding::Json,
        }
    }

    fn encode(self) -> ClientResult<String> {
        match self {
            FieldValue::Text(text) => Ok(text.unwrap_or_default()),
            FieldValue::Json(field) => field.encode(),
        }
    }
}

/// Multipart body for creating or editing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub product_id: Option<String>,
    pub shop_id: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub specs_json: JsonField,
    pub image_url: Option<String>,
    pub carousel_images: JsonField,
    pub detailed_text: Option<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_id: None,
            shop_id: None,
            title: String::new(),
            category: None,
            price: None,
            description: None,
            specs_json: JsonField::Value(json!({})),
            image_url: None,
            carousel_images: JsonField::Value(json!([])),
            detailed_text: None,
        }
    }
}

impl ProductForm {
    pub fn new(shop_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            shop_id: Some(shop_id.into()),
            title: title.into(),
            ..Self::default()
        }
    }

    fn entries(&self) -> [(&'static str, FieldValue<'_>); 10] {
        [
            ("product_id", FieldValue::Text(self.product_id.clone())),
            ("shop_id", FieldValue::Text(self.shop_id.clone())),
            ("title", FieldValue::Text(Some(self.title.clone()))),
            ("category", FieldValue::Text(self.category.clone())),
            ("price", FieldValue::Text(self.price.map(|p| p.to_string()))),
            ("description", FieldValue::Text(self.description.clone())),
            ("specs_json", FieldValue::Json(&self.specs_json)),
            ("image_url", FieldValue::Text(self.image_url.clone())),
            ("carousel_images", FieldValue::Json(&self.carousel_images)),
            ("detailed_text", FieldValue::Text(self.detailed_text.clone())),
        ]
    }

    #[cfg(test)]
    fn field_encodings(&self) -> Vec<(&'static str, FieldEncoding)> {
        self.entries()
            .iter()
            .map(|(name, value)| (*name, value.encoding()))
            .collect()
    }

    /// Encodes every field to its wire text.
    pub fn encode_fields(&self, mode: FormMode) -> ClientResult<Vec<(&'static str, String)>> {
        self.entries()
            .into_iter()
            .filter(|(name, _)| !(mode == FormMode::Create && *name == "product_id"))
            .map(|(name, value)| value.encode().map(|text| (name, text)))
            .collect()
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            product_id: Some(product.product_id.clone()),
            shop_id: product.shop_id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: Some(product.price),
            description: product.description.clone(),
            specs_json: JsonField::Value(product.specs.clone()),
            image_url: product.image_url.clone(),
            carousel_images: product.carousel_images.clone().into(),
            detailed_text: product.detailed_text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleProductRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub ok: bool,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductToggled {
    pub ok: bool,
    pub product_id: String,
    pub is_active: bool,
}

/// An image headed for the upload endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }

    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }
}
