use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Spec data as the backend decoded it from `specs_json`. Usually an
    /// object, but any JSON the backend accepted is kept.
    #[serde(default = "empty_specs")]
    pub specs: Value,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub carousel_images: Vec<String>,
    #[serde(default)]
    pub detail_images: Vec<String>,
    #[serde(default)]
    pub detailed_text: Option<String>,
    #[serde(default = "active_by_default", deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

impl Product {
    /// First carousel image, falling back to the main image.
    pub fn cover_image(&self) -> Option<&str> {
        self.carousel_images
            .first()
            .map(String::as_str)
            .or(self.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    pub order_no: String,
    pub status: String,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub phone_tail: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Shops carry no fixed schema on the wire.
pub type Shop = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

fn empty_specs() -> Value {
    Value::Object(Map::new())
}

fn active_by_default() -> bool {
    true
}

// The backend stores the flag as a tinyint, so 0/1 shows up next to true/false.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        None => true,
    })
}
