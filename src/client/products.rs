use reqwest::Method;

use super::{ApiClient, RequestBody};
use crate::{
    error::ClientResult,
    models::{Product, Shop},
};

impl ApiClient {
    /// Storefront listing; the backend only returns active products.
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.send(Method::GET, &["api", "products"], RequestBody::Empty)
            .await
    }

    /// An unknown id surfaces as a 404 status error.
    pub async fn fetch_product_detail(&self, id: &str) -> ClientResult<Product> {
        self.send(Method::GET, &["api", "products", id], RequestBody::Empty)
            .await
    }

    /// Admin view of the catalog, inactive products included.
    pub async fn list_products_db(&self) -> ClientResult<Vec<Product>> {
        self.send(Method::GET, &["api", "products_db"], RequestBody::Empty)
            .await
    }

    pub async fn list_shops(&self) -> ClientResult<Vec<Shop>> {
        self.send(Method::GET, &["api", "shops"], RequestBody::Empty)
            .await
    }
}
