use reqwest::Method;

use super::{ApiClient, RequestBody};
use crate::{error::ClientResult, models::Health};

impl ApiClient {
    pub async fn health(&self) -> ClientResult<Health> {
        self.send(Method::GET, &["health"], RequestBody::Empty)
            .await
    }
}
