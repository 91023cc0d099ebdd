use reqwest::{
    Method,
    multipart::{Form, Part},
};

use super::{ApiClient, RequestBody};
use crate::{
    dto::{
        Ack,
        orders::{AdminUpdateOrderRequest, OrderDeleted, OrderStatus, OrderStatusUpdated},
        products::{
            FormMode, ImageUpload, ProductCreated, ProductForm, ProductToggled,
            ToggleProductRequest,
        },
    },
    error::ClientResult,
    models::UploadResult,
};

fn product_multipart(form: &ProductForm, mode: FormMode) -> ClientResult<Form> {
    let multipart = form
        .encode_fields(mode)?
        .into_iter()
        .fold(Form::new(), |multipart, (name, value)| multipart.text(name, value));
    Ok(multipart)
}

impl ApiClient {
    /// Stores an image and returns its reference URL. Uploads are never deduplicated.
    pub async fn upload_image(&self, file: ImageUpload) -> ClientResult<UploadResult> {
        let mime = file.mime_type();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);
        self.send(
            Method::POST,
            &["api", "admin", "upload"],
            RequestBody::Multipart(form),
        )
        .await
    }

    pub async fn create_product(&self, form: &ProductForm) -> ClientResult<ProductCreated> {
        let body = product_multipart(form, FormMode::Create)?;
        self.send(
            Method::POST,
            &["api", "admin", "products"],
            RequestBody::Multipart(body),
        )
        .await
    }

    pub async fn update_product(&self, id: &str, form: &ProductForm) -> ClientResult<Ack> {
        let body = product_multipart(form, FormMode::Update)?;
        self.send(
            Method::PUT,
            &["api", "admin", "products", id],
            RequestBody::Multipart(body),
        )
        .await
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<Ack> {
        self.send(
            Method::DELETE,
            &["api", "admin", "products", id],
            RequestBody::Empty,
        )
        .await
    }

    pub async fn toggle_product(&self, id: &str, is_active: bool) -> ClientResult<ProductToggled> {
        let body = RequestBody::json(&ToggleProductRequest { is_active })?;
        self.send(
            Method::POST,
            &["api", "admin", "products", id, "toggle"],
            body,
        )
        .await
    }

    pub async fn admin_update_order(
        &self,
        order_no: &str,
        status: OrderStatus,
    ) -> ClientResult<OrderStatusUpdated> {
        let body = RequestBody::json(&AdminUpdateOrderRequest { status })?;
        self.send(Method::PATCH, &["api", "admin", "orders", order_no], body)
            .await
    }

    pub async fn admin_delete_order(&self, order_no: &str) -> ClientResult<OrderDeleted> {
        self.send(
            Method::DELETE,
            &["api", "admin", "orders", order_no],
            RequestBody::Empty,
        )
        .await
    }
}
