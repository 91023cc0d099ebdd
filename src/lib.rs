pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
