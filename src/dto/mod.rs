use serde::{Deserialize, Serialize};

pub mod chat;
pub mod orders;
pub mod products;

/// Bare `{"ok": true}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}
