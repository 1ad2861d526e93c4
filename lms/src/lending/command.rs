pub mod confirm_reservation_cmd;
pub mod mark_unreturned_cmd;
pub mod record_return_cmd;
pub mod request_hold_cmd;
pub mod reserve_document_cmd;

use serde::{Deserialize, Serialize};
use crate::documents::dto::DocumentReceipt;
use crate::persons::dto::PersonDto;

// LendingCommandRequest is the body shared by the lending commands that act for a patron
#[derive(Debug, Clone, Deserialize)]
pub struct LendingCommandRequest {
    pub actor: PersonDto,
    pub code: String,
    pub patron_id: String,
}

impl LendingCommandRequest {
    pub fn new(actor: PersonDto, code: &str, patron_id: &str) -> Self {
        Self {
            actor,
            code: code.to_string(),
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LendingCommandResponse {
    #[serde(flatten)]
    pub receipt: DocumentReceipt,
}

impl LendingCommandResponse {
    pub fn new(receipt: DocumentReceipt) -> Self {
        Self {
            receipt,
        }
    }
}
