use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::documents::domain::model::{DocumentDetails, DocumentRecord};
use crate::documents::dto::DocumentReceipt;

pub struct AddDocumentCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddDocumentCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddDocumentCommandRequest {
    pub code: String,
    pub location: String,
    #[serde(flatten)]
    pub details: DocumentDetails,
    #[serde(default)]
    pub allows_on_site_pickup: bool,
    #[serde(default)]
    pub allows_online_reservation: bool,
}

impl AddDocumentCommandRequest {
    pub fn new(code: &str, location: &str, details: DocumentDetails) -> Self {
        Self {
            code: code.to_string(),
            location: location.to_string(),
            details,
            allows_on_site_pickup: false,
            allows_online_reservation: false,
        }
    }

    pub fn build_document(&self) -> DocumentRecord {
        DocumentRecord::new(self.code.as_str(), self.location.as_str(), self.details.clone())
            .with_on_site_pickup(self.allows_on_site_pickup)
            .with_online_reservation(self.allows_online_reservation)
    }
}

#[derive(Debug, Serialize)]
pub struct AddDocumentCommandResponse {
    #[serde(flatten)]
    pub receipt: DocumentReceipt,
}

impl AddDocumentCommandResponse {
    pub fn new(receipt: DocumentReceipt) -> Self {
        Self {
            receipt,
        }
    }
}

#[async_trait]
impl Command<AddDocumentCommandRequest, AddDocumentCommandResponse> for AddDocumentCommand {
    async fn execute(&self, req: AddDocumentCommandRequest) -> Result<AddDocumentCommandResponse, CommandError> {
        if req.code.trim().is_empty() {
            return Err(CommandError::Validation {
                message: "document code must not be blank".to_string(),
                reason_code: None,
            });
        }
        self.catalog_service.add_document(req.build_document())
            .await.map_err(CommandError::from).map(AddDocumentCommandResponse::new)
    }
}
