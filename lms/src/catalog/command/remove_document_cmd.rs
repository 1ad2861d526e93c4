use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Receipt;

pub struct RemoveDocumentCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveDocumentCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveDocumentCommandRequest {
    pub code: String,
}

impl RemoveDocumentCommandRequest {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveDocumentCommandResponse {
    #[serde(flatten)]
    pub receipt: Receipt,
}

impl RemoveDocumentCommandResponse {
    pub fn new(receipt: Receipt) -> Self {
        Self {
            receipt,
        }
    }
}

#[async_trait]
impl Command<RemoveDocumentCommandRequest, RemoveDocumentCommandResponse> for RemoveDocumentCommand {
    async fn execute(&self, req: RemoveDocumentCommandRequest) -> Result<RemoveDocumentCommandResponse, CommandError> {
        self.catalog_service.remove_document(req.code.as_str())
            .await.map_err(CommandError::from).map(RemoveDocumentCommandResponse::new)
    }
}
