use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::documents::dto::DocumentDto;

pub struct GetDocumentCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetDocumentCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetDocumentCommandRequest {
    pub code: String,
}

impl GetDocumentCommandRequest {
    pub fn new(code: String) -> Self {
        Self {
            code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetDocumentCommandResponse {
    pub document: DocumentDto,
}

impl GetDocumentCommandResponse {
    pub fn new(document: DocumentDto) -> Self {
        Self {
            document,
        }
    }
}

#[async_trait]
impl Command<GetDocumentCommandRequest, GetDocumentCommandResponse> for GetDocumentCommand {
    async fn execute(&self, req: GetDocumentCommandRequest) -> Result<GetDocumentCommandResponse, CommandError> {
        self.catalog_service.find_document(req.code.as_str())
            .await.map_err(CommandError::from).map(GetDocumentCommandResponse::new)
    }
}
