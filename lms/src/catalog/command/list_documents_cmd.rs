use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LendingStatus;
use crate::documents::dto::DocumentDto;

pub struct ListDocumentsCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListDocumentsCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListDocumentsCommandRequest {
    pub status: Option<LendingStatus>,
}

impl ListDocumentsCommandRequest {
    pub fn new(status: Option<LendingStatus>) -> Self {
        Self {
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListDocumentsCommandResponse {
    pub documents: Vec<DocumentDto>,
}

impl ListDocumentsCommandResponse {
    pub fn new(documents: Vec<DocumentDto>) -> Self {
        Self {
            documents,
        }
    }
}

#[async_trait]
impl Command<ListDocumentsCommandRequest, ListDocumentsCommandResponse> for ListDocumentsCommand {
    async fn execute(&self, req: ListDocumentsCommandRequest) -> Result<ListDocumentsCommandResponse, CommandError> {
        self.catalog_service.list_documents(req.status)
            .await.map_err(CommandError::from).map(ListDocumentsCommandResponse::new)
    }
}
