pub mod model;
pub mod service;
pub mod shared;

use async_trait::async_trait;
use crate::core::library::{LendingStatus, LibraryResult, Receipt};
use crate::documents::domain::model::DocumentRecord;
use crate::documents::dto::{DocumentDto, DocumentReceipt};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_document(&self, document: DocumentRecord) -> LibraryResult<DocumentReceipt>;
    async fn remove_document(&self, code: &str) -> LibraryResult<Receipt>;
    async fn document_exists(&self, code: &str) -> LibraryResult<bool>;
    async fn find_document(&self, code: &str) -> LibraryResult<DocumentDto>;
    // lists documents ordered by code, optionally only those with the given status
    async fn list_documents(&self, status: Option<LendingStatus>) -> LibraryResult<Vec<DocumentDto>>;
    async fn created_count(&self) -> LibraryResult<u64>;
}
