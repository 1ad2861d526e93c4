use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::shared::SharedCatalog;
use crate::core::domain::Configuration;
use crate::core::library::{LendingStatus, LibraryError, LibraryResult, Receipt};
use crate::documents::domain::model::DocumentRecord;
use crate::documents::dto::{DocumentDto, DocumentReceipt};

pub struct CatalogServiceImpl {
    branch_id: String,
    catalog: SharedCatalog,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, catalog: SharedCatalog) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_document(&self, document: DocumentRecord) -> LibraryResult<DocumentReceipt> {
        self.catalog.add(document).await
    }

    async fn remove_document(&self, code: &str) -> LibraryResult<Receipt> {
        self.catalog.remove(code).await
    }

    async fn document_exists(&self, code: &str) -> LibraryResult<bool> {
        Ok(self.catalog.read(|c| c.exists(code)).await)
    }

    async fn find_document(&self, code: &str) -> LibraryResult<DocumentDto> {
        self.catalog.read(|c| c.entry(code).map(DocumentDto::from)).await
            .ok_or_else(|| LibraryError::not_found(
                format!("document {} does not exist in branch {}", code, self.branch_id).as_str()))
    }

    async fn list_documents(&self, status: Option<LendingStatus>) -> LibraryResult<Vec<DocumentDto>> {
        let mut documents: Vec<DocumentDto> = self.catalog.read(|c| c.query_all()).await
            .values()
            .filter(|entry| status.map_or(true, |s| entry.status == s))
            .map(DocumentDto::from)
            .collect();
        documents.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(documents)
    }

    async fn created_count(&self) -> LibraryResult<u64> {
        self.catalog.created_count().await
    }
}
