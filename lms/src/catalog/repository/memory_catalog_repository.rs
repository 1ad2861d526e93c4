use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::catalog::domain::model::CatalogEntry;
use crate::catalog::repository::catalog_table::CatalogTable;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
pub struct MemoryCatalogRepository {
    table: Mutex<CatalogTable>,
}

impl MemoryCatalogRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<CatalogEntry> for MemoryCatalogRepository {
    async fn create(&self, entity: &CatalogEntry) -> LibraryResult<usize> {
        self.table.lock().await.create(entity)
    }

    async fn update(&self, entity: &CatalogEntry) -> LibraryResult<usize> {
        self.table.lock().await.update(entity)
    }

    async fn get(&self, id: &str) -> LibraryResult<CatalogEntry> {
        self.table.lock().await.get(id)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.table.lock().await.delete(id)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CatalogEntry>> {
        self.table.lock().await.query(predicate, page, page_size)
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn created_count(&self) -> LibraryResult<u64> {
        Ok(self.table.lock().await.created_count())
    }
}
