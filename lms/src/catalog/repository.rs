pub mod catalog_table;
pub mod file_catalog_repository;
pub mod memory_catalog_repository;

use async_trait::async_trait;
use crate::catalog::domain::model::CatalogEntry;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub const DEFAULT_PAGE_SIZE: usize = 100;

#[async_trait]
pub trait CatalogRepository: Repository<CatalogEntry> {
    // number of documents ever created through this repository, removals do not decrease it
    async fn created_count(&self) -> LibraryResult<u64>;
}
