use std::collections::HashMap;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use crate::catalog::domain::model::CatalogEntry;
use crate::catalog::repository::catalog_table::CatalogTable;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

// FileCatalogRepository keeps the whole table as one JSON document and rewrites it after every change.
#[derive(Debug)]
pub struct FileCatalogRepository {
    path: PathBuf,
    table: Mutex<CatalogTable>,
}

impl FileCatalogRepository {
    pub(crate) async fn open(path: &Path) -> LibraryResult<Self> {
        let table = if tokio::fs::try_exists(path).await? {
            let json = tokio::fs::read_to_string(path).await?;
            serde_json::from_str(&json)?
        } else {
            CatalogTable::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            table: Mutex::new(table),
        })
    }

    // applies a change to a copy and swaps it in once the file is written
    async fn write<F>(&self, change: F) -> LibraryResult<usize>
        where F: FnOnce(&mut CatalogTable) -> LibraryResult<usize> + Send {
        let mut table = self.table.lock().await;
        let mut next = table.clone();
        let size = change(&mut next)?;
        let json = serde_json::to_string_pretty(&next)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "catalog file written");
        *table = next;
        Ok(size)
    }
}

#[async_trait]
impl Repository<CatalogEntry> for FileCatalogRepository {
    async fn create(&self, entity: &CatalogEntry) -> LibraryResult<usize> {
        self.write(|table| table.create(entity)).await
    }

    async fn update(&self, entity: &CatalogEntry) -> LibraryResult<usize> {
        self.write(|table| table.update(entity)).await
    }

    async fn get(&self, id: &str) -> LibraryResult<CatalogEntry> {
        self.table.lock().await.get(id)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.write(|table| table.delete(id)).await
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CatalogEntry>> {
        self.table.lock().await.query(predicate, page, page_size)
    }
}

#[async_trait]
impl CatalogRepository for FileCatalogRepository {
    async fn created_count(&self) -> LibraryResult<u64> {
        Ok(self.table.lock().await.created_count())
    }
}
