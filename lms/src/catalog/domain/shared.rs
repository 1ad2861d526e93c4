use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use crate::catalog::domain::model::{Catalog, CatalogEntry};
use crate::catalog::repository::{CatalogRepository, DEFAULT_PAGE_SIZE};
use crate::core::domain::ReturnPolicy;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, Receipt};
use crate::documents::domain::model::DocumentRecord;
use crate::documents::domain::Reservable;
use crate::documents::dto::{DocumentDto, DocumentReceipt};
use crate::gateway::events::EventPublisher;

/// SharedCatalog is the single lock around the catalog used by every service.
///
/// A mutation runs its catalog operation, writes the changed entry through the repository and
/// publishes a domain event, all while holding the lock. When the write fails the entry is put
/// back to what it was before the operation.
#[derive(Clone)]
pub struct SharedCatalog {
    catalog: Arc<Mutex<Catalog>>,
    repository: Arc<dyn CatalogRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog, repository: Arc<dyn CatalogRepository>,
               publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            repository,
            publisher,
        }
    }

    // rebuilds the catalog from every entry the repository holds
    pub async fn load(return_policy: ReturnPolicy, repository: Arc<dyn CatalogRepository>,
                      publisher: Arc<dyn EventPublisher>) -> LibraryResult<Self> {
        let mut entries = vec![];
        let mut page: Option<String> = None;
        loop {
            let res = repository.query(&HashMap::new(), page.as_deref(), DEFAULT_PAGE_SIZE).await?;
            entries.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        let catalog = Catalog::restore(return_policy, entries)?;
        info!(documents = catalog.len(), policy = %return_policy, "catalog loaded");
        Ok(Self::new(catalog, repository, publisher))
    }

    pub async fn read<T, F>(&self, f: F) -> T where F: FnOnce(&Catalog) -> T {
        let catalog = self.catalog.lock().await;
        f(&*catalog)
    }

    pub async fn created_count(&self) -> LibraryResult<u64> {
        self.repository.created_count().await
    }

    pub async fn add(&self, document: DocumentRecord) -> LibraryResult<DocumentReceipt> {
        let code = document.code().to_string();
        let mut catalog = self.catalog.lock().await;
        let receipt = catalog.add(document)?;
        let entry = current_entry(&catalog, &code)?;
        if let Err(err) = self.repository.create(&entry).await {
            warn!(code = %code, error = %err, "failed to store added document");
            catalog.rollback(&code, None);
            return Err(err);
        }
        let dto = DocumentDto::from(&entry);
        self.emit(DomainEvent::added("document_added", &code, &dto)).await;
        info!(code = %code, "document added");
        Ok(DocumentReceipt::new(receipt, dto))
    }

    pub async fn remove(&self, code: &str) -> LibraryResult<Receipt> {
        let mut catalog = self.catalog.lock().await;
        let previous = catalog.entry(code).cloned();
        let receipt = catalog.remove(code)?;
        if let Err(err) = self.repository.delete(code).await {
            warn!(code = %code, error = %err, "failed to delete removed document");
            catalog.rollback(code, previous);
            return Err(err);
        }
        if let Some(entry) = previous {
            self.emit(DomainEvent::deleted("document_removed", code, &DocumentDto::from(&entry))).await;
        }
        info!(code = %code, "document removed");
        Ok(receipt)
    }

    /// Runs a status-changing operation on a single document.
    ///
    /// The changed entry is written only when the operation bumped its version, so
    /// operations that succeed without a change neither persist nor publish.
    pub async fn transition<F>(&self, event_name: &str, code: &str, patron_id: Option<&str>,
                               operation: F) -> LibraryResult<DocumentReceipt>
        where F: FnOnce(&mut Catalog) -> LibraryResult<Receipt> + Send {
        let mut catalog = self.catalog.lock().await;
        let previous = catalog.entry(code).cloned();
        let receipt = match operation(&mut *catalog) {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(code = %code, patron_id = ?patron_id, error = %err, "{} rejected", event_name);
                return Err(err);
            }
        };
        let entry = current_entry(&catalog, code)?;
        if let Some(before) = previous.as_ref().filter(|before| before.version != entry.version) {
            if let Err(err) = self.repository.update(&entry).await {
                warn!(code = %code, error = %err, "failed to store transition");
                catalog.rollback(code, previous.clone());
                return Err(err);
            }
            let dto = DocumentDto::from(&entry);
            self.emit(DomainEvent::transitioned(event_name, code, before.status, entry.status, patron_id, &dto)).await;
            info!(code = %code, patron_id = ?patron_id, from = %before.status, to = %entry.status, "{}", event_name);
        }
        Ok(DocumentReceipt::new(receipt, DocumentDto::from(&entry)))
    }

    // events report what already happened, so a failed publish is only logged
    async fn emit(&self, event: serde_json::Result<DomainEvent>) {
        let res = match event {
            Ok(event) => self.publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

fn current_entry(catalog: &Catalog, code: &str) -> LibraryResult<CatalogEntry> {
    catalog.entry(code).cloned().ok_or_else(|| LibraryError::not_found(
        format!("document {} does not exist in the catalog", code).as_str()))
}
