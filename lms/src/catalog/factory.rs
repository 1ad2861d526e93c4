use std::path::Path;
use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::domain::shared::SharedCatalog;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::file_catalog_repository::FileCatalogRepository;
use crate::catalog::repository::memory_catalog_repository::MemoryCatalogRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::gateway::events::EventPublisher;

pub async fn create_catalog_repository(config: &Configuration) -> LibraryResult<Arc<dyn CatalogRepository>> {
    match config.store {
        RepositoryStore::Memory => {
            Ok(Arc::new(MemoryCatalogRepository::new()))
        }
        RepositoryStore::JsonFile => {
            let repo = FileCatalogRepository::open(Path::new(config.data_file.as_str())).await?;
            Ok(Arc::new(repo))
        }
    }
}

pub async fn create_shared_catalog(config: &Configuration,
                                   publisher: Arc<dyn EventPublisher>) -> LibraryResult<SharedCatalog> {
    let repository = create_catalog_repository(config).await?;
    SharedCatalog::load(config.return_policy, repository, publisher).await
}

pub fn create_catalog_service(config: &Configuration, catalog: SharedCatalog) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, catalog))
}
