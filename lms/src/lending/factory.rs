use crate::catalog::domain::shared::SharedCatalog;
use crate::core::domain::Configuration;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;

pub fn create_lending_service(config: &Configuration, catalog: SharedCatalog) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config, catalog))
}
