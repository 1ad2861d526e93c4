use async_trait::async_trait;
use tracing::debug;
use crate::catalog::domain::model::ReservationChannel;
use crate::catalog::domain::shared::SharedCatalog;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::documents::dto::DocumentReceipt;
use crate::lending::domain::{protocol, LendingService};
use crate::persons::Actor;
use crate::persons::dto::PersonDto;

pub struct LendingServiceImpl {
    catalog: SharedCatalog,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, catalog: SharedCatalog) -> Self {
        debug!(branch = %config.branch_id, policy = %config.return_policy, "lending service ready");
        Self {
            catalog,
        }
    }
}

#[async_trait]
impl LendingService for LendingServiceImpl {
    async fn request_hold(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt> {
        debug!(code, patron_id, role = %actor.role(), "hold requested");
        self.catalog.transition("hold_requested", code, Some(patron_id),
                                |catalog| protocol::request_hold(catalog, code, actor, patron_id)).await
    }

    async fn confirm_reservation(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt> {
        self.catalog.transition("reservation_confirmed", code, Some(patron_id),
                                |catalog| protocol::confirm_reservation(catalog, code, actor, patron_id)).await
    }

    async fn record_return(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt> {
        self.catalog.transition("return_recorded", code, Some(patron_id),
                                |catalog| protocol::record_return(catalog, code, actor, patron_id)).await
    }

    async fn mark_unreturned(&self, actor: &PersonDto, code: &str) -> LibraryResult<DocumentReceipt> {
        self.catalog.transition("marked_unreturned", code, None,
                                |catalog| protocol::mark_unreturned(catalog, code, actor)).await
    }

    async fn reserve(&self, actor: &PersonDto, code: &str, patron_id: &str,
                     channel: ReservationChannel) -> LibraryResult<DocumentReceipt> {
        debug!(code, patron_id, channel = ?channel, "reservation requested");
        self.catalog.transition("document_reserved", code, Some(patron_id),
                                |catalog| protocol::reserve(catalog, code, actor, patron_id, channel)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::domain::model::{Catalog, ReservationChannel};
    use crate::catalog::domain::shared::SharedCatalog;
    use crate::catalog::repository::memory_catalog_repository::MemoryCatalogRepository;
    use crate::core::domain::{Configuration, ReturnPolicy};
    use crate::core::library::{LendingStatus, LibraryError};
    use crate::documents::domain::model::DocumentRecord;
    use crate::gateway::memory::MemoryPublisher;
    use crate::lending::domain::LendingService;
    use crate::lending::domain::service::LendingServiceImpl;
    use crate::persons::dto::PersonDto;

    async fn build(policy: ReturnPolicy) -> (LendingServiceImpl, SharedCatalog, MemoryPublisher) {
        let publisher = MemoryPublisher::new();
        let shared = SharedCatalog::new(Catalog::new(policy), Arc::new(MemoryCatalogRepository::new()),
                                        Arc::new(publisher.clone()));
        shared.add(DocumentRecord::disc("DVD123", "Salle multimedia", "Film d'action", "John Doe"))
            .await.expect("should add");
        let config = Configuration::new("test").with_return_policy(policy);
        (LendingServiceImpl::new(&config, shared.clone()), shared, publisher)
    }

    #[tokio::test]
    async fn test_should_lend_on_patron_request() {
        let (svc, _, publisher) = build(ReturnPolicy::OnHoldOnly).await;
        let patron = PersonDto::patron("usager123");
        let res = svc.request_hold(&patron, "DVD123", "usager123").await.expect("should lend");
        assert_eq!(LendingStatus::NotReturned, res.document.status);
        assert_eq!(Some("usager123".to_string()), res.document.holder_id);
        assert_eq!(vec!["document_added".to_string(), "hold_requested".to_string()],
                   publisher.names_for("DVD123").await);
    }

    #[tokio::test]
    async fn test_should_keep_status_on_rejected_return() {
        let (svc, shared, publisher) = build(ReturnPolicy::OnHoldOnly).await;
        let staff = PersonDto::staff("bibliothecaire");
        svc.confirm_reservation(&staff, "DVD123", "usager123").await.expect("should confirm");
        let res = svc.record_return(&staff, "DVD123", "usager123").await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(LendingStatus::NotReturned,
                   shared.read(|c| c.status("DVD123")).await.expect("should exist"));
        assert_eq!(2, publisher.events().await.len());
    }

    #[tokio::test]
    async fn test_should_complete_round_trip() {
        let (svc, _, _) = build(ReturnPolicy::OutstandingLoans).await;
        let staff = PersonDto::staff("bibliothecaire");
        let patron = PersonDto::patron("usager123");
        svc.reserve(&patron, "DVD123", "usager123", ReservationChannel::Online).await.expect("should reserve");
        let res = svc.record_return(&staff, "DVD123", "usager123").await.expect("should return");
        assert_eq!(LendingStatus::Available, res.document.status);
        assert_eq!(Some("usager123".to_string()), res.document.returned_by);
        assert!(res.document.holder_id.is_none());
    }

    #[tokio::test]
    async fn test_should_require_staff_for_marking() {
        let (svc, _, _) = build(ReturnPolicy::OnHoldOnly).await;
        let patron = PersonDto::patron("usager123");
        let res = svc.mark_unreturned(&patron, "DVD123").await;
        assert!(matches!(res, Err(LibraryError::Forbidden { .. })));
    }
}
