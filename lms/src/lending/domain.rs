pub mod protocol;
pub mod service;

use async_trait::async_trait;
use crate::catalog::domain::model::ReservationChannel;
use crate::core::library::LibraryResult;
use crate::documents::dto::DocumentReceipt;
use crate::persons::dto::PersonDto;

// LendingService applies the desk rules for who may hold, lend and return documents.
#[async_trait]
pub trait LendingService: Sync + Send {
    // patrons borrow straight away, staff place a hold that waits for verification
    async fn request_hold(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt>;

    // staff only
    async fn confirm_reservation(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt>;

    // staff only
    async fn record_return(&self, actor: &PersonDto, code: &str, patron_id: &str) -> LibraryResult<DocumentReceipt>;

    // staff only
    async fn mark_unreturned(&self, actor: &PersonDto, code: &str) -> LibraryResult<DocumentReceipt>;

    async fn reserve(&self, actor: &PersonDto, code: &str, patron_id: &str,
                     channel: ReservationChannel) -> LibraryResult<DocumentReceipt>;
}
