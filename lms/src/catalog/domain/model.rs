use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::domain::{Identifiable, ReturnPolicy};
use crate::core::library::{LendingStatus, LibraryError, LibraryResult, Receipt};
use crate::documents::domain::model::DocumentRecord;
use crate::documents::domain::Reservable;

// ReservationChannel selects which document operation backs a reservation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ReservationChannel {
    Desk,
    OnSite,
    Online,
}

// CatalogEntry pairs a document with its lending status, keyed by the document code
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub document: DocumentRecord,
    pub status: LendingStatus,
    pub version: i64,
}

impl CatalogEntry {
    pub fn new(document: DocumentRecord) -> Self {
        Self {
            document,
            status: LendingStatus::Available,
            version: 0,
        }
    }

    pub fn code(&self) -> &str {
        self.document.code()
    }

    // Available must match a document that is neither held nor awaiting verification
    pub fn is_consistent(&self) -> bool {
        (self.status == LendingStatus::Available) == self.document.is_free()
    }

    fn set_status(&mut self, status: LendingStatus) {
        debug!(code = %self.document.code(), from = %self.status, to = %status, "status transition");
        self.status = status;
        self.version += 1;
    }
}

impl Identifiable for CatalogEntry {
    fn id(&self) -> String {
        self.document.code().to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

/// Catalog is the authoritative registry of document code to lending status.
///
/// Every status change goes through one of its operations, which consult the current status,
/// delegate the hold bookkeeping to the [`DocumentRecord`] and only then record the new status.
/// A failed document operation leaves the status untouched.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
    return_policy: ReturnPolicy,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(ReturnPolicy::OnHoldOnly)
    }
}

impl Catalog {
    pub fn new(return_policy: ReturnPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            return_policy,
        }
    }

    // rebuilds a catalog from persisted entries
    pub fn restore(return_policy: ReturnPolicy, entries: Vec<CatalogEntry>) -> LibraryResult<Self> {
        let mut catalog = Catalog::new(return_policy);
        for entry in entries {
            if catalog.exists(entry.code()) {
                return Err(LibraryError::already_exists(
                    format!("document {} is stored twice", entry.code()).as_str()));
            }
            if !entry.is_consistent() {
                return Err(LibraryError::validation(
                    format!("document {} is stored as {} with inconsistent hold metadata",
                            entry.code(), entry.status).as_str(), None));
            }
            catalog.entries.insert(entry.code().to_string(), entry);
        }
        Ok(catalog)
    }

    pub fn exists(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn entry(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    pub fn status(&self, code: &str) -> LibraryResult<LendingStatus> {
        self.entries.get(code).map(|e| e.status).ok_or_else(|| not_registered(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // snapshot of every entry, changes to it never reach the catalog
    pub fn query_all(&self) -> HashMap<String, CatalogEntry> {
        self.entries.clone()
    }

    pub fn add(&mut self, document: DocumentRecord) -> LibraryResult<Receipt> {
        let code = document.code().to_string();
        if code.trim().is_empty() {
            return Err(LibraryError::validation("document code must not be blank", None));
        }
        if self.exists(&code) {
            return Err(LibraryError::already_exists(
                format!("document {} already exists in the catalog", code).as_str()));
        }
        if !document.is_free() {
            return Err(LibraryError::conflict(
                format!("document {} carries an active hold and cannot be added as available", code).as_str(),
                None));
        }
        self.entries.insert(code.to_string(), CatalogEntry::new(document));
        Ok(Receipt::ok(format!("document {} has been added to the catalog", code).as_str()))
    }

    pub fn remove(&mut self, code: &str) -> LibraryResult<Receipt> {
        match self.entries.remove(code) {
            Some(_) => Ok(Receipt::ok(format!("document {} has been removed from the catalog", code).as_str())),
            None => Err(not_registered(code)),
        }
    }

    // staff-mediated hold, the document waits for verification
    pub fn place_on_hold(&mut self, code: &str, patron_id: &str) -> LibraryResult<Receipt> {
        let entry = self.available_entry(code)?;
        entry.document.begin_verification_hold(patron_id)?;
        entry.set_status(LendingStatus::AwaitingVerification);
        Ok(Receipt::ok(format!("document {} is awaiting verification", code).as_str()))
    }

    pub fn lend(&mut self, patron_id: &str, code: &str) -> LibraryResult<Receipt> {
        self.reserve(patron_id, code, ReservationChannel::Desk)
    }

    pub fn reserve(&mut self, patron_id: &str, code: &str, channel: ReservationChannel) -> LibraryResult<Receipt> {
        let entry = self.available_entry(code)?;
        match channel {
            ReservationChannel::Desk => entry.document.begin_loan(patron_id),
            ReservationChannel::OnSite => entry.document.begin_on_site_hold(patron_id),
            ReservationChannel::Online => entry.document.begin_online_hold(patron_id),
        }?;
        entry.set_status(LendingStatus::NotReturned);
        Ok(Receipt::ok(format!("document {} has been lent", code).as_str()))
    }

    pub fn mark_unreturned(&mut self, code: &str) -> LibraryResult<Receipt> {
        let entry = self.entry_mut(code)?;
        match entry.status {
            LendingStatus::OnHold => {
                Ok(Receipt::ok(format!("document {} is on hold and stays on hold", code).as_str()))
            }
            LendingStatus::NotReturned => {
                Ok(Receipt::ok(format!("document {} is already marked as not returned", code).as_str()))
            }
            // a free document has nothing outstanding, so it stays available
            LendingStatus::Available => {
                Ok(Receipt::ok(format!("document {} is not lent and stays available", code).as_str()))
            }
            LendingStatus::AwaitingVerification => {
                entry.set_status(LendingStatus::NotReturned);
                Ok(Receipt::ok(format!("document {} has been marked as not returned", code).as_str()))
            }
        }
    }

    pub fn end_loan(&mut self, patron_id: &str, code: &str) -> LibraryResult<Receipt> {
        let policy = self.return_policy;
        let entry = self.entry_mut(code)?;
        let accepted = match entry.status {
            LendingStatus::OnHold => true,
            LendingStatus::NotReturned => policy == ReturnPolicy::OutstandingLoans,
            LendingStatus::Available | LendingStatus::AwaitingVerification => false,
        };
        if !accepted {
            return Err(LibraryError::conflict(
                format!("document {} has not been lent", code).as_str(),
                Some(entry.status.to_string())));
        }
        entry.document.return_item(patron_id)?;
        entry.set_status(LendingStatus::Available);
        Ok(Receipt::ok(format!("document {} has been returned and is available again", code).as_str()))
    }

    // puts back an entry captured before a failed write
    pub(crate) fn rollback(&mut self, code: &str, previous: Option<CatalogEntry>) {
        match previous {
            Some(entry) => {
                self.entries.insert(code.to_string(), entry);
            }
            None => {
                self.entries.remove(code);
            }
        }
    }

    fn entry_mut(&mut self, code: &str) -> LibraryResult<&mut CatalogEntry> {
        self.entries.get_mut(code).ok_or_else(|| not_registered(code))
    }

    fn available_entry(&mut self, code: &str) -> LibraryResult<&mut CatalogEntry> {
        let entry = self.entry_mut(code)?;
        if entry.status != LendingStatus::Available {
            return Err(LibraryError::conflict(
                format!("document {} is already reserved or lent", code).as_str(),
                Some(entry.status.to_string())));
        }
        Ok(entry)
    }
}

fn not_registered(code: &str) -> LibraryError {
    LibraryError::not_found(format!("document {} does not exist in the catalog", code).as_str())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::catalog::domain::model::{Catalog, CatalogEntry, ReservationChannel};
    use crate::core::domain::ReturnPolicy;
    use crate::core::library::{LendingStatus, LibraryError};
    use crate::documents::domain::model::DocumentRecord;
    use crate::documents::domain::Reservable;
    use crate::utils::date::epoch_sentinel;

    fn book(code: &str) -> DocumentRecord {
        DocumentRecord::book(code, "8d-121", "Le Petit Prince", "Saint-Exupery")
    }

    fn held_entry(code: &str, status: LendingStatus) -> CatalogEntry {
        let mut doc = book(code);
        doc.begin_loan("usager123").expect("should lend");
        CatalogEntry { document: doc, status, version: 1 }
    }

    fn assert_consistent(catalog: &Catalog) {
        for (code, entry) in catalog.query_all() {
            assert!(entry.is_consistent(), "entry {} is {} with held={} awaiting={}", code, entry.status,
                    entry.document.is_currently_held(), entry.document.is_awaiting_verification());
        }
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_add() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        let res = catalog.add(book("22222"));
        assert!(matches!(res, Err(LibraryError::AlreadyExists { .. })));
        assert_eq!(1, catalog.len());
        assert_eq!(LendingStatus::Available, catalog.status("22222").expect("should exist"));
    }

    #[tokio::test]
    async fn test_should_reject_blank_code_on_add() {
        let mut catalog = Catalog::default();
        assert!(matches!(catalog.add(book("")), Err(LibraryError::Validation { .. })));
        assert!(matches!(catalog.add(book("   ")), Err(LibraryError::Validation { .. })));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_held_document_on_add() {
        let mut catalog = Catalog::default();
        let mut doc = book("22222");
        doc.begin_loan("usager123").expect("should lend");
        assert!(matches!(catalog.add(doc), Err(LibraryError::Conflict { .. })));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_should_lend_once() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        assert_eq!(LendingStatus::Available, catalog.status("22222").expect("should exist"));

        catalog.lend("usager123", "22222").expect("should lend");
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::NotReturned, entry.status);
        assert!(entry.document.is_currently_held());
        assert_eq!(Some("usager123"), entry.document.holder_id());

        let res = catalog.lend("usager123", "22222");
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(LendingStatus::NotReturned, catalog.status("22222").expect("should exist"));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_report_missing_documents() {
        let mut catalog = Catalog::default();
        assert!(!catalog.exists("ghost"));
        assert!(matches!(catalog.remove("ghost"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.lend("p", "ghost"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.place_on_hold("ghost", "p"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.mark_unreturned("ghost"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.end_loan("p", "ghost"), Err(LibraryError::NotFound { .. })));
        assert!(matches!(catalog.status("ghost"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_remove_document() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        catalog.lend("usager123", "22222").expect("should lend");
        catalog.remove("22222").expect("removal only needs existence");
        assert!(!catalog.exists("22222"));
        assert!(matches!(catalog.remove("22222"), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_return_snapshot() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        let mut snapshot = catalog.query_all();
        snapshot.clear();
        assert!(catalog.exists("22222"));
        assert_eq!(1, catalog.query_all().len());
    }

    #[tokio::test]
    async fn test_should_place_on_hold() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        catalog.place_on_hold("22222", "usager123").expect("should hold");
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::AwaitingVerification, entry.status);
        assert!(entry.document.is_awaiting_verification());
        assert!(!entry.document.is_currently_held());

        assert!(matches!(catalog.place_on_hold("22222", "other"), Err(LibraryError::Conflict { .. })));
        assert!(matches!(catalog.lend("other", "22222"), Err(LibraryError::Conflict { .. })));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_mark_unreturned() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        catalog.mark_unreturned("22222").expect("available documents are left alone");
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::Available, entry.status);
        assert_eq!(0, entry.version);
        assert!(entry.document.is_free());

        catalog.place_on_hold("22222", "usager123").expect("should hold");
        catalog.mark_unreturned("22222").expect("should mark");
        assert_eq!(LendingStatus::NotReturned, catalog.status("22222").expect("should exist"));
        let version = catalog.entry("22222").expect("should exist").version;

        catalog.mark_unreturned("22222").expect("marking twice is silent");
        assert_eq!(LendingStatus::NotReturned, catalog.status("22222").expect("should exist"));
        assert_eq!(version, catalog.entry("22222").expect("should exist").version);
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_leave_on_hold_entries_alone() {
        let mut catalog = Catalog::restore(ReturnPolicy::OnHoldOnly,
                                           vec![held_entry("22222", LendingStatus::OnHold)]).expect("should restore");
        catalog.mark_unreturned("22222").expect("no-op success");
        assert_eq!(LendingStatus::OnHold, catalog.status("22222").expect("should exist"));
    }

    #[tokio::test]
    async fn test_should_end_loan_from_on_hold() {
        let mut catalog = Catalog::restore(ReturnPolicy::OnHoldOnly,
                                           vec![held_entry("22222", LendingStatus::OnHold)]).expect("should restore");
        catalog.end_loan("usager123", "22222").expect("should return");
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::Available, entry.status);
        assert!(!entry.document.is_currently_held());
        assert_eq!((epoch_sentinel(), epoch_sentinel()), entry.document.hold_window());
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_not_end_loan_from_not_returned_by_default() {
        let mut catalog = Catalog::default();
        catalog.add(book("22222")).expect("should add");
        catalog.lend("usager123", "22222").expect("should lend");
        let res = catalog.end_loan("usager123", "22222");
        assert!(matches!(res, Err(LibraryError::Conflict { reason_code: Some(ref s), .. }) if s == "NotReturned"));
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::NotReturned, entry.status);
        assert!(entry.document.is_currently_held());
    }

    #[tokio::test]
    async fn test_should_round_trip_with_outstanding_loans_policy() {
        let mut catalog = Catalog::new(ReturnPolicy::OutstandingLoans);
        catalog.add(book("22222")).expect("should add");
        catalog.lend("usager123", "22222").expect("should lend");
        catalog.end_loan("usager123", "22222").expect("should return");
        let entry = catalog.entry("22222").expect("should exist");
        assert_eq!(LendingStatus::Available, entry.status);
        assert!(!entry.document.is_currently_held());
        assert_eq!((epoch_sentinel(), epoch_sentinel()), entry.document.hold_window());
        assert_eq!(Some("usager123"), entry.document.returned_by());
        catalog.lend("other", "22222").expect("should lend again");
    }

    #[tokio::test]
    async fn test_should_fail_return_of_unverified_hold() {
        let mut catalog = Catalog::new(ReturnPolicy::OutstandingLoans);
        catalog.add(book("22222")).expect("should add");
        catalog.place_on_hold("22222", "usager123").expect("should hold");
        catalog.mark_unreturned("22222").expect("should mark");
        let res = catalog.end_loan("usager123", "22222");
        assert!(matches!(res, Err(LibraryError::NotHeld { .. })));
        assert_eq!(LendingStatus::NotReturned, catalog.status("22222").expect("should exist"));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_reserve_through_channels() {
        let mut catalog = Catalog::default();
        catalog.add(book("A1").with_on_site_pickup(true)).expect("should add");
        catalog.add(book("A2")).expect("should add");
        catalog.add(book("A3").with_online_reservation(true)).expect("should add");
        catalog.reserve("p1", "A1", ReservationChannel::OnSite).expect("should reserve on site");
        catalog.reserve("p2", "A2", ReservationChannel::Online).expect("free documents reserve online");
        catalog.reserve("p3", "A3", ReservationChannel::Online).expect("should reserve online");
        for code in ["A1", "A2", "A3"] {
            assert_eq!(LendingStatus::NotReturned, catalog.status(code).expect("should exist"));
        }
        assert!(matches!(catalog.reserve("p4", "A3", ReservationChannel::Online), Err(LibraryError::Conflict { .. })));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_restore_entries() {
        let periodical = DocumentRecord::periodical("JOU123", "Salle de presse", "Journal quotidien",
                                                    NaiveDate::from_ymd_opt(2024, 9, 24).expect("valid date"));
        let entries = vec![CatalogEntry::new(periodical), held_entry("22222", LendingStatus::NotReturned)];
        let catalog = Catalog::restore(ReturnPolicy::OnHoldOnly, entries).expect("should restore");
        assert_eq!(2, catalog.len());
        assert_eq!(LendingStatus::NotReturned, catalog.status("22222").expect("should exist"));
    }

    #[tokio::test]
    async fn test_should_reject_inconsistent_restore() {
        let res = Catalog::restore(ReturnPolicy::OnHoldOnly, vec![held_entry("22222", LendingStatus::Available)]);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = Catalog::restore(ReturnPolicy::OnHoldOnly, vec![CatalogEntry::new(book("1")), CatalogEntry::new(book("1"))]);
        assert!(matches!(res, Err(LibraryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_should_stay_consistent_across_operations() {
        for policy in [ReturnPolicy::OnHoldOnly, ReturnPolicy::OutstandingLoans] {
            let mut catalog = Catalog::new(policy);
            for code in ["A", "B", "C"] {
                catalog.add(book(code)).expect("should add");
            }
            let steps: Vec<Box<dyn Fn(&mut Catalog, &str)>> = vec![
                Box::new(|c: &mut Catalog, code: &str| { let _ = c.lend("p1", code); }),
                Box::new(|c: &mut Catalog, code: &str| { let _ = c.place_on_hold(code, "p2"); }),
                Box::new(|c: &mut Catalog, code: &str| { let _ = c.mark_unreturned(code); }),
                Box::new(|c: &mut Catalog, code: &str| { let _ = c.end_loan("p1", code); }),
                Box::new(|c: &mut Catalog, code: &str| { let _ = c.reserve("p3", code, ReservationChannel::Online); }),
            ];
            for round in 0..4 {
                for (i, code) in ["A", "B", "C"].iter().enumerate() {
                    for (j, step) in steps.iter().enumerate() {
                        if (i + j + round) % 2 == 0 {
                            step(&mut catalog, *code);
                            assert_consistent(&catalog);
                        }
                    }
                }
            }
        }
    }
}
