use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::catalog::domain::model::CatalogEntry;
use crate::core::domain::Identifiable;
use crate::core::library::{LendingStatus, Receipt};
use crate::documents::domain::model::DocumentDetails;
use crate::documents::domain::Reservable;
use crate::utils::date::serializer;

// DocumentDto is a data transfer object for a catalog entry, the document flattened with its status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDto {
    pub code: String,
    pub version: i64,
    pub location: String,
    #[serde(flatten)]
    pub details: DocumentDetails,
    pub allows_on_site_pickup: bool,
    pub allows_online_reservation: bool,
    pub status: LendingStatus,
    pub holder_id: Option<String>,
    pub returned_by: Option<String>,
    pub is_currently_held: bool,
    pub is_awaiting_verification: bool,
    pub hold_start: NaiveDate,
    pub hold_end: NaiveDate,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl From<&CatalogEntry> for DocumentDto {
    fn from(other: &CatalogEntry) -> Self {
        let doc = &other.document;
        let (hold_start, hold_end) = doc.hold_window();
        Self {
            code: doc.code().to_string(),
            version: other.version,
            location: doc.location().to_string(),
            details: doc.details().clone(),
            allows_on_site_pickup: doc.allows_on_site_pickup(),
            allows_online_reservation: doc.allows_online_reservation(),
            status: other.status,
            holder_id: doc.holder_id().map(str::to_string),
            returned_by: doc.returned_by().map(str::to_string),
            is_currently_held: doc.is_currently_held(),
            is_awaiting_verification: doc.is_awaiting_verification(),
            hold_start,
            hold_end,
            created_at: doc.created_at(),
        }
    }
}

// DocumentReceipt is the success report of a catalog or lending operation along with the document it touched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReceipt {
    pub message: String,
    pub status: u16,
    pub document: DocumentDto,
}

impl DocumentReceipt {
    pub fn new(receipt: Receipt, document: DocumentDto) -> Self {
        Self {
            message: receipt.message,
            status: receipt.status,
            document,
        }
    }
}

impl Identifiable for DocumentDto {
    fn id(&self) -> String {
        self.code.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Reservable for DocumentDto {
    fn code(&self) -> &str {
        &self.code
    }

    fn holder_id(&self) -> Option<&str> {
        self.holder_id.as_deref()
    }

    fn is_currently_held(&self) -> bool {
        self.is_currently_held
    }

    fn is_awaiting_verification(&self) -> bool {
        self.is_awaiting_verification
    }

    fn hold_window(&self) -> (NaiveDate, NaiveDate) {
        (self.hold_start, self.hold_end)
    }
}
