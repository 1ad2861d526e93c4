use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult, Receipt};
use crate::documents::domain::Reservable;
use crate::utils::date::{epoch_sentinel, hold_window_from, serializer, today};

// DocumentDetails carries the descriptive fields of each document variant; they never change
// after creation and play no part in lending.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DocumentDetails {
    Book {
        title: String,
        author: String,
    },
    Disc {
        title: String,
        author: String,
    },
    Periodical {
        title: String,
        published_on: NaiveDate,
    },
}

impl DocumentDetails {
    pub fn title(&self) -> &str {
        match self {
            DocumentDetails::Book { title, .. } => title,
            DocumentDetails::Disc { title, .. } => title,
            DocumentDetails::Periodical { title, .. } => title,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentDetails::Book { .. } => DocumentKind::Book,
            DocumentDetails::Disc { .. } => DocumentKind::Disc,
            DocumentDetails::Periodical { .. } => DocumentKind::Periodical,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DocumentKind {
    Book,
    Disc,
    Periodical,
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DocumentKind::Book => write!(f, "Book"),
            DocumentKind::Disc => write!(f, "Disc"),
            DocumentKind::Periodical => write!(f, "Periodical"),
        }
    }
}

/// A single lendable document together with its reservation metadata.
///
/// Identity and descriptive fields are fixed at construction. The hold metadata is only
/// changed through the `begin_*` and [`DocumentRecord::return_item`] operations; once the
/// record is added to a catalog those are driven by the catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    code: String,
    location: String,
    allows_on_site_pickup: bool,
    allows_online_reservation: bool,
    details: DocumentDetails,
    holder_id: Option<String>,
    returned_by: Option<String>,
    is_currently_held: bool,
    is_awaiting_verification: bool,
    hold_start: NaiveDate,
    hold_end: NaiveDate,
    #[serde(with = "serializer")]
    created_at: NaiveDateTime,
}

impl DocumentRecord {
    pub fn new(code: &str, location: &str, details: DocumentDetails) -> Self {
        Self {
            code: code.to_string(),
            location: location.to_string(),
            allows_on_site_pickup: false,
            allows_online_reservation: false,
            details,
            holder_id: None,
            returned_by: None,
            is_currently_held: false,
            is_awaiting_verification: false,
            hold_start: epoch_sentinel(),
            hold_end: epoch_sentinel(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn book(code: &str, location: &str, title: &str, author: &str) -> Self {
        Self::new(code, location, DocumentDetails::Book {
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    pub fn disc(code: &str, location: &str, title: &str, author: &str) -> Self {
        Self::new(code, location, DocumentDetails::Disc {
            title: title.to_string(),
            author: author.to_string(),
        })
    }

    pub fn periodical(code: &str, location: &str, title: &str, published_on: NaiveDate) -> Self {
        Self::new(code, location, DocumentDetails::Periodical {
            title: title.to_string(),
            published_on,
        })
    }

    pub fn with_on_site_pickup(mut self, allowed: bool) -> Self {
        self.allows_on_site_pickup = allowed;
        self
    }

    pub fn with_online_reservation(mut self, allowed: bool) -> Self {
        self.allows_online_reservation = allowed;
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn details(&self) -> &DocumentDetails {
        &self.details
    }

    pub fn allows_on_site_pickup(&self) -> bool {
        self.allows_on_site_pickup
    }

    pub fn allows_online_reservation(&self) -> bool {
        self.allows_online_reservation
    }

    pub fn returned_by(&self) -> Option<&str> {
        self.returned_by.as_deref()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn begin_loan(&mut self, patron_id: &str) -> LibraryResult<Receipt> {
        self.ensure_not_held()?;
        self.start_hold(patron_id, true, false);
        Ok(Receipt::ok(format!("document {} is lent to {}", self.code, patron_id).as_str()))
    }

    // walk-in pickup, same rules as a loan
    pub fn begin_on_site_hold(&mut self, patron_id: &str) -> LibraryResult<Receipt> {
        self.ensure_not_held()?;
        self.start_hold(patron_id, true, false);
        Ok(Receipt::ok(format!("document {} is reserved on site for {}", self.code, patron_id).as_str()))
    }

    // Rejects only when online reservation is disabled *and* the document is already held,
    // so a free document can be reserved online even when the flag is off.
    pub fn begin_online_hold(&mut self, patron_id: &str) -> LibraryResult<Receipt> {
        if !self.allows_online_reservation && self.is_currently_held {
            return Err(LibraryError::not_allowed_online(
                format!("document {} cannot be reserved online", self.code).as_str()));
        }
        self.start_hold(patron_id, true, false);
        Ok(Receipt::ok(format!("document {} is reserved online for {}", self.code, patron_id).as_str()))
    }

    // pending verification: the window starts but the document is not held yet
    pub fn begin_verification_hold(&mut self, patron_id: &str) -> LibraryResult<Receipt> {
        self.ensure_not_held()?;
        self.start_hold(patron_id, false, true);
        Ok(Receipt::ok(format!("document {} is awaiting verification for {}", self.code, patron_id).as_str()))
    }

    pub fn return_item(&mut self, patron_id: &str) -> LibraryResult<Receipt> {
        if !self.is_currently_held {
            return Err(LibraryError::not_held(
                format!("document {} is not held", self.code).as_str()));
        }
        self.holder_id = None;
        self.returned_by = Some(patron_id.to_string());
        self.is_currently_held = false;
        self.is_awaiting_verification = false;
        self.hold_start = epoch_sentinel();
        self.hold_end = epoch_sentinel();
        debug!(code = %self.code, patron_id, "document returned");
        Ok(Receipt::ok(format!("document {} has been returned", self.code).as_str()))
    }

    // a pending verification blocks a second hold as much as an active one
    fn ensure_not_held(&self) -> LibraryResult<()> {
        if !self.is_free() {
            return Err(LibraryError::already_held(
                format!("document {} is already held", self.code).as_str()));
        }
        Ok(())
    }

    fn start_hold(&mut self, patron_id: &str, held: bool, awaiting: bool) {
        let (start, end) = hold_window_from(today());
        self.holder_id = Some(patron_id.to_string());
        self.is_currently_held = held;
        self.is_awaiting_verification = awaiting;
        self.hold_start = start;
        self.hold_end = end;
        debug!(code = %self.code, patron_id, held, awaiting, %end, "hold started");
    }
}

impl Reservable for DocumentRecord {
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
