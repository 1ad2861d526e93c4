//! Role-aware lending rules applied on top of the catalog.
//!
//! Each function checks the actor and the current status, then delegates the transition itself
//! to the [`Catalog`]. They run while the caller holds the catalog lock, so the check and the
//! transition happen atomically.

use crate::catalog::domain::model::{Catalog, ReservationChannel};
use crate::core::library::{LendingStatus, LibraryError, LibraryResult, Receipt, Role};
use crate::persons::Actor;

pub fn request_hold(catalog: &mut Catalog, code: &str, actor: &dyn Actor, patron_id: &str) -> LibraryResult<Receipt> {
    let status = catalog.status(code)?;
    match actor.role() {
        Role::Patron => catalog.lend(patron_id, code),
        Role::Staff if status == LendingStatus::Available => {
            Ok(Receipt::ok(format!("document {} is available, no hold is needed", code).as_str()))
        }
        Role::Staff => catalog.place_on_hold(code, patron_id),
    }
}

pub fn confirm_reservation(catalog: &mut Catalog, code: &str, actor: &dyn Actor, patron_id: &str) -> LibraryResult<Receipt> {
    ensure_staff(actor, "confirm a reservation")?;
    ensure_status(catalog, code, LendingStatus::Available, "is already reserved or lent")?;
    catalog.lend(patron_id, code)
}

pub fn record_return(catalog: &mut Catalog, code: &str, actor: &dyn Actor, patron_id: &str) -> LibraryResult<Receipt> {
    ensure_staff(actor, "record a return")?;
    ensure_status(catalog, code, LendingStatus::NotReturned, "is not currently lent")?;
    catalog.end_loan(patron_id, code)
}

pub fn mark_unreturned(catalog: &mut Catalog, code: &str, actor: &dyn Actor) -> LibraryResult<Receipt> {
    ensure_staff(actor, "mark a document as not returned")?;
    catalog.mark_unreturned(code)
}

pub fn reserve(catalog: &mut Catalog, code: &str, _actor: &dyn Actor, patron_id: &str,
               channel: ReservationChannel) -> LibraryResult<Receipt> {
    catalog.reserve(patron_id, code, channel)
}

fn ensure_staff(actor: &dyn Actor, action: &str) -> LibraryResult<()> {
    if actor.is_staff() {
        return Ok(());
    }
    Err(LibraryError::forbidden(
        format!("{} {} is not allowed to {}", actor.role(), actor.id(), action).as_str(),
        Some(Role::Staff.to_string())))
}

fn ensure_status(catalog: &Catalog, code: &str, expected: LendingStatus, failure: &str) -> LibraryResult<()> {
    let status = catalog.status(code)?;
    if status != expected {
        return Err(LibraryError::conflict(
            format!("document {} {}", code, failure).as_str(), Some(status.to_string())));
    }
    Ok(())
}
