use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::model::CatalogEntry;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::documents::domain::Reservable;

// CatalogTable is the row storage shared by the catalog repositories, ordered by code so
// that the page token can simply be the last code of the previous page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CatalogTable {
    created_count: u64,
    entries: BTreeMap<String, CatalogEntry>,
}

impl CatalogTable {
    pub(crate) fn created_count(&self) -> u64 {
        self.created_count
    }

    pub(crate) fn create(&mut self, entity: &CatalogEntry) -> LibraryResult<usize> {
        let code = entity.id();
        if self.entries.contains_key(&code) {
            return Err(LibraryError::already_exists(
                format!("document {} is already stored", code).as_str()));
        }
        self.entries.insert(code, entity.clone());
        self.created_count += 1;
        Ok(1)
    }

    pub(crate) fn update(&mut self, entity: &CatalogEntry) -> LibraryResult<usize> {
        let code = entity.id();
        let stored = self.entries.get_mut(&code).ok_or_else(|| LibraryError::not_found(
            format!("document {} is not stored", code).as_str()))?;
        if entity.version() <= stored.version() {
            return Err(LibraryError::conflict(
                format!("document {} was updated concurrently, stored version {} and new version {}",
                        code, stored.version(), entity.version()).as_str(),
                Some("StaleVersion".to_string())));
        }
        *stored = entity.clone();
        Ok(1)
    }

    pub(crate) fn get(&self, id: &str) -> LibraryResult<CatalogEntry> {
        self.entries.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("document {} is not stored", id).as_str()))
    }

    pub(crate) fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        self.entries.remove(id).map(|_| 1).ok_or_else(|| LibraryError::not_found(
            format!("document {} is not stored", id).as_str()))
    }

    // supported predicate keys are status, location, kind and holder_id
    pub(crate) fn query(&self, predicate: &HashMap<String, String>,
                        page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CatalogEntry>> {
        let page_size = page_size.max(1);
        let lower = match page {
            Some(token) => Bound::Excluded(token.to_string()),
            None => Bound::Unbounded,
        };
        let mut matching = self.entries
            .range((lower, Bound::Unbounded))
            .map(|(_, entry)| entry)
            .filter(|entry| matches_predicate(entry, predicate));
        let records: Vec<CatalogEntry> = matching.by_ref().take(page_size).cloned().collect();
        let next_page = if matching.next().is_some() {
            records.last().map(|e| e.id())
        } else {
            None
        };
        Ok(PaginatedResult::new(page, page_size, next_page, records))
    }
}

fn matches_predicate(entry: &CatalogEntry, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(key, value)| match key.as_str() {
        "status" => entry.status.to_string() == *value,
        "location" => entry.document.location() == value.as_str(),
        "kind" => entry.document.details().kind().to_string() == *value,
        "holder_id" => entry.document.holder_id() == Some(value.as_str()),
        _ => false,
    })
}
