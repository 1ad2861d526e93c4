use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::LendingStatus;
use crate::utils::date::serializer;

pub const CATALOG_GROUP: &str = "catalog";

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Transitioned,
    Deleted,
}

// DomainEvent abstracts domain event for catalog changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Added, HashMap::new(), json))
    }

    // transitioned records a lending status change, `from` and `to` land in the metadata
    pub fn transitioned<T: Serialize>(name: &str, key: &str, from: LendingStatus, to: LendingStatus,
                                      patron_id: Option<&str>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        let mut metadata = HashMap::from([
            ("from".to_string(), from.to_string()),
            ("to".to_string(), to.to_string()),
        ]);
        if let Some(patron_id) = patron_id {
            metadata.insert("patron_id".to_string(), patron_id.to_string());
        }
        Ok(Self::build(name, key, DomainEventType::Transitioned, metadata, json))
    }

    pub fn deleted<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Deleted, HashMap::new(), json))
    }

    fn build(name: &str, key: &str, kind: DomainEventType, metadata: HashMap<String, String>, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: CATALOG_GROUP.to_string(),
            key: key.to_string(),
            kind,
            metadata,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        }
    }
}
