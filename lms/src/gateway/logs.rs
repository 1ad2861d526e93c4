use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber.
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let metadata = serde_json::to_string(&event.metadata)?;
        info!(event_id = %event.event_id, name = %event.name, group = %event.group,
            key = %event.key, kind = ?event.kind, metadata = %metadata, "domain event");
        Ok(())
    }
}
