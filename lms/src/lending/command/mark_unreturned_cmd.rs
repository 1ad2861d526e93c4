use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::lending::command::LendingCommandResponse;
use crate::lending::domain::LendingService;
use crate::persons::dto::PersonDto;

pub struct MarkUnreturnedCommand {
    lending_service: Arc<dyn LendingService>,
}

impl MarkUnreturnedCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkUnreturnedCommandRequest {
    pub actor: PersonDto,
    pub code: String,
}

impl MarkUnreturnedCommandRequest {
    pub fn new(actor: PersonDto, code: &str) -> Self {
        Self {
            actor,
            code: code.to_string(),
        }
    }
}

#[async_trait]
impl Command<MarkUnreturnedCommandRequest, LendingCommandResponse> for MarkUnreturnedCommand {
    async fn execute(&self, req: MarkUnreturnedCommandRequest) -> Result<LendingCommandResponse, CommandError> {
        self.lending_service.mark_unreturned(&req.actor, req.code.as_str())
            .await.map_err(CommandError::from).map(LendingCommandResponse::new)
    }
}
