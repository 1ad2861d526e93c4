use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::lending::command::{LendingCommandRequest, LendingCommandResponse};
use crate::lending::domain::LendingService;

pub struct RecordReturnCommand {
    lending_service: Arc<dyn LendingService>,
}

impl RecordReturnCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[async_trait]
impl Command<LendingCommandRequest, LendingCommandResponse> for RecordReturnCommand {
    async fn execute(&self, req: LendingCommandRequest) -> Result<LendingCommandResponse, CommandError> {
        self.lending_service.record_return(&req.actor, req.code.as_str(), req.patron_id.as_str())
            .await.map_err(CommandError::from).map(LendingCommandResponse::new)
    }
}
