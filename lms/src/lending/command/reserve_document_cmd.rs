use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::model::ReservationChannel;
use crate::core::command::{Command, CommandError};
use crate::lending::command::LendingCommandResponse;
use crate::lending::domain::LendingService;
use crate::persons::dto::PersonDto;

pub struct ReserveDocumentCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ReserveDocumentCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReserveDocumentCommandRequest {
    pub actor: PersonDto,
    pub code: String,
    pub patron_id: String,
    pub channel: ReservationChannel,
}

impl ReserveDocumentCommandRequest {
    pub fn new(actor: PersonDto, code: &str, patron_id: &str, channel: ReservationChannel) -> Self {
        Self {
            actor,
            code: code.to_string(),
            patron_id: patron_id.to_string(),
            channel,
        }
    }
}

#[async_trait]
impl Command<ReserveDocumentCommandRequest, LendingCommandResponse> for ReserveDocumentCommand {
    async fn execute(&self, req: ReserveDocumentCommandRequest) -> Result<LendingCommandResponse, CommandError> {
        self.lending_service.reserve(&req.actor, req.code.as_str(), req.patron_id.as_str(), req.channel)
            .await.map_err(CommandError::from).map(LendingCommandResponse::new)
    }
}
