use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::lending::command::{LendingCommandRequest, LendingCommandResponse};
use crate::lending::domain::LendingService;

pub struct ConfirmReservationCommand {
    lending_service: Arc<dyn LendingService>,
}

impl ConfirmReservationCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[async_trait]
impl Command<LendingCommandRequest, LendingCommandResponse> for ConfirmReservationCommand {
    async fn execute(&self, req: LendingCommandRequest) -> Result<LendingCommandResponse, CommandError> {
        self.lending_service.confirm_reservation(&req.actor, req.code.as_str(), req.patron_id.as_str())
            .await.map_err(CommandError::from).map(LendingCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::core::command::{Command, CommandError};
    use crate::core::controller::AppState;
    use crate::core::domain::{Configuration, ReturnPolicy};
    use crate::core::library::LendingStatus;
    use crate::documents::domain::model::DocumentRecord;
    use crate::lending::command::LendingCommandRequest;
    use crate::lending::command::confirm_reservation_cmd::ConfirmReservationCommand;
    use crate::persons::dto::PersonDto;

    lazy_static! {
        static ref SUT_STATE : AsyncOnce<AppState> = AsyncOnce::new(async {
                let config = Configuration::new("test").with_return_policy(ReturnPolicy::OnHoldOnly);
                AppState::build(config).await.expect("should build state")
            });
    }

    #[tokio::test]
    async fn test_should_run_confirm_reservation() {
        let state = SUT_STATE.get().await;
        let cmd = ConfirmReservationCommand::new(state.lending_service.clone());
        let _ = state.catalog_service.add_document(
            DocumentRecord::book("CONF-1", "8d-121", "Le Petit Prince", "Saint-Exupery"))
            .await.expect("should add document");

        let res = cmd.execute(LendingCommandRequest::new(PersonDto::patron("usager123"), "CONF-1", "usager123")).await;
        assert!(matches!(res, Err(CommandError::Access { .. })));

        let res = cmd.execute(LendingCommandRequest::new(PersonDto::staff("bibliothecaire"), "CONF-1", "usager123"))
            .await.expect("should confirm");
        assert_eq!(LendingStatus::NotReturned, res.receipt.document.status);
    }
}
