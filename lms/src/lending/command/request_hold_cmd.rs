use std::sync::Arc;
use async_trait::async_trait;
use crate::core::command::{Command, CommandError};
use crate::lending::command::{LendingCommandRequest, LendingCommandResponse};
use crate::lending::domain::LendingService;

pub struct RequestHoldCommand {
    lending_service: Arc<dyn LendingService>,
}

impl RequestHoldCommand {
    pub fn new(lending_service: Arc<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[async_trait]
impl Command<LendingCommandRequest, LendingCommandResponse> for RequestHoldCommand {
    async fn execute(&self, req: LendingCommandRequest) -> Result<LendingCommandResponse, CommandError> {
        self.lending_service.request_hold(&req.actor, req.code.as_str(), req.patron_id.as_str())
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
    use crate::lending::command::request_hold_cmd::RequestHoldCommand;
    use crate::persons::dto::PersonDto;

    lazy_static! {
        static ref SUT_STATE : AsyncOnce<AppState> = AsyncOnce::new(async {
                let config = Configuration::new("test").with_return_policy(ReturnPolicy::OnHoldOnly);
                AppState::build(config).await.expect("should build state")
            });
    }

    #[tokio::test]
    async fn test_should_run_request_hold() {
        let state = SUT_STATE.get().await;
        let cmd = RequestHoldCommand::new(state.lending_service.clone());
        let _ = state.catalog_service.add_document(
            DocumentRecord::disc("HOLD-1", "Salle multimedia", "Film d'action", "John Doe"))
            .await.expect("should add document");

        let res = cmd.execute(LendingCommandRequest::new(PersonDto::patron("usager123"), "HOLD-1", "usager123"))
            .await.expect("patron should borrow");
        assert_eq!(200, res.receipt.status);
        assert_eq!(LendingStatus::NotReturned, res.receipt.document.status);

        let res = cmd.execute(LendingCommandRequest::new(PersonDto::staff("bibliothecaire"), "HOLD-1", "other")).await;
        assert!(matches!(res, Err(CommandError::Lending { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_hold_on_missing_document() {
        let state = SUT_STATE.get().await;
        let cmd = RequestHoldCommand::new(state.lending_service.clone());
        let res = cmd.execute(LendingCommandRequest::new(PersonDto::patron("usager123"), "missing", "usager123")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
