use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::{create_catalog_service, create_shared_catalog};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::lending::domain::LendingService;
use crate::lending::factory::create_lending_service;

// AppState is shared by every route; both services sit on top of the same locked catalog.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogService>,
    pub lending_service: Arc<dyn LendingService>,
}

impl AppState {
    pub async fn build(config: Configuration) -> LibraryResult<AppState> {
        let publisher = create_publisher(GatewayPublisherVia::Logs);
        let shared = create_shared_catalog(&config, publisher).await?;
        Ok(AppState {
            catalog_service: Arc::from(create_catalog_service(&config, shared.clone())),
            lending_service: Arc::from(create_lending_service(&config, shared)),
        })
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

// only a malformed request body is a 400, see json_to_server_error; every command failure,
// including a store that cannot encode or decode its rows, is a 500
impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, json_to_server_error, ServerError};
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (status, _) = ServerError::from(CommandError::NotFound { message: "missing".to_string() });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let (status, _) = ServerError::from(CommandError::Access { message: "staff only".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let (status, _) = ServerError::from(CommandError::from(LibraryError::serialization("corrupt store file")));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let parse_err = serde_json::from_str::<serde_json::Value>("{").expect_err("should not parse");
        let (status, _) = json_to_server_error(parse_err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::build(Configuration::new("test")).await.expect("should build state");
        let listing = state.catalog_service.list_documents(None).await.expect("should list");
        assert!(listing.is_empty());
    }
}
