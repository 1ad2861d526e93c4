use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tracing::info;
use lending_desk::catalog::controller::{add_document, find_document, list_documents, remove_document};
use lending_desk::core::controller::AppState;
use lending_desk::core::domain::Configuration;
use lending_desk::core::library::LibraryError;
use lending_desk::lending::controller::{confirm_reservation, mark_unreturned, record_return, request_hold, reserve_document};
use lending_desk::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::load()?;
    setup_tracing(config.log_format);

    let addr: SocketAddr = config.bind_address.parse().map_err(|_| LibraryError::validation(
        format!("invalid bind address {}", config.bind_address).as_str(), None))?;
    info!(branch = %config.branch_id, store = %config.store, policy = %config.return_policy, "starting lending desk");
    let state = AppState::build(config).await?;

    let app = Router::new()
        .route("/catalog", post(add_document).get(list_documents))
        .route("/catalog/:code",
               get(find_document).delete(remove_document))
        .route("/lending/hold", post(request_hold))
        .route("/lending/confirm", post(confirm_reservation))
        .route("/lending/return", post(record_return))
        .route("/lending/unreturned", post(mark_unreturned))
        .route("/lending/reserve", post(reserve_document))
        .with_state(state);

    info!(address = %addr, "listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| LibraryError::runtime(format!("server failed: {}", err).as_str(), None))
}
