use axum::{
    extract::State,
    response::Json,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::lending::command::{LendingCommandRequest, LendingCommandResponse};
use crate::lending::command::confirm_reservation_cmd::ConfirmReservationCommand;
use crate::lending::command::mark_unreturned_cmd::{MarkUnreturnedCommand, MarkUnreturnedCommandRequest};
use crate::lending::command::record_return_cmd::RecordReturnCommand;
use crate::lending::command::request_hold_cmd::RequestHoldCommand;
use crate::lending::command::reserve_document_cmd::{ReserveDocumentCommand, ReserveDocumentCommandRequest};

pub async fn request_hold(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendingCommandResponse>, ServerError> {
    let req: LendingCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = RequestHoldCommand::new(state.lending_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn confirm_reservation(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendingCommandResponse>, ServerError> {
    let req: LendingCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ConfirmReservationCommand::new(state.lending_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn record_return(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendingCommandResponse>, ServerError> {
    let req: LendingCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = RecordReturnCommand::new(state.lending_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn mark_unreturned(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendingCommandResponse>, ServerError> {
    let req: MarkUnreturnedCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = MarkUnreturnedCommand::new(state.lending_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn reserve_document(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendingCommandResponse>, ServerError> {
    let req: ReserveDocumentCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReserveDocumentCommand::new(state.lending_service).execute(req).await?;
    Ok(Json(res))
}
