use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::add_document_cmd::{AddDocumentCommand, AddDocumentCommandRequest, AddDocumentCommandResponse};
use crate::catalog::command::get_document_cmd::{GetDocumentCommand, GetDocumentCommandRequest, GetDocumentCommandResponse};
use crate::catalog::command::list_documents_cmd::{ListDocumentsCommand, ListDocumentsCommandRequest, ListDocumentsCommandResponse};
use crate::catalog::command::remove_document_cmd::{RemoveDocumentCommand, RemoveDocumentCommandRequest, RemoveDocumentCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn add_document(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddDocumentCommandResponse>, ServerError> {
    let req: AddDocumentCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddDocumentCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn list_documents(
    State(state): State<AppState>,
    Query(req): Query<ListDocumentsCommandRequest>) -> Result<Json<ListDocumentsCommandResponse>, ServerError> {
    let res = ListDocumentsCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_document(
    State(state): State<AppState>,
    Path(code): Path<String>) -> Result<Json<GetDocumentCommandResponse>, ServerError> {
    let req = GetDocumentCommandRequest { code };
    let res = GetDocumentCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_document(
    State(state): State<AppState>,
    Path(code): Path<String>) -> Result<Json<RemoveDocumentCommandResponse>, ServerError> {
    let req = RemoveDocumentCommandRequest { code };
    let res = RemoveDocumentCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}
