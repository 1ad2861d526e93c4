pub mod add_document_cmd;
pub mod get_document_cmd;
pub mod list_documents_cmd;
pub mod remove_document_cmd;
