//! ==============================================================================
//! api.rs - API client for the record service
//! ==============================================================================
//!
//! one function per remote operation. every call is a single request with
//! no retry, timeout or cancellation. response bodies of add/delete are
//! ignored; only the status decides success.

use gloo_net::http::{Request, Response};
use record_shared::{
    parse_record_list, AddRecordForm, ClientError, DeleteRecordForm, NewRecordInput, Record,
    RecordId, ADD_PATH, DELETE_PATH, FORM_CONTENT_TYPE, RECORDS_PATH,
};

// Base URL for the record service, overridable at build time
pub const RECORD_SERVICE_BASE: &str = match option_env!("RECORD_SERVICE_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", RECORD_SERVICE_BASE, path)
}

// ==============================================================================
// API functions
// ==============================================================================

/// Create a record
pub async fn add_record(input: &NewRecordInput) -> Result<(), ClientError> {
    let body = AddRecordForm::new(input).encode()?;
    leptos::logging::log!("POST {} ({} bytes)", ADD_PATH, body.len());

    let response = post_form(ADD_PATH, body).await?;
    ClientError::check_status(response.status())
}

/// Fetch every record
pub async fn list_records() -> Result<Vec<Record>, ClientError> {
    leptos::logging::log!("GET {}", RECORDS_PATH);

    let response = Request::get(&endpoint(RECORDS_PATH))
        .send()
        .await
        .map_err(|e| ClientError::network(e.to_string()))?;
    ClientError::check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::parse(e.to_string()))?;
    parse_record_list(&body)
}

/// Delete a record by id
pub async fn delete_record(id: RecordId) -> Result<(), ClientError> {
    leptos::logging::log!("POST {} id={}", DELETE_PATH, id);

    let body = DeleteRecordForm::new(id).encode()?;
    let response = post_form(DELETE_PATH, body).await?;
    ClientError::check_status(response.status())
}

async fn post_form(path: &str, body: String) -> Result<Response, ClientError> {
    Request::post(&endpoint(path))
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(body)
        .map_err(|e| ClientError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::network(e.to_string()))
}
