//! Form-urlencoded request bodies.
//!
//! The service parses bodies positionally, so field order in these structs
//! is the wire order.

use serde::Serialize;

use crate::error::ClientError;
use crate::input::NewRecordInput;
use crate::record::RecordId;

/// content type for `POST /add` and `POST /delete`
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// body of `POST /add`
#[derive(Debug, Clone, Serialize)]
pub struct AddRecordForm<'a> {
    pub name: &'a str,
    pub age: u32,
    pub gender: &'a str,
    pub disease: &'a str,
}

/// body of `POST /delete`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteRecordForm {
    pub id: RecordId,
}

impl<'a> AddRecordForm<'a> {
    pub fn new(input: &'a NewRecordInput) -> Self {
        Self {
            name: &input.name,
            age: input.age,
            gender: &input.gender,
            disease: &input.disease,
        }
    }

    /// `name=..&age=..&gender=..&disease=..`
    pub fn encode(&self) -> Result<String, ClientError> {
        encode_form(self)
    }
}

impl DeleteRecordForm {
    pub fn new(id: RecordId) -> Self {
        Self { id }
    }

    /// `id=..`
    pub fn encode(&self) -> Result<String, ClientError> {
        encode_form(self)
    }
}

fn encode_form<T: Serialize>(form: &T) -> Result<String, ClientError> {
    Ok(serde_urlencoded::to_string(form)?)
}
