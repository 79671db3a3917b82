//! ==============================================================================
//! lib.rs - shared types for the patient records dashboard
//! ==============================================================================
//!
//! purpose:
//!     platform-independent core of the records client. everything that does
//!     not need a browser lives here so it can be unit tested natively.
//!
//! relationships:
//!     - used by: dashboard (api.rs for request bodies and list parsing,
//!       components for validation, rendering and notices)
//!
//! modules:
//!     - record: Record as served by GET /records, list parsing
//!     - input: typed form input and validation
//!     - form: form-urlencoded bodies for POST /add and POST /delete
//!     - view: render model for the display region
//!     - error: client error taxonomy
//!     - notice: user-facing messages after an operation
//!
//! ==============================================================================

pub mod error;
pub mod form;
pub mod input;
pub mod notice;
pub mod record;
pub mod view;

pub use error::{ClientError, ValidationError};
pub use form::{AddRecordForm, DeleteRecordForm, FORM_CONTENT_TYPE};
pub use input::{NewRecordInput, RawRecordForm};
pub use notice::{Completion, Notice, NoticeKind, Operation};
pub use record::{parse_record_list, Age, Record, RecordId};
pub use view::{RecordEntry, RecordView, EMPTY_MESSAGE};

// ==============================================================================
// record service endpoints
// ==============================================================================

/// create a record (form-encoded body)
pub const ADD_PATH: &str = "/add";
/// list all records (json array)
pub const RECORDS_PATH: &str = "/records";
/// delete a record by id (form-encoded body)
pub const DELETE_PATH: &str = "/delete";
