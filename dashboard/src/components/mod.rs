//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod notice_banner;
mod record_form;
mod record_list;

pub use header::Header;
pub use notice_banner::NoticeBanner;
pub use record_form::RecordForm;
pub use record_list::RecordList;
