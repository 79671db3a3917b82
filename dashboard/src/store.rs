//! ==============================================================================
//! store.rs - reactive state for the records page
//! ==============================================================================
//!
//! holds the two pieces of ui state: the display region and the notice
//! banner. operations are async so components can track their own loading
//! state around them.
//!
//! overlapping operations are not serialized; the display region shows
//! whichever list response resolved last.
//!
//! ==============================================================================

use leptos::prelude::*;
use record_shared::{
    ClientError, Completion, NewRecordInput, Notice, Operation, RecordId, RecordView,
};

use crate::api;

#[derive(Debug, Clone, Copy)]
pub struct RecordStore {
    /// `None` until the first successful list fetch
    pub view: RwSignal<Option<RecordView>>,
    /// latest operation outcome
    pub notice: RwSignal<Option<Notice>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    /// Fetch the list and rebuild the display region.
    ///
    /// On failure the display region is left as it was.
    async fn fetch(self) -> Result<(), ClientError> {
        let records = api::list_records().await.map_err(|e| {
            leptos::logging::warn!("list records failed: {}", e);
            e
        })?;
        self.view.set(Some(RecordView::render(&records)));
        Ok(())
    }

    /// Reload the list, reporting a failure in the notice banner.
    pub async fn refresh(self) {
        if let Err(e) = self.fetch().await {
            self.notice.set(Some(Notice::error(&e)));
        }
    }

    /// Create a record, notify, and refresh.
    pub async fn add(self, input: NewRecordInput) {
        let result = api::add_record(&input).await;
        if let Err(e) = &result {
            leptos::logging::warn!("add record failed: {}", e);
        }
        self.finish(Operation::Add.complete(&result)).await;
    }

    /// Delete a record, notify, and refresh.
    pub async fn delete(self, id: RecordId) {
        let result = api::delete_record(id).await;
        if let Err(e) = &result {
            leptos::logging::warn!("delete record {} failed: {}", id, e);
        }
        self.finish(Operation::Delete.complete(&result)).await;
    }

    async fn finish(self, done: Completion) {
        self.notice.set(Some(done.notice.clone()));
        if done.refresh {
            let fetched = self.fetch().await;
            self.notice.set(Some(done.after_refresh(&fetched)));
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
