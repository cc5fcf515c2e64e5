use std::sync::RwLock;

use tracing::{debug, warn};

use crate::app::{Intent, RoutePath};
use crate::model::DisplayBill;
use crate::service::{Deps, ViewError};
use crate::view::Page;

/// Explicit state of the file-preview overlay. Exactly one modal instance
/// exists; opening it for a second bill replaces the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modal {
    pub visible: bool,
    pub bill_id: Option<String>,
    /// Absent when the bill has no attached file; the modal then opens with
    /// an empty body rather than failing.
    pub file_url: Option<String>,
}

/// The bill-list view: fetch, format, sort, render, and the handlers for
/// its two user actions.
pub struct BillsView {
    deps: Deps,
    modal: RwLock<Modal>,
}

impl BillsView {
    pub fn new(deps: Deps) -> Self {
        Self {
            deps,
            modal: RwLock::new(Modal::default()),
        }
    }

    /// Fetch and project the bill list, most recent first.
    ///
    /// A record whose date cannot be formatted keeps its raw values (see
    /// [`DisplayBill::project`]); only a failed fetch aborts the list.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, ViewError> {
        let bills = self.deps.bills.list().await.map_err(ViewError::Fetch)?;
        let mut rows: Vec<DisplayBill> = bills.into_iter().map(DisplayBill::project).collect();
        // Stable sort: equal dates keep their fetch order.
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(count = rows.len(), "bill list fetched");
        Ok(rows)
    }

    pub fn handle_click_new_bill(&self) -> Intent {
        Intent::Navigate(RoutePath::NewBill)
    }

    pub fn handle_click_icon_eye(&self, bill: &DisplayBill) -> Intent {
        if bill.file_url.is_none() {
            warn!(id = %bill.id, "previewing a bill without an attached file");
        }
        Intent::OpenModal {
            bill_id: bill.id.clone(),
            file_url: bill.file_url.clone(),
        }
    }

    /// Apply an [`Intent::OpenModal`] to this view's modal flag. Other
    /// intents are not ours to handle and are ignored.
    pub fn apply(&self, intent: &Intent) {
        if let Intent::OpenModal { bill_id, file_url } = intent {
            *self.modal.write().unwrap() = Modal {
                visible: true,
                bill_id: Some(bill_id.clone()),
                file_url: file_url.clone(),
            };
        }
    }

    pub fn close_modal(&self) {
        *self.modal.write().unwrap() = Modal::default();
    }

    /// Snapshot of the modal state, for rendering and tests.
    pub fn modal(&self) -> Modal {
        self.modal.read().unwrap().clone()
    }

    /// Render the page: the bill table, or the failure's user-facing
    /// message in place of the entire list.
    pub async fn render(&self) -> Page {
        match self.get_bills().await {
            Ok(rows) => Page::bill_table(rows, self.modal()),
            Err(err) => {
                warn!(%err, "bill list unavailable");
                Page::bill_table_error(err.user_message())
            }
        }
    }
}
