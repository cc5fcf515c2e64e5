use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use tracing::{info, warn};

use billed_store::{FileUpload, NewBill, Status};

use crate::app::{Intent, RoutePath};
use crate::model::Session;
use crate::service::{Deps, ViewError};
use crate::view::Page;

/// Accepted justification-file extensions (case-insensitive).
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Inline message shown when the selected file is not an accepted format.
pub const FILE_FORMAT_MESSAGE: &str = "Le fichier ne correspond pas au format";

/// Progress of the one in-flight submission this view manages.
#[derive(Debug)]
pub enum FileState {
    /// No file selected yet.
    Idle,
    /// The selected file was rejected; submission is blocked. Recoverable
    /// by selecting a valid file.
    Invalid,
    /// A validated file is staged, waiting for submit. Upload is deferred
    /// to submission.
    Staged(FileUpload),
    /// The bill was created; the view is done.
    Submitted,
}

/// Form fields of a new bill, as captured by the shell.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillForm {
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: f64,
    /// Canonical `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub vat: Option<f64>,
    #[serde(default)]
    pub pct: Option<f64>,
    #[serde(default)]
    pub commentary: Option<String>,
}

/// The new-bill view: file-type validation, then upload + create on submit.
pub struct NewBillView {
    deps: Deps,
    state: Mutex<FileState>,
    /// Guard against re-entrant submits while a create request is in flight.
    submitting: AtomicBool,
}

impl NewBillView {
    pub fn new(deps: Deps) -> Self {
        Self {
            deps,
            state: Mutex::new(FileState::Idle),
            submitting: AtomicBool::new(false),
        }
    }

    /// Handle a file selection.
    ///
    /// An extension outside the accepted set clears the staged file, raises
    /// the inline validation message and blocks submission; a valid file is
    /// staged for submit.
    pub fn handle_change_file(&self, file: FileUpload) -> Intent {
        let extension = Path::new(&file.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let mut state = self.state.lock().unwrap();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            warn!(file_name = %file.file_name, "rejected justification file");
            *state = FileState::Invalid;
            return Intent::ShowError(FILE_FORMAT_MESSAGE.to_string());
        }
        *state = FileState::Staged(file);
        Intent::None
    }

    /// Handle a form submit.
    ///
    /// Requires a staged, validated file; otherwise the submit is a no-op
    /// and nothing is created. On success navigates back to the bill list;
    /// on failure the file stays staged and the failure message is surfaced
    /// for a manual retry.
    pub async fn handle_submit(&self, form: BillForm) -> Intent {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Intent::None;
        }
        let intent = self.submit(form).await;
        self.submitting.store(false, Ordering::SeqCst);
        intent
    }

    async fn submit(&self, form: BillForm) -> Intent {
        let staged = {
            let state = self.state.lock().unwrap();
            match &*state {
                FileState::Staged(file) => file.clone(),
                _ => return Intent::None,
            }
        };

        let Some(session) = Session::load(self.deps.sessions.as_ref()) else {
            warn!("submit without a session");
            return Intent::None;
        };

        let stored = match self.deps.files.upload(staged).await {
            Ok(stored) => stored,
            Err(err) => {
                let err = ViewError::Submit(err);
                warn!(%err, "file upload failed");
                return Intent::ShowError(err.user_message());
            }
        };

        let bill = NewBill {
            email: session.email,
            expense_type: form.expense_type,
            name: form.name,
            amount: form.amount,
            date: form.date,
            vat: form.vat,
            pct: form.pct,
            commentary: form.commentary,
            file_url: Some(stored.file_url),
            file_name: Some(stored.file_name),
            status: Status::Pending,
        };

        match self.deps.bills.create(bill).await {
            Ok(created) => {
                info!(id = %created.id, "bill submitted");
                *self.state.lock().unwrap() = FileState::Submitted;
                Intent::Navigate(RoutePath::Bills)
            }
            Err(err) => {
                let err = ViewError::Submit(err);
                warn!(%err, "bill creation failed");
                Intent::ShowError(err.user_message())
            }
        }
    }

    /// Whether a validated file is currently staged.
    pub fn has_staged_file(&self) -> bool {
        matches!(*self.state.lock().unwrap(), FileState::Staged(_))
    }

    /// The inline validation message, when the last selected file was
    /// rejected.
    pub fn file_error(&self) -> Option<String> {
        match *self.state.lock().unwrap() {
            FileState::Invalid => Some(FILE_FORMAT_MESSAGE.to_string()),
            _ => None,
        }
    }

    pub fn render(&self) -> Page {
        Page::new_bill_form(self.file_error())
    }
}
