pub mod bills;
pub mod new_bill;

use std::sync::Arc;

use thiserror::Error;

use billed_store::{BillStore, FileStore, SessionStore, StoreError};

pub use bills::BillsView;
pub use new_bill::{BillForm, NewBillView};

/// External collaborators, declared explicitly so each view's dependencies
/// are visible, testable, and swappable behind the trait seams.
#[derive(Clone)]
pub struct Deps {
    pub bills: Arc<dyn BillStore>,
    pub files: Arc<dyn FileStore>,
    pub sessions: Arc<dyn SessionStore>,
}

/// View-level error taxonomy.
///
/// Every variant stays local to the view that raised it; none is fatal to
/// the application and the router remains usable throughout.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Detected locally, never reaches the network. Blocks submission until
    /// the user recovers by re-selecting a file.
    #[error("validation: {0}")]
    Validation(String),

    /// Bill-list retrieval failed; rendered in place of the list.
    #[error("fetch: {0}")]
    Fetch(StoreError),

    /// Upload or create failed; the form stays on-screen for a manual retry.
    #[error("submit: {0}")]
    Submit(StoreError),
}

impl ViewError {
    /// The string the UI shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            ViewError::Validation(message) => message.clone(),
            ViewError::Fetch(err) | ViewError::Submit(err) => err.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_uses_status_labels() {
        let err = ViewError::Fetch(StoreError::Api { status: 404, message: "gone".into() });
        assert_eq!(err.user_message(), "Erreur 404");

        let err = ViewError::Submit(StoreError::Api { status: 500, message: "boom".into() });
        assert_eq!(err.user_message(), "Erreur 500");
    }

    #[test]
    fn validation_message_passes_through() {
        let err = ViewError::Validation("Le fichier ne correspond pas au format".into());
        assert_eq!(err.user_message(), "Le fichier ne correspond pas au format");
    }
}
