use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::error::StoreError;
use crate::model::{Bill, FileUpload, NewBill, Status, StoredFile};
use crate::traits::{BillStore, FileStore};

/// Generate a new random id (UUIDv4, no dashes).
fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// In-memory BillStore + FileStore.
///
/// Mirrors the remote persistence API for test suites and the demo binary:
/// seedable bill data, one-shot failure injection, and call counters so
/// tests can assert how often `create`/`upload` were invoked.
pub struct MemoryGateway {
    bills: RwLock<Vec<Bill>>,
    files: RwLock<HashMap<String, Vec<u8>>>,
    fail_next: Mutex<Option<u16>>,
    fail_create: Mutex<Option<u16>>,
    create_calls: AtomicU64,
    upload_calls: AtomicU64,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::with_bills(Vec::new())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: RwLock::new(bills),
            files: RwLock::new(HashMap::new()),
            fail_next: Mutex::new(None),
            fail_create: Mutex::new(None),
            create_calls: AtomicU64::new(0),
            upload_calls: AtomicU64::new(0),
        }
    }

    /// A gateway pre-loaded with the standard four-bill fixture set.
    pub fn seeded() -> Self {
        Self::with_bills(fixture_bills())
    }

    /// Make the next store operation fail with the given HTTP status.
    pub fn fail_next(&self, status: u16) {
        *self.fail_next.lock().unwrap() = Some(status);
    }

    /// Make the next `create` fail, leaving `list` and `upload` untouched.
    pub fn fail_next_create(&self, status: u16) {
        *self.fail_create.lock().unwrap() = Some(status);
    }

    /// How many times `create` was called.
    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::Relaxed)
    }

    /// How many times `upload` was called.
    pub fn upload_calls(&self) -> u64 {
        self.upload_calls.load(Ordering::Relaxed)
    }

    /// Raw content of an uploaded file, keyed by storage key.
    pub fn uploaded(&self, key: &str) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(key).cloned()
    }

    fn take_failure(&self) -> Option<StoreError> {
        Self::take(&self.fail_next)
    }

    fn take_create_failure(&self) -> Option<StoreError> {
        Self::take(&self.fail_create).or_else(|| self.take_failure())
    }

    fn take(slot: &Mutex<Option<u16>>) -> Option<StoreError> {
        slot.lock().unwrap().take().map(|status| StoreError::Api {
            status,
            message: format!("injected failure ({status})"),
        })
    }
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStore for MemoryGateway {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.bills.read().unwrap().clone())
    }

    async fn create(&self, bill: NewBill) -> Result<Bill, StoreError> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = self.take_create_failure() {
            return Err(err);
        }
        let created = Bill {
            id: new_id(),
            email: bill.email,
            expense_type: bill.expense_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date,
            vat: bill.vat,
            pct: bill.pct,
            commentary: bill.commentary,
            file_url: bill.file_url,
            file_name: bill.file_name,
            status: bill.status,
        };
        debug!(id = %created.id, name = %created.name, "bill created");
        self.bills.write().unwrap().push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl FileStore for MemoryGateway {
    async fn upload(&self, file: FileUpload) -> Result<StoredFile, StoreError> {
        self.upload_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let key = format!("justificatifs/{}/{}", new_id(), file.file_name);
        debug!(key = %key, size = file.content.len(), "file uploaded");
        self.files.write().unwrap().insert(key.clone(), file.content);
        Ok(StoredFile {
            file_url: format!("memory://{key}"),
            file_name: file.file_name,
            key,
        })
    }
}

/// The standard fixture: four bills spanning four years, one per status
/// flavor, matching what the UI test harness expects to find.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".into(),
            email: "a@a".into(),
            expense_type: "Hôtel et logement".into(),
            name: "encore".into(),
            amount: 400.0,
            date: "2004-04-04".into(),
            vat: Some(80.0),
            pct: Some(20.0),
            commentary: Some("séminaire billed".into()),
            file_url: Some("https://storage.billed.test/justificatifs/encore.jpg".into()),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".into()),
            status: Status::Pending,
        },
        Bill {
            id: "BeKy598729423xZ".into(),
            email: "a@a".into(),
            expense_type: "Transports".into(),
            name: "test1".into(),
            amount: 100.0,
            date: "2001-01-01".into(),
            vat: None,
            pct: Some(20.0),
            commentary: Some("".into()),
            file_url: Some("https://storage.billed.test/justificatifs/test1.jpg".into()),
            file_name: Some("billet-train-paris-lyon.jpg".into()),
            status: Status::Refused,
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".into(),
            email: "a@a".into(),
            expense_type: "Services en ligne".into(),
            name: "test3".into(),
            amount: 300.0,
            date: "2003-03-03".into(),
            vat: Some(60.0),
            pct: Some(20.0),
            commentary: Some("en fait non".into()),
            file_url: Some("https://storage.billed.test/justificatifs/test3.jpg".into()),
            file_name: Some("facture-client-php-exportee.png".into()),
            status: Status::Accepted,
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".into(),
            email: "a@a".into(),
            expense_type: "Restaurants et bars".into(),
            name: "test2".into(),
            amount: 200.0,
            date: "2002-02-02".into(),
            vat: Some(40.0),
            pct: Some(20.0),
            commentary: Some("".into()),
            file_url: Some("https://storage.billed.test/justificatifs/test2.jpg".into()),
            file_name: Some("note-de-frais-resto.jpg".into()),
            status: Status::Refused,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_bill() -> NewBill {
        NewBill {
            email: "employee@billed.test".into(),
            expense_type: "Transports".into(),
            name: "Vol Paris-Tokyo".into(),
            amount: 3750.0,
            date: "2023-07-26".into(),
            vat: Some(20.0),
            pct: Some(20.0),
            commentary: None,
            file_url: Some("memory://justificatifs/x/f.jpg".into()),
            file_name: Some("f.jpg".into()),
            status: Status::Pending,
        }
    }

    #[tokio::test]
    async fn list_returns_seeded_bills() {
        let gateway = MemoryGateway::seeded();
        let bills = gateway.list().await.unwrap();
        assert_eq!(bills.len(), 4);
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists() {
        let gateway = MemoryGateway::new();
        let created = gateway.create(sample_new_bill()).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.status, Status::Pending);

        let bills = gateway.list().await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0], created);
        assert_eq!(gateway.create_calls(), 1);
    }

    #[tokio::test]
    async fn upload_stores_content_and_builds_reference() {
        let gateway = MemoryGateway::new();
        let stored = gateway
            .upload(FileUpload {
                file_name: "facture.png".into(),
                content: b"image".to_vec(),
            })
            .await
            .unwrap();

        assert_eq!(stored.file_name, "facture.png");
        assert!(stored.file_url.starts_with("memory://"));
        assert!(stored.key.ends_with("/facture.png"));
        assert_eq!(gateway.uploaded(&stored.key).unwrap(), b"image".to_vec());
    }

    #[tokio::test]
    async fn fail_next_fails_exactly_once() {
        let gateway = MemoryGateway::seeded();
        gateway.fail_next(500);

        let err = gateway.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 500, .. }));

        // The failure is consumed; the next call succeeds.
        assert_eq!(gateway.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn fail_next_create_spares_other_operations() {
        let gateway = MemoryGateway::new();
        gateway.fail_next_create(500);

        gateway
            .upload(FileUpload {
                file_name: "f.jpg".into(),
                content: vec![],
            })
            .await
            .unwrap();
        assert!(gateway.list().await.is_ok());

        let err = gateway.create(sample_new_bill()).await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 500, .. }));
        assert!(gateway.create(sample_new_bill()).await.is_ok());
    }
}
