use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Bill, FileUpload, NewBill, StoredFile};

/// Remote bill collection.
///
/// All operations are asynchronous and non-blocking; failures surface as
/// `Err(StoreError)` and are interpreted by the views, never retried here.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// List every submitted bill, in storage order.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Create a new bill. The store assigns the id.
    async fn create(&self, bill: NewBill) -> Result<Bill, StoreError>;
}

/// Remote storage for justification files.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Upload a file, returning the reference to attach to a bill.
    async fn upload(&self, file: FileUpload) -> Result<StoredFile, StoreError>;
}
