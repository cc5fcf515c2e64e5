//! billed-store — persistence contracts for the Billed expense-note app.
//!
//! The browser core never talks to a concrete backend directly. It consumes
//! two remote contracts and one local one:
//!
//! - **BillStore** — list submitted bills, create a new one
//! - **FileStore** — upload a justification file, get back its url/name/key
//! - **SessionStore** — durable key-value store holding the logged-in user
//!
//! Concrete transports (HTTP client, browser localStorage) live outside this
//! workspace. The in-memory implementations here (`MemoryGateway`,
//! `MemorySessionStore`) back the test suites and the demo binary.

pub mod error;
pub mod memory;
pub mod model;
pub mod session;
pub mod traits;

pub use error::StoreError;
pub use memory::{MemoryGateway, fixture_bills};
pub use model::{Bill, FileUpload, NewBill, Status, StoredFile};
pub use session::{MemorySessionStore, SessionStore};
pub use traits::{BillStore, FileStore};
