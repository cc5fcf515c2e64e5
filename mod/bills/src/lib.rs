//! Bills module — the employee-facing expense-note application core.
//!
//! # Pieces
//!
//! - **Router** — maps a requested path to a rendered page, gated by the
//!   authenticated session's role
//! - **BillsView** — fetches, formats, sorts and renders the bill list;
//!   owns the file-preview modal state
//! - **NewBillView** — validates an uploaded file, assembles a bill from
//!   form input plus session identity, and submits it
//!
//! Rust owns all state and logic; the platform shell only renders the
//! [`Page`](view::Page) values produced here and feeds user actions back in.
//! Handlers return [`Intent`](app::Intent) values instead of touching any
//! rendering surface.
//!
//! # Usage
//!
//! ```ignore
//! use bills::{Deps, Router, RoutePath};
//!
//! let router = Router::new(Deps { bills, files, sessions });
//! let page = router.navigate(RoutePath::Bills).await;
//! ```

pub mod app;
pub mod format;
pub mod model;
pub mod service;
pub mod view;

pub use app::{Intent, Navigation, RoutePath, Router};
pub use model::{DisplayBill, Session, UserType};
pub use service::{BillForm, BillsView, Deps, NewBillView, ViewError};
pub use view::{Body, NavIcon, Page};
