//! View models handed to the platform shell.
//!
//! Markup and styling are out of scope; a page carries the test-observable
//! markers the UI renders from: title, active navigation icon, rows, the
//! modal flag and the inline validation-message region.

use crate::app::RoutePath;
use crate::model::DisplayBill;
use crate::service::bills::Modal;

/// Vertical-layout navigation icons. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    /// Bill-list icon.
    Window,
    /// New-bill icon.
    Mail,
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: RoutePath,
    pub title: String,
    pub active_icon: Option<NavIcon>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The bill table, or the error message that replaces it entirely when
    /// retrieval fails (no partial list is ever shown).
    BillTable {
        rows: Vec<DisplayBill>,
        modal: Modal,
        error: Option<String>,
    },
    NewBillForm {
        file_error: Option<String>,
    },
    Login,
    Dashboard,
}

impl Page {
    pub fn bill_table(rows: Vec<DisplayBill>, modal: Modal) -> Self {
        Self {
            route: RoutePath::Bills,
            title: "Mes notes de frais".to_string(),
            active_icon: Some(NavIcon::Window),
            body: Body::BillTable { rows, modal, error: None },
        }
    }

    pub fn bill_table_error(message: String) -> Self {
        Self {
            route: RoutePath::Bills,
            title: "Mes notes de frais".to_string(),
            active_icon: Some(NavIcon::Window),
            body: Body::BillTable {
                rows: Vec::new(),
                modal: Modal::default(),
                error: Some(message),
            },
        }
    }

    pub fn new_bill_form(file_error: Option<String>) -> Self {
        Self {
            route: RoutePath::NewBill,
            title: "Envoyer une note de frais".to_string(),
            active_icon: Some(NavIcon::Mail),
            body: Body::NewBillForm { file_error },
        }
    }

    pub fn login() -> Self {
        Self {
            route: RoutePath::Login,
            title: "Billed".to_string(),
            active_icon: None,
            body: Body::Login,
        }
    }

    pub fn dashboard() -> Self {
        Self {
            route: RoutePath::Dashboard,
            title: "Validations".to_string(),
            active_icon: None,
            body: Body::Dashboard,
        }
    }
}
