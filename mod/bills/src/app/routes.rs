/// The navigable paths of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl RoutePath {
    /// URL form, hash-fragment style.
    pub fn as_url(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Dashboard => "#admin/dashboard",
        }
    }

    /// Parse a URL back into a path. Unknown URLs resolve to nothing.
    pub fn from_url(url: &str) -> Option<Self> {
        match url {
            "/" => Some(RoutePath::Login),
            "#employee/bills" => Some(RoutePath::Bills),
            "#employee/bill/new" => Some(RoutePath::NewBill),
            "#admin/dashboard" => Some(RoutePath::Dashboard),
            _ => None,
        }
    }
}
