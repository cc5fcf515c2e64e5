use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::app::{Intent, RoutePath};
use crate::model::{Session, UserType};
use crate::service::{BillsView, Deps, NewBillView};
use crate::view::Page;

/// Outcome of a navigation request.
#[derive(Debug, PartialEq)]
pub enum Navigation {
    /// The page to show.
    Rendered(Page),
    /// A newer navigation started while this one was fetching; its page
    /// must not reach the screen.
    Superseded,
}

/// Maps paths to views, gated by the current session's role.
///
/// The router owns one instance of each view and a navigation generation
/// counter: every `navigate` bumps it, and a render that finishes under a
/// stale generation is discarded instead of clobbering the newer page.
pub struct Router {
    deps: Deps,
    bills_view: BillsView,
    new_bill_view: NewBillView,
    generation: AtomicU64,
}

impl Router {
    pub fn new(deps: Deps) -> Self {
        Self {
            bills_view: BillsView::new(deps.clone()),
            new_bill_view: NewBillView::new(deps.clone()),
            deps,
            generation: AtomicU64::new(0),
        }
    }

    pub fn bills_view(&self) -> &BillsView {
        &self.bills_view
    }

    pub fn new_bill_view(&self) -> &NewBillView {
        &self.new_bill_view
    }

    /// Resolve a path against the current session and render the matching
    /// view. Re-navigating to the current path re-renders it.
    pub async fn navigate(&self, path: RoutePath) -> Navigation {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let effective = self.gate(path);
        debug!(url = effective.as_url(), "navigate");

        let page = match effective {
            RoutePath::Login => Page::login(),
            RoutePath::Bills => self.bills_view.render().await,
            RoutePath::NewBill => self.new_bill_view.render(),
            RoutePath::Dashboard => Page::dashboard(),
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(url = effective.as_url(), "navigation superseded");
            return Navigation::Superseded;
        }
        Navigation::Rendered(page)
    }

    /// Apply an intent produced by a view handler.
    pub async fn dispatch(&self, intent: Intent) -> Option<Navigation> {
        match intent {
            Intent::Navigate(path) => Some(self.navigate(path).await),
            intent @ Intent::OpenModal { .. } => {
                self.bills_view.apply(&intent);
                None
            }
            Intent::ShowError(message) => {
                warn!(%message, "error surfaced to the shell");
                None
            }
            Intent::None => None,
        }
    }

    /// Role gating. Employee pages require an employee session, the
    /// dashboard an admin one; anything else lands on the login page.
    fn gate(&self, path: RoutePath) -> RoutePath {
        let role = Session::load(self.deps.sessions.as_ref()).map(|s| s.user_type);
        let allowed = match (path, role) {
            (RoutePath::Login, _) => true,
            (RoutePath::Bills | RoutePath::NewBill, Some(UserType::Employee)) => true,
            (RoutePath::Dashboard, Some(UserType::Admin)) => true,
            _ => false,
        };
        if allowed {
            path
        } else {
            warn!(url = path.as_url(), ?role, "navigation denied");
            RoutePath::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use billed_store::{
        Bill, BillStore, MemoryGateway, MemorySessionStore, NewBill, StoreError,
    };

    use super::*;
    use crate::view::{Body, NavIcon};

    fn router_for(role: Option<UserType>) -> Router {
        let gateway = Arc::new(MemoryGateway::seeded());
        let sessions = Arc::new(MemorySessionStore::new());
        if let Some(role) = role {
            Session::new(role, "a@a").save(sessions.as_ref()).unwrap();
        }
        Router::new(Deps {
            bills: gateway.clone(),
            files: gateway,
            sessions,
        })
    }

    fn rendered(navigation: Navigation) -> Page {
        match navigation {
            Navigation::Rendered(page) => page,
            Navigation::Superseded => panic!("navigation was superseded"),
        }
    }

    #[tokio::test]
    async fn bills_page_activates_the_window_icon() {
        let router = router_for(Some(UserType::Employee));
        let page = rendered(router.navigate(RoutePath::Bills).await);

        assert_eq!(page.title, "Mes notes de frais");
        assert_eq!(page.active_icon, Some(NavIcon::Window));
        match page.body {
            Body::BillTable { rows, error, .. } => {
                assert_eq!(rows.len(), 4);
                assert!(error.is_none());
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn new_bill_page_activates_the_mail_icon() {
        let router = router_for(Some(UserType::Employee));
        let page = rendered(router.navigate(RoutePath::NewBill).await);

        assert_eq!(page.title, "Envoyer une note de frais");
        assert_eq!(page.active_icon, Some(NavIcon::Mail));
    }

    #[tokio::test]
    async fn renavigation_renders_the_same_page() {
        let router = router_for(Some(UserType::Employee));
        let first = rendered(router.navigate(RoutePath::Bills).await);
        let second = rendered(router.navigate(RoutePath::Bills).await);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn no_session_lands_on_login() {
        let router = router_for(None);
        for path in [RoutePath::Bills, RoutePath::NewBill, RoutePath::Dashboard] {
            let page = rendered(router.navigate(path).await);
            assert_eq!(page.route, RoutePath::Login);
        }
    }

    #[tokio::test]
    async fn employee_is_denied_the_dashboard() {
        let router = router_for(Some(UserType::Employee));
        let page = rendered(router.navigate(RoutePath::Dashboard).await);
        assert_eq!(page.route, RoutePath::Login);
    }

    #[tokio::test]
    async fn admin_reaches_the_dashboard_but_not_employee_pages() {
        let router = router_for(Some(UserType::Admin));

        let page = rendered(router.navigate(RoutePath::Dashboard).await);
        assert_eq!(page.title, "Validations");

        let page = rendered(router.navigate(RoutePath::Bills).await);
        assert_eq!(page.route, RoutePath::Login);
    }

    #[tokio::test]
    async fn dispatch_applies_a_modal_intent() {
        let router = router_for(Some(UserType::Employee));
        let rows = router.bills_view().get_bills().await.unwrap();

        let intent = router.bills_view().handle_click_icon_eye(&rows[0]);
        assert!(router.dispatch(intent).await.is_none());
        assert!(router.bills_view().modal().visible);
    }

    #[tokio::test]
    async fn dispatch_navigates() {
        let router = router_for(Some(UserType::Employee));
        let navigation = router
            .dispatch(router.bills_view().handle_click_new_bill())
            .await
            .unwrap();
        assert_eq!(rendered(navigation).route, RoutePath::NewBill);
    }

    /// Delays `list` so a second navigation can overtake the first.
    struct SlowBills(Arc<MemoryGateway>);

    #[async_trait]
    impl BillStore for SlowBills {
        async fn list(&self) -> Result<Vec<Bill>, StoreError> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.0.list().await
        }

        async fn create(&self, bill: NewBill) -> Result<Bill, StoreError> {
            self.0.create(bill).await
        }
    }

    #[tokio::test]
    async fn stale_navigation_is_discarded() {
        let gateway = Arc::new(MemoryGateway::seeded());
        let sessions = Arc::new(MemorySessionStore::new());
        Session::new(UserType::Employee, "a@a")
            .save(sessions.as_ref())
            .unwrap();
        let router = Arc::new(Router::new(Deps {
            bills: Arc::new(SlowBills(gateway.clone())),
            files: gateway,
            sessions,
        }));

        let slow = tokio::spawn({
            let router = router.clone();
            async move { router.navigate(RoutePath::Bills).await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        // The second navigation wins; the first one's page never lands.
        let page = rendered(router.navigate(RoutePath::NewBill).await);
        assert_eq!(page.route, RoutePath::NewBill);
        assert_eq!(slow.await.unwrap(), Navigation::Superseded);
    }
}
