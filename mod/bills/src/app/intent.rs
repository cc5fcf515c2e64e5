use crate::app::RoutePath;

/// What a user-action handler wants the shell to do next.
///
/// Handlers never touch a rendering surface; they return an intent and a
/// thin adapter applies it. The router performs `Navigate`, the bills view
/// applies `OpenModal` to its modal flag, and the shell displays
/// `ShowError` messages inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(RoutePath),
    OpenModal {
        bill_id: String,
        file_url: Option<String>,
    },
    ShowError(String),
    None,
}
