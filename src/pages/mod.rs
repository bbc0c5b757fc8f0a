//! Site pages.
//!
//! Each page renders an HTML fragment from the collaborators in the service
//! container. `render_page` is the name-based entry point used by the
//! binary.

pub mod download;

pub use download::DownloadPage;

use crate::core::{XswebError, XswebResult};
use crate::di::ServiceContainer;
use crate::github::types::RepoId;

/// Names of the pages this crate can render.
pub const PAGE_NAMES: &[&str] = &["download"];

/// Default repository shown on the download page.
fn default_repo() -> RepoId {
    RepoId::new("macmade", "XSFoundation")
}

/// Render a page by name.
pub async fn render_page(container: &ServiceContainer, name: &str) -> XswebResult<String> {
    match name {
        "download" => {
            let page = DownloadPage::new(
                default_repo(),
                container.menu.clone(),
                container.commits.clone(),
            );
            page.render().await
        }
        other => Err(XswebError::Page(format!("unknown page '{}'", other))),
    }
}
