//! Download page renderer
//!
//! Renders the project's download page fragment: a GitHub badge, an
//! instructional paragraph pointing at the documentation page, and the list
//! of recent commits. The fragment is embedded into the surrounding site
//! template by whoever serves the page.

use crate::core::XswebResult;
use crate::di::{CommitProvider, MenuProvider};
use crate::github::types::{RepoCommit, RepoId};
use crate::html;
use std::fmt::Write;
use std::sync::Arc;

/// Path of the documentation page linked from the instructional paragraph.
const DOCUMENTATION_PATH: &str = "/projects/xsfoundation/documentation";

/// Renders the download page for one repository.
///
/// Stateless apart from its collaborators; each call to [`render`] fetches
/// a fresh commit list. Collaborator failures propagate unmodified, there
/// is no fallback or placeholder content.
///
/// [`render`]: DownloadPage::render
pub struct DownloadPage {
    repo: RepoId,
    menu: Arc<dyn MenuProvider>,
    commits: Arc<dyn CommitProvider>,
}

impl DownloadPage {
    pub fn new(repo: RepoId, menu: Arc<dyn MenuProvider>, commits: Arc<dyn CommitProvider>) -> Self {
        Self {
            repo,
            menu,
            commits,
        }
    }

    /// Render the page fragment.
    ///
    /// Output order is fixed: badge block, instructional paragraph,
    /// "Latest commits" heading, commit list.
    pub async fn render(&self) -> XswebResult<String> {
        let doc_link = self.menu.page_link(DOCUMENTATION_PATH, "documentation")?;
        let commits = self.commits.list_commits(&self.repo).await?;

        let repo_url = self.repo.html_url();
        let project = html::escape_text(&self.repo.name);

        let mut out = String::new();

        // Badge block. The image attributes are part of the page layout and
        // never vary with the fetched data.
        out.push_str("<div>\n");
        let _ = writeln!(
            out,
            r#"    <a href="{0}"><img src="/uploads/image/github.png" alt="GitHub" width="200" height="200" class="pull-right" /></a>"#,
            html::escape_attr(&repo_url)
        );
        out.push_str("</div>\n");

        // Instructional paragraph with the resolved documentation link.
        out.push_str("<p>\n");
        let _ = writeln!(
            out,
            r#"    {0} source code is freely available on <a href="{1}">GitHub</a>.<br />"#,
            project,
            html::escape_attr(&repo_url)
        );
        let _ = writeln!(
            out,
            "    Follow the instructions in the {} to build and use it.",
            doc_link
        );
        out.push_str("</p>\n");

        out.push_str("<h3 class=\"clearer\">Latest commits</h3>\n");
        out.push_str(&render_commit_list(&commits));

        Ok(out)
    }
}

/// Format structured commit records as a list fragment.
///
/// An empty record set renders an empty list; the page never substitutes
/// placeholder text for missing data.
fn render_commit_list(commits: &[RepoCommit]) -> String {
    let mut out = String::from("<ul class=\"commits\">\n");

    for commit in commits {
        let _ = writeln!(
            out,
            r#"    <li><a href="{0}"><code>{1}</code></a> {2} <span class="commit-meta">{3}, {4}</span></li>"#,
            html::escape_attr(&commit.html_url),
            html::escape_text(commit.short_sha()),
            html::escape_text(commit.summary()),
            html::escape_text(&commit.commit.author.name),
            commit.commit.author.date.format("%Y-%m-%d")
        );
    }

    out.push_str("</ul>\n");
    out
}
