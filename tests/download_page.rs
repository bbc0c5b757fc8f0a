//! End-to-end render of the download page against a mocked GitHub API.

use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xsweb::config::Config;
use xsweb::di::ServiceContainer;
use xsweb::github::GitHubClient;
use xsweb::menu::Menu;
use xsweb::pages;

fn commit_json(sha: &str, message: &str, date: &str) -> serde_json::Value {
    serde_json::json!({
        "sha": sha,
        "html_url": format!("https://github.com/macmade/XSFoundation/commit/{}", sha),
        "commit": {
            "message": message,
            "author": { "name": "Jean-David Gadina", "date": date }
        }
    })
}

fn container_for(server: &MockServer) -> ServiceContainer {
    let config = Config {
        github_api_url: server.uri(),
        commits_per_page: 10,
        ..Config::default()
    };
    let client = GitHubClient::new(&config).unwrap();

    ServiceContainer::with_providers(
        Arc::new(config),
        Arc::new(Menu::with_default_pages()),
        Arc::new(client),
    )
}

#[tokio::test]
async fn renders_download_page_from_api_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/macmade/XSFoundation/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            commit_json(
                "a1b2c3d4e5f60718293a4b5c6d7e8f9011223344",
                "Fix alignment of allocated blocks",
                "2024-02-10T09:30:00Z"
            ),
            commit_json(
                "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                "Update copyright years",
                "2024-01-02T18:00:00Z"
            ),
        ])))
        .mount(&server)
        .await;

    let container = container_for(&server);
    let out = pages::render_page(&container, "download").await.unwrap();

    // Fixed ordering: badge, paragraph, heading, commit list.
    let badge = out.find("/uploads/image/github.png").unwrap();
    let paragraph = out
        .find("Follow the instructions in the <a href=\"/projects/xsfoundation/documentation\">documentation</a>")
        .unwrap();
    let heading = out.find("<h3 class=\"clearer\">Latest commits</h3>").unwrap();
    let commits = out.find("<code>a1b2c3d</code>").unwrap();
    assert!(badge < paragraph && paragraph < heading && heading < commits);

    assert!(out.contains("Fix alignment of allocated blocks"));
    assert!(out.contains("Update copyright years"));
    assert!(out.contains("2024-02-10"));
    assert!(out.contains(r#"<a href="https://github.com/macmade/XSFoundation">"#));
    assert!(out.contains(r#"width="200" height="200""#));
}

#[tokio::test]
async fn api_failure_propagates_without_placeholder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/macmade/XSFoundation/commits"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let container = container_for(&server);
    let result = pages::render_page(&container, "download").await;

    // No silent swallowing and no default text; the render fails outright.
    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn empty_commit_history_renders_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/macmade/XSFoundation/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let container = container_for(&server);
    let out = pages::render_page(&container, "download").await.unwrap();

    assert!(out.contains("<ul class=\"commits\">\n</ul>"));
    assert!(!out.contains("No commits"));
}
