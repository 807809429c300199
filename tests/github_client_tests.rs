// GitHub client tests against a local stand-in for the REST API.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use base64::Engine;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use text_publisher::github::{GithubClient, GithubError, PutFile, RepositoryHost, RepositoryRef};

const TOKEN: &str = "test-token";

#[derive(Clone, Default)]
struct Recorded {
    puts: Arc<Mutex<Vec<(String, Value)>>>,
    refs: Arc<Mutex<Vec<String>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TOKEN}"))
        .unwrap_or(false)
        && headers.contains_key("user-agent")
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn get_contents(
    State(recorded): State<Recorded>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Bad credentials");
    }
    recorded
        .refs
        .lock()
        .unwrap()
        .push(query.get("ref").cloned().unwrap_or_default());

    match path.as_str() {
        "docs/existing.html" => Json(json!({
            "type": "file",
            "path": path,
            "sha": "abc123",
            "html_url": "https://github.com/octo/blog/blob/main/docs/existing.html"
        }))
        .into_response(),
        "docs" => Json(json!([{ "type": "file", "path": "docs/existing.html" }])).into_response(),
        _ => error(StatusCode::NOT_FOUND, "Not Found"),
    }
}

async fn put_contents(
    State(recorded): State<Recorded>,
    Path((_owner, _repo, path)): Path<(String, String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Bad credentials");
    }
    if path == "conflict.html" {
        return error(StatusCode::CONFLICT, "docs/conflict.html does not match");
    }
    recorded.puts.lock().unwrap().push((path.clone(), body));

    Json(json!({
        "content": { "path": path, "html_url": format!("https://github.com/octo/blog/blob/main/{path}") },
        "commit": { "sha": "deadbeef", "html_url": "https://github.com/octo/blog/commit/deadbeef" }
    }))
    .into_response()
}

async fn get_repo(Path((owner, repo)): Path<(String, String)>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Bad credentials");
    }
    if repo == "secret" {
        return error(StatusCode::FORBIDDEN, "Resource not accessible by personal access token");
    }
    Json(json!({
        "full_name": format!("{owner}/{repo}"),
        "default_branch": "main",
        "private": false,
        "html_url": format!("https://github.com/{owner}/{repo}")
    }))
    .into_response()
}

async fn spawn_fake_github() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/repos/:owner/:repo", get(get_repo))
        .route(
            "/repos/:owner/:repo/contents/*path",
            get(get_contents).put(put_contents),
        )
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}

fn client(base: &str, token: &str) -> GithubClient {
    GithubClient::new(base, Some(token.to_string()), Duration::from_secs(5)).unwrap()
}

fn repo() -> RepositoryRef {
    RepositoryRef::new("octo", "blog")
}

#[tokio::test]
async fn test_get_existing_file() {
    let (base, recorded) = spawn_fake_github().await;
    let file = client(&base, TOKEN)
        .get_file(&repo(), "docs/existing.html", "drafts")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(file.sha, "abc123");
    assert_eq!(file.path, "docs/existing.html");
    assert_eq!(*recorded.refs.lock().unwrap(), vec!["drafts".to_string()]);
}

#[tokio::test]
async fn test_get_missing_file_is_none() {
    let (base, _) = spawn_fake_github().await;
    let file = client(&base, TOKEN)
        .get_file(&repo(), "docs/new.html", "main")
        .await
        .unwrap();
    assert!(file.is_none());
}

#[tokio::test]
async fn test_get_directory_is_none() {
    let (base, _) = spawn_fake_github().await;
    let file = client(&base, TOKEN)
        .get_file(&repo(), "docs", "main")
        .await
        .unwrap();
    assert!(file.is_none());
}

#[tokio::test]
async fn test_put_file_sends_base64_content() {
    let (base, recorded) = spawn_fake_github().await;
    let html = "<!DOCTYPE html>\n<p>héllo</p>";

    let result = client(&base, TOKEN)
        .put_file(
            &repo(),
            PutFile {
                path: "docs/post.html".to_string(),
                message: "Add post".to_string(),
                content: html.to_string(),
                branch: "main".to_string(),
                sha: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(result.commit_sha, "deadbeef");
    assert_eq!(result.commit_url, "https://github.com/octo/blog/commit/deadbeef");
    assert_eq!(
        result.content_url.as_deref(),
        Some("https://github.com/octo/blog/blob/main/docs/post.html")
    );

    let puts = recorded.puts.lock().unwrap();
    let (path, body) = &puts[0];
    assert_eq!(path, "docs/post.html");
    assert_eq!(body["message"], "Add post");
    assert_eq!(body["branch"], "main");
    assert!(body.get("sha").is_none());

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(body["content"].as_str().unwrap())
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), html);
}

#[tokio::test]
async fn test_put_file_with_sha_updates() {
    let (base, recorded) = spawn_fake_github().await;
    client(&base, TOKEN)
        .put_file(
            &repo(),
            PutFile {
                path: "docs/existing.html".to_string(),
                message: "Update".to_string(),
                content: "x".to_string(),
                branch: "main".to_string(),
                sha: Some("abc123".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(recorded.puts.lock().unwrap()[0].1["sha"], "abc123");
}

#[tokio::test]
async fn test_put_file_conflict_passes_message_through() {
    let (base, _) = spawn_fake_github().await;
    let err = client(&base, TOKEN)
        .put_file(
            &repo(),
            PutFile {
                path: "conflict.html".to_string(),
                message: "m".to_string(),
                content: "x".to_string(),
                branch: "main".to_string(),
                sha: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("does not match"));
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let (base, _) = spawn_fake_github().await;
    let err = client(&base, "wrong")
        .get_file(&repo(), "docs/existing.html", "main")
        .await
        .unwrap_err();

    assert!(matches!(err, GithubError::Unauthorized(ref m) if m == "Bad credentials"));
}

#[tokio::test]
async fn test_get_repository() {
    let (base, _) = spawn_fake_github().await;
    let info = client(&base, TOKEN).get_repository(&repo()).await.unwrap();

    assert_eq!(info.full_name, "octo/blog");
    assert_eq!(info.default_branch, "main");

    let err = client(&base, TOKEN)
        .get_repository(&RepositoryRef::new("octo", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, GithubError::Forbidden(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on port 9 locally
    let err = client("http://127.0.0.1:9", TOKEN)
        .get_repository(&repo())
        .await
        .unwrap_err();

    assert!(matches!(err, GithubError::Transport(_)));
    assert_eq!(err.status(), None);
}
