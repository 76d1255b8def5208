mod common;

use common::mock_api::{MockPostsApi, MockResponse};
use common::{scenario_json, scenario_posts, source_for};
use postboard::fetch::{FetchError, PostsClient};
use postboard::headless::{fetch_board, render_text};

#[tokio::test]
async fn fetch_parses_posts() {
    let api = MockPostsApi::start().await;
    api.enqueue_response(MockResponse::json(&scenario_json())).await;

    let client = PostsClient::new(&source_for(&api.posts_url())).unwrap();
    let posts = client.fetch_posts().await.unwrap();
    assert_eq!(posts, scenario_posts());

    let requests = api.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/posts");
}

#[tokio::test]
async fn fetch_accepts_extra_fields() {
    let api = MockPostsApi::start().await;
    api.enqueue_response(MockResponse::json(
        r#"[{"id":1,"userId":2,"title":"t","body":"b","tags":["x"]}]"#,
    ))
    .await;

    let client = PostsClient::new(&source_for(&api.posts_url())).unwrap();
    let posts = client.fetch_posts().await.unwrap();
    assert_eq!(posts[0].user_id, 2);
}

#[tokio::test]
async fn server_error_is_status_error() {
    let api = MockPostsApi::start().await;
    api.enqueue_response(MockResponse::error(500, "boom")).await;

    let client = PostsClient::new(&source_for(&api.posts_url())).unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
    assert_eq!(err.user_message(), "server returned HTTP 500");
}

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let api = MockPostsApi::start().await;
    api.enqueue_response(MockResponse::json(r#"{"not":"a list"}"#)).await;

    let client = PostsClient::new(&source_for(&api.posts_url())).unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = PostsClient::new(&source_for(&format!("http://127.0.0.1:{port}/posts"))).unwrap();
    let err = client.fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn fetch_board_preselects_user() {
    let api = MockPostsApi::start().await;
    api.enqueue_response(MockResponse::json(&scenario_json())).await;

    let client = PostsClient::new(&source_for(&api.posts_url())).unwrap();
    let state = fetch_board(&client, Some(7)).await.unwrap();
    assert_eq!(state.selected_user, Some(7));

    let text = render_text(&state);
    assert!(text.contains("User 7"));
    assert!(text.contains("## A\na\n"));
    assert!(text.contains("## B\nb\n"));
    assert!(!text.contains("## C"));
}
