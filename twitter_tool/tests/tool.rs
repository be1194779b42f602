use serde_json::json;
use wiremock::matchers::{any, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use twitter_tool::{Credentials, MissCache, TwitterConfig, TwitterTool, UserTarget};

fn config(api_url: &str) -> TwitterConfig {
    let mut config = TwitterConfig::new(Credentials {
        consumer_key: "test_consumer_key".to_string(),
        consumer_secret: "test_consumer_secret".to_string(),
        access_token: "test_access_token".to_string(),
        access_token_secret: "test_access_token_secret".to_string(),
    });
    config.api_url = Some(api_url.to_string());
    config
}

fn tool(server: &MockServer) -> TwitterTool {
    TwitterTool::builder().config(config(&server.uri())).build().unwrap()
}

fn user_json(id: u64, screen_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": screen_name,
        "screen_name": screen_name,
        "created_at": "Wed May 23 06:01:13 +0000 2007",
        "followers_count": 10
    })
}

fn status_json(id: u64, text: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_at": "Thu Apr 06 15:28:43 +0000 2017",
        "text": text,
        "user": user_json(6253282, "TwitterAPI")
    })
}

fn page_not_exist() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "errors": [{"code": 34, "message": "Sorry, that page does not exist."}]
    }))
}

#[tokio::test]
async fn test_user_timeline_applies_default_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses/user_timeline.json"))
        .and(query_param("screen_name", "TwitterAPI"))
        .and(query_param("page", "1"))
        .and(query_param("count", "20"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            status_json(2, "second"),
            status_json(1, "first"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let target = UserTarget::from("TwitterAPI");
    let statuses = tool.user_timeline(&target, None, Some(0)).await.unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].text, "second");
    assert_eq!(statuses[1].user.as_ref().unwrap().screen_name, "TwitterAPI");
}

#[tokio::test]
async fn test_user_list_statuses_passes_explicit_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/statuses.json"))
        .and(query_param("owner_id", "6253282"))
        .and(query_param("slug", "team"))
        .and(query_param("page", "2"))
        .and(query_param("count", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([status_json(3, "from the list")])))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let statuses = tool
        .user_list_statuses(&UserTarget::Id(6253282), "team", Some(2), Some(5))
        .await
        .unwrap();
    assert_eq!(statuses[0].text, "from the list");
}

#[tokio::test]
async fn test_show_user_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .and(query_param("user_id", "783214"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(783214, "Twitter")))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let user = tool.show_user(&UserTarget::Id(783214)).await.unwrap();
    assert_eq!(user.screen_name, "Twitter");
    assert_eq!(user.followers_count, 10);
}

#[tokio::test]
async fn test_followers_and_list_members_request_first_cursor() {
    let server = MockServer::start().await;
    let page = json!({
        "users": [user_json(1, "one"), user_json(2, "two")],
        "next_cursor": 0,
        "previous_cursor": 0
    });
    Mock::given(method("GET"))
        .and(path("/followers/list.json"))
        .and(query_param("screen_name", "jack"))
        .and(query_param("cursor", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lists/members.json"))
        .and(query_param("owner_screen_name", "jack"))
        .and(query_param("slug", "friends"))
        .and(query_param("cursor", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let jack = UserTarget::from("jack");
    let followers = tool.followers_list(&jack).await.unwrap();
    assert_eq!(followers.users.len(), 2);
    assert!(!followers.has_next());
    let members = tool.user_list_members(&jack, "friends").await.unwrap();
    assert_eq!(members.users[1].screen_name, "two");
}

#[tokio::test]
async fn test_known_miss_skips_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let tool = tool(&server);
    tool.miss_cache().put("suspended", true).unwrap();
    tool.miss_cache().put("42", true).unwrap();

    let handle = UserTarget::from("suspended");
    let id = UserTarget::Id(42);
    assert!(tool.user_timeline(&handle, None, None).await.is_none());
    assert!(tool.show_user(&handle).await.is_none());
    assert!(tool.followers_list(&id).await.is_none());
    assert!(tool.user_list_members(&id, "slug").await.is_none());
    assert!(tool.user_list_statuses(&handle, "slug", Some(1), Some(1)).await.is_none());
}

#[tokio::test]
async fn test_page_not_exist_is_recorded_as_miss() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .and(query_param("user_id", "12"))
        .respond_with(page_not_exist())
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let target = UserTarget::Id(12);
    assert!(tool.show_user(&target).await.is_none());
    assert!(tool.miss_cache().get("12"));
    // Answered from the miss cache; the mock allows a single request.
    assert!(tool.show_user(&target).await.is_none());
}

#[tokio::test]
async fn test_other_error_codes_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses/user_timeline.json"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": [{"code": 88, "message": "Rate limit exceeded"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let tool = tool(&server);
    let target = UserTarget::from("busy");
    assert!(tool.user_timeline(&target, None, None).await.is_none());
    assert!(!tool.miss_cache().get("busy"));
    assert!(tool.user_timeline(&target, None, None).await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_absent_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"oops\"}"))
        .mount(&server)
        .await;

    let tool = tool(&server);
    assert!(tool.show_user(&UserTarget::from("broken")).await.is_none());
    assert!(!tool.miss_cache().get("broken"));
}

#[tokio::test]
async fn test_unreachable_api_is_absent_and_not_cached() {
    let tool = TwitterTool::builder()
        .config(config("http://127.0.0.1:1"))
        .build()
        .unwrap();
    assert!(tool.show_user(&UserTarget::from("offline")).await.is_none());
    assert!(!tool.miss_cache().get("offline"));
}

#[tokio::test]
async fn test_miss_cache_is_shared_between_tools() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/followers/list.json"))
        .respond_with(page_not_exist())
        .expect(1)
        .mount(&server)
        .await;

    let miss_cache = MissCache::default();
    let first = TwitterTool::builder()
        .config(config(&server.uri()))
        .miss_cache(miss_cache.clone())
        .build()
        .unwrap();
    let second = TwitterTool::builder()
        .config(config(&server.uri()))
        .miss_cache(miss_cache.clone())
        .build()
        .unwrap();

    let target = UserTarget::from("gone");
    assert!(first.followers_list(&target).await.is_none());
    assert!(second.followers_list(&target).await.is_none());
    assert!(miss_cache.get("gone"));

    miss_cache.remove("gone").unwrap();
    assert!(!second.miss_cache().get("gone"));
}

fn followers_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "users": [user_json(6253282, "TwitterAPI")],
        "next_cursor": 0,
        "previous_cursor": 0
    }))
}

fn dumped_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_failed_response_dump_does_not_hide_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/show.json"))
        .respond_with(page_not_exist())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/followers/list.json"))
        .respond_with(followers_page())
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let mut config = config(&server.uri());
    config.debug = true;
    config.log_dir = Some(tmp.path().join("missing"));
    let tool = TwitterTool::builder().config(config).build().unwrap();

    assert!(tool.show_user(&UserTarget::from("gone")).await.is_none());
    assert!(tool.miss_cache().get("gone"));
    let followers = tool.followers_list(&UserTarget::from("TwitterAPI")).await.unwrap();
    assert_eq!(followers.users[0].screen_name, "TwitterAPI");
}

#[tokio::test]
async fn test_response_dump_follows_debug_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/followers/list.json"))
        .respond_with(followers_page())
        .mount(&server)
        .await;

    let tmp = tempfile::TempDir::new().unwrap();
    let target = UserTarget::from("TwitterAPI");

    let mut quiet = config(&server.uri());
    quiet.log_dir = Some(tmp.path().to_path_buf());
    let tool = TwitterTool::builder().config(quiet).build().unwrap();
    assert!(tool.followers_list(&target).await.is_some());
    assert!(dumped_files(tmp.path()).is_empty());

    let mut verbose = config(&server.uri());
    verbose.debug = true;
    verbose.log_dir = Some(tmp.path().to_path_buf());
    let tool = TwitterTool::builder().config(verbose).build().unwrap();
    assert!(tool.followers_list(&target).await.is_some());

    let files = dumped_files(tmp.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("twitter_FollowersList_"));
    let dumped = std::fs::read_to_string(tmp.path().join(&files[0])).unwrap();
    assert!(dumped.contains("\"screen_name\":\"TwitterAPI\""));
}
