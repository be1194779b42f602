use reqwest::StatusCode;

use crate::response::{CursoredUsersResponse, StatusListResponse, UserResponse};
use crate::result::{Status, User, UserPage};
use crate::{api_error, Error, NO_ERROR_CODE, PAGE_NOT_EXIST_CODE};

fn read_fixture<R: serde::de::DeserializeOwned>(name: &str) -> R {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(format!("{}.json", name));
    let content = std::fs::read_to_string(path).unwrap();
    let deserializer = &mut serde_json::Deserializer::from_str(&content);
    serde_path_to_error::deserialize(deserializer).unwrap()
}

#[test]
fn test_parse_show_user() {
    let response: UserResponse = read_fixture("user");
    let user: User = response.into();
    assert_eq!(user.id, 6253282);
    assert_eq!(user.screen_name, "TwitterAPI");
    assert_eq!(user.favorite_count, 31);
    assert_eq!(user.created_at.to_rfc3339(), "2007-05-23T06:01:13+00:00");
}

#[test]
fn test_parse_user_timeline_skips_broken_entries() {
    let response: StatusListResponse = read_fixture("user_timeline");
    let statuses: Vec<Status> = response.into();
    assert_eq!(statuses.len(), 2);

    let retweet = &statuses[0];
    assert!(retweet.is_retweet());
    assert_eq!(retweet.user.as_ref().map(|u| u.screen_name.as_str()), Some("TwitterAPI"));
    assert_eq!(retweet.user_mentions[0].screen_name, "TwitterDev");
    let retweeted = retweet.retweeted_status.as_ref().unwrap();
    assert_eq!(retweeted.urls[0].expanded_url, "https://cards.twitter.com/cards/18ce53wgo4h/3xo1c");
    assert!(retweeted.user.is_none());

    let extended = &statuses[1];
    assert_eq!(extended.text, "Tweet with a #hashtag and a link https://t.co/example");
    assert_eq!(extended.hashtags[0].text, "hashtag");
    assert!(extended.favorited);
}

#[test]
fn test_parse_followers_list() {
    let response: CursoredUsersResponse = read_fixture("followers_list");
    let page: UserPage = response.into();
    assert_eq!(page.users.len(), 2);
    assert!(page.has_next());
    assert!(!page.has_previous());
    assert_eq!(page.users[0].description, "");
    assert_eq!(page.users[1].followers_count, 0);
}

#[test]
fn test_api_error_reads_error_code() {
    let content = std::fs::read_to_string(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/error_page_not_exist.json"),
    )
    .unwrap();
    let error = api_error(StatusCode::NOT_FOUND, &content);
    assert_eq!(error.error_code(), PAGE_NOT_EXIST_CODE);
    assert_eq!(error.status(), Some(404));
    assert!(error.to_string().contains("Sorry, that page does not exist."));
}

#[test]
fn test_api_error_without_code() {
    let content = std::fs::read_to_string(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/error_not_authorized.json"),
    )
    .unwrap();
    let error = api_error(StatusCode::UNAUTHORIZED, &content);
    assert_eq!(error.error_code(), NO_ERROR_CODE);
    assert!(matches!(error, Error::Api { ref message, .. } if message == "Not authorized."));

    let error = api_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert_eq!(error.error_code(), NO_ERROR_CODE);
    assert!(matches!(error, Error::Api { status: 502, ref message, .. } if message == "Bad Gateway"));
}
