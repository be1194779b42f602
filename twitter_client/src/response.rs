use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, VecSkipError};

use crate::util::twitter_date_format;

// Entities

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UrlEntity {
    pub url: String,
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub expanded_url: String,
    pub indices: (u32, u32),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HashtagEntity {
    pub text: String,
    pub indices: (u32, u32),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserMentionEntity {
    pub id: u64,
    pub screen_name: String,
    #[serde(default)]
    pub name: String,
    pub indices: (u32, u32),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Entities {
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default)]
    pub user_mentions: Vec<UserMentionEntity>,
}

// User

#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub id: u64,
    #[serde(with = "twitter_date_format")]
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub screen_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub followers_count: u32,
    #[serde(default)]
    pub friends_count: u32,
    #[serde(default)]
    pub listed_count: u32,
    #[serde(rename = "favourites_count", default)]
    pub favorite_count: u32,
    #[serde(default)]
    pub statuses_count: u32,
    pub profile_image_url_https: Option<String>,
    pub profile_banner_url: Option<String>,
}

// Status

#[derive(Deserialize, Serialize, Debug)]
pub struct StatusResponse {
    pub id: u64,
    #[serde(with = "twitter_date_format")]
    pub created_at: DateTime<Utc>,
    /// Present on `tweet_mode=extended` payloads.
    pub full_text: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Entities,
    pub user: Option<UserResponse>,
    pub in_reply_to_status_id: Option<u64>,
    pub in_reply_to_screen_name: Option<String>,
    pub lang: Option<String>,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub retweeted: bool,
    #[serde(default)]
    pub favorite_count: u32,
    #[serde(default)]
    pub retweet_count: u32,
    pub retweeted_status: Option<Box<StatusResponse>>,
}

/// Top-level array of statuses. Entries that fail to parse are dropped.
#[serde_as]
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct StatusListResponse(#[serde_as(as = "VecSkipError<_>")] pub Vec<StatusResponse>);

// Cursored lists

#[serde_as]
#[derive(Deserialize, Debug)]
pub struct CursoredUsersResponse {
    #[serde_as(as = "VecSkipError<_>")]
    pub users: Vec<UserResponse>,
    #[serde(default)]
    pub next_cursor: i64,
    #[serde(default)]
    pub previous_cursor: i64,
}

// Errors

#[derive(Deserialize, Debug)]
pub struct ApiErrorEntry {
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// `{"errors": [{"code": 34, "message": "Sorry, that page does not exist."}]}`
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
    /// Some endpoints answer `{"error": "Not authorized."}` instead.
    pub error: Option<String>,
}
