use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::consts::DEFAULT_PAGE_SIZE;
use crate::response::{CursoredUsersResponse, StatusListResponse, StatusResponse, UserResponse};
use crate::util::twitter_date_format;

pub use crate::response::{HashtagEntity, UrlEntity, UserMentionEntity};

/// Account addressed either by screen name or by numeric id.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserTarget {
    Handle(String),
    Id(u64),
}

impl UserTarget {
    /// Query parameters selecting this account. `prefix` is `""` for the account itself
    /// and `"owner_"` for the owner of a list.
    pub(crate) fn params(&self, prefix: &str) -> Vec<(String, String)> {
        match self {
            UserTarget::Handle(handle) => vec![(format!("{}screen_name", prefix), handle.clone())],
            UserTarget::Id(id) if prefix.is_empty() => vec![("user_id".to_string(), id.to_string())],
            UserTarget::Id(id) => vec![(format!("{}id", prefix), id.to_string())],
        }
    }

    /// `@name` is always a handle, an all-digit string is an id, anything else is a handle.
    pub fn parse(s: &str) -> UserTarget {
        if let Some(handle) = s.strip_prefix('@') {
            return UserTarget::Handle(handle.to_string());
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return UserTarget::Handle(s.to_string());
        }
        match s.parse::<u64>() {
            Ok(id) => UserTarget::Id(id),
            Err(_) => UserTarget::Handle(s.to_string()),
        }
    }
}

impl Display for UserTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UserTarget::Handle(handle) => write!(f, "{}", handle),
            UserTarget::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for UserTarget {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserTarget::parse(s))
    }
}

impl From<u64> for UserTarget {
    fn from(id: u64) -> Self {
        UserTarget::Id(id)
    }
}

impl From<&str> for UserTarget {
    fn from(handle: &str) -> Self {
        UserTarget::Handle(handle.to_string())
    }
}

impl From<String> for UserTarget {
    fn from(handle: String) -> Self {
        UserTarget::Handle(handle)
    }
}

/// 1-based page number and page size of a paged timeline request.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u32,
    pub count: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Paging {
            page: 1,
            count: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    #[serde(with = "twitter_date_format")]
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub screen_name: String,
    pub description: String,
    pub location: String,
    pub url: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: u32,
    pub friends_count: u32,
    pub listed_count: u32,
    pub favorite_count: u32,
    pub statuses_count: u32,
    pub profile_image_url_https: Option<String>,
    pub profile_banner_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Status {
    pub id: u64,
    #[serde(with = "twitter_date_format")]
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub urls: Vec<UrlEntity>,
    pub hashtags: Vec<HashtagEntity>,
    pub user_mentions: Vec<UserMentionEntity>,
    pub user: Option<User>,
    pub in_reply_to_status_id: Option<u64>,
    pub in_reply_to_screen_name: Option<String>,
    pub lang: Option<String>,
    pub favorited: bool,
    pub retweeted: bool,
    pub favorite_count: u32,
    pub retweet_count: u32,
    pub retweeted_status: Option<Box<Status>>,
}

/// One page of a cursored user list. A cursor of `0` means there is no page in that direction.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub next_cursor: i64,
    pub previous_cursor: i64,
}

// MARK: Helpers

impl UserPage {
    pub fn has_next(&self) -> bool {
        self.next_cursor != 0
    }

    pub fn has_previous(&self) -> bool {
        self.previous_cursor != 0
    }
}

impl Status {
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }
}

// MARK: Conversions

impl From<UserResponse> for User {
    fn from(user: UserResponse) -> Self {
        User {
            id: user.id,
            created_at: user.created_at,
            name: user.name,
            screen_name: user.screen_name,
            description: user.description.unwrap_or_default(),
            location: user.location.unwrap_or_default(),
            url: user.url,
            protected: user.protected,
            verified: user.verified,
            followers_count: user.followers_count,
            friends_count: user.friends_count,
            listed_count: user.listed_count,
            favorite_count: user.favorite_count,
            statuses_count: user.statuses_count,
            profile_image_url_https: user.profile_image_url_https,
            profile_banner_url: user.profile_banner_url,
        }
    }
}

impl From<StatusResponse> for Status {
    fn from(status: StatusResponse) -> Self {
        Status {
            id: status.id,
            created_at: status.created_at,
            text: status.full_text.or(status.text).unwrap_or_default(),
            urls: status.entities.urls,
            hashtags: status.entities.hashtags,
            user_mentions: status.entities.user_mentions,
            user: status.user.map(User::from),
            in_reply_to_status_id: status.in_reply_to_status_id,
            in_reply_to_screen_name: status.in_reply_to_screen_name,
            lang: status.lang,
            favorited: status.favorited,
            retweeted: status.retweeted,
            favorite_count: status.favorite_count,
            retweet_count: status.retweet_count,
            retweeted_status: status.retweeted_status.map(|s| Box::new(Status::from(*s))),
        }
    }
}

impl From<StatusListResponse> for Vec<Status> {
    fn from(value: StatusListResponse) -> Self {
        value.0.into_iter().map(Status::from).collect()
    }
}

impl From<CursoredUsersResponse> for UserPage {
    fn from(value: CursoredUsersResponse) -> Self {
        UserPage {
            users: value.users.into_iter().map(User::from).collect(),
            next_cursor: value.next_cursor,
            previous_cursor: value.previous_cursor,
        }
    }
}
