use phf::phf_map;

pub const REST_API_HOST: &str = "api.twitter.com";
pub const REST_API_VERSION: &str = "1.1";
pub const USER_AGENT: &str = concat!("twitter_tool/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size the REST API applies when a request carries no `count`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Cursor value requesting the first page of a cursored list.
pub const FIRST_CURSOR: i64 = -1;

/// Code attached to `errors[]` when the requested account or resource does not exist,
/// which is what suspended and deactivated accounts report.
pub const PAGE_NOT_EXIST_CODE: i32 = 34;
/// Code used when a failure carries no upstream classification.
pub const NO_ERROR_CODE: i32 = -1;

pub const REST_PATHS: phf::Map<&str, &str> = phf_map! {
    "UserTimeline" => "/statuses/user_timeline.json",
    "ShowUser" => "/users/show.json",
    "FollowersList" => "/followers/list.json",
    "UserListMembers" => "/lists/members.json",
    "UserListStatuses" => "/lists/statuses.json",
};
