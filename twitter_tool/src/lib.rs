mod cache;
pub mod config;
mod error;
mod tool;

pub use cache::*;
pub use config::TwitterToolConfig;
pub use error::*;
pub use tool::{paging, TwitterTool, TwitterToolBuilder};

pub use twitter_client::{Credentials, Paging, Status, TwitterClient, TwitterConfig, User, UserPage, UserTarget};
