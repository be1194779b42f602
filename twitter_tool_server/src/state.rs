use twitter_tool::{Error as ToolError, MissCache, TwitterTool};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` when the tool could not be built from the configuration.
    pub twitter_tool: Option<TwitterTool>,
    /// Shared with `twitter_tool`, kept separately so it can be administered either way.
    pub miss_cache: MissCache,
}

impl AppState {
    pub fn tool(&self) -> Result<&TwitterTool> {
        match &self.twitter_tool {
            Some(tool) => Ok(tool),
            None => {
                tracing::warn!("Twitter tool not initialized");
                Err(ToolError::NotConfigured.into())
            }
        }
    }
}
