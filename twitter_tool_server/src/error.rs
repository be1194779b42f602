use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use twitter_tool::Error as ToolError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("{0} not available")]
    NotFound(String),
}

#[derive(Debug)]
pub struct ServerError(anyhow::Error);

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

impl ServerError {
    pub(crate) fn status_code(&self) -> StatusCode {
        let err = &self.0;
        for cause in err.chain() {
            if let Some(err) = cause.downcast_ref::<RouteError>() {
                match err {
                    RouteError::NotFound(_) => return StatusCode::NOT_FOUND,
                }
            }
            if let Some(err) = cause.downcast_ref::<twitter_client::Error>() {
                match err {
                    twitter_client::Error::InvalidCredentials(_) => return StatusCode::SERVICE_UNAVAILABLE,
                    twitter_client::Error::NetworkError(_) => return StatusCode::BAD_GATEWAY,
                    twitter_client::Error::Api { .. } => return StatusCode::BAD_GATEWAY,
                    _ => return StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
            if let Some(err) = cause.downcast_ref::<ToolError>() {
                match err {
                    // Classified by its source, next in the chain.
                    ToolError::Client(_) => continue,
                    ToolError::InvalidKey => return StatusCode::BAD_REQUEST,
                    ToolError::NotConfigured => return StatusCode::SERVICE_UNAVAILABLE,
                    ToolError::MissingCredential(_) => return StatusCode::SERVICE_UNAVAILABLE,
                    ToolError::InvalidProperty { .. } => return StatusCode::SERVICE_UNAVAILABLE,
                    _ => return StatusCode::INTERNAL_SERVER_ERROR,
                }
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
