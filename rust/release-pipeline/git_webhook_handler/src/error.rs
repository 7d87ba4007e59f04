use thiserror::Error;

/// Everything that turns a webhook call into a `400` response
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("{0}")]
    MethodNotAllowed(&'static str),
    #[error("{0}")]
    MalformedRequest(String),
    #[error("{0:#}")]
    UpstreamServiceError(anyhow::Error),
    #[error("unable to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebhookError {
    pub fn kind(&self) -> &'static str {
        match self {
            WebhookError::MethodNotAllowed(_) => "MethodNotAllowed",
            WebhookError::MalformedRequest(_) => "MalformedRequest",
            WebhookError::UpstreamServiceError(_) => "UpstreamServiceError",
            WebhookError::Serialization(_) => "Serialization",
        }
    }
}
