use thiserror::Error;

/// Any failure which aborts the promotion. Each one is reported to the pipeline as a failed job.
#[derive(Debug, Error)]
pub enum PromotionError {
    #[error("could not read the job: {0}")]
    MalformedJob(String),
    #[error("{0}")]
    UnsupportedArtifactLocation(String),
    #[error("could not decompress the artifact: {0}")]
    DecompressionError(String),
    #[error("The bucketName or objectKey data are not defined in userParameters.")]
    MissingDestination,
    #[error("{0:#}")]
    UpstreamServiceError(anyhow::Error),
}

impl PromotionError {
    pub fn kind(&self) -> &'static str {
        match self {
            PromotionError::MalformedJob(_) => "MalformedJob",
            PromotionError::UnsupportedArtifactLocation(_) => "UnsupportedArtifactLocation",
            PromotionError::DecompressionError(_) => "DecompressionError",
            PromotionError::MissingDestination => "MissingDestination",
            PromotionError::UpstreamServiceError(_) => "UpstreamServiceError",
        }
    }
}
