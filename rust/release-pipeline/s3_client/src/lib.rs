use aws_config::SdkConfig;
use aws_sdk_s3::config::retry::RetryConfig;

pub use aws_sdk_s3::types::ObjectCannedAcl;

mod get;
mod put;

/// Number of attempts for a single S3 call, the first one included
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Builds a client from the shared config, overriding the retry policy
    /// with a standard policy of `max_attempts` attempts.
    pub fn from_sdk_config(config: &SdkConfig, max_attempts: u32) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .retry_config(RetryConfig::standard().with_max_attempts(max_attempts))
            .build();
        Self::new(aws_sdk_s3::Client::from_conf(s3_config))
    }

    /// Retrieves the provided key from the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        get::get(&self.inner, bucket, key).await
    }

    /// Puts the provided content into the bucket at the provided key with a canned acl.
    #[tracing::instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn put_with_acl(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        acl: ObjectCannedAcl,
    ) -> anyhow::Result<()> {
        put::put(&self.inner, bucket, key, content, acl).await
    }
}
