mod job_result;

pub use job_result::JobFailure;

#[derive(Clone, Debug)]
pub struct CodePipeline {
    /// Inner CodePipeline client
    inner: aws_sdk_codepipeline::Client,
}

impl CodePipeline {
    pub fn new(inner: aws_sdk_codepipeline::Client) -> Self {
        Self { inner }
    }

    /// Marks the job of a lambda invoke action as succeeded
    #[tracing::instrument(skip(self))]
    pub async fn put_job_success(&self, job_id: &str) -> anyhow::Result<()> {
        job_result::put_job_success(&self.inner, job_id).await
    }

    /// Marks the job of a lambda invoke action as failed
    #[tracing::instrument(skip(self))]
    pub async fn put_job_failure(&self, job_id: &str, failure: &JobFailure) -> anyhow::Result<()> {
        job_result::put_job_failure(&self.inner, job_id, failure).await
    }
}
