use codepipeline_client::{CodePipeline, JobFailure};
use s3_client::{ObjectCannedAcl, S3};

/// Where artifacts are read from and promoted to
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactStore: Send + Sync + 'static {
    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;

    /// Uploads the object, granting the bucket owner full control over it
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Reports the terminal status of a job back to the pipeline
#[cfg_attr(test, mockall::automock)]
pub trait JobReporter: Send + Sync + 'static {
    fn succeed(&self, job_id: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn fail(
        &self,
        job_id: &str,
        failure: &JobFailure,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl ArtifactStore for S3 {
    async fn get_object(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        self.get(bucket, key).await
    }

    async fn put_object(&self, bucket: &str, key: &str, content: &[u8]) -> anyhow::Result<()> {
        self.put_with_acl(bucket, key, content, ObjectCannedAcl::BucketOwnerFullControl)
            .await
    }
}

impl JobReporter for CodePipeline {
    async fn succeed(&self, job_id: &str) -> anyhow::Result<()> {
        self.put_job_success(job_id).await
    }

    async fn fail(&self, job_id: &str, failure: &JobFailure) -> anyhow::Result<()> {
        self.put_job_failure(job_id, failure).await
    }
}
