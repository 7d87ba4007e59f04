use anyhow::Context;
use aws_sdk_codepipeline::types::{FailureDetails, FailureType};

/// Details attached to a failed job. The failure type is always `JobFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFailure {
    pub message: String,
    /// Identifies the invocation which ran the job, e.g. the lambda request id
    pub external_execution_id: String,
}

impl JobFailure {
    fn to_failure_details(&self) -> anyhow::Result<FailureDetails> {
        FailureDetails::builder()
            .r#type(FailureType::JobFailed)
            .message(&self.message)
            .external_execution_id(&self.external_execution_id)
            .build()
            .context("unable to build failure details")
    }
}

#[tracing::instrument(skip(client))]
pub(crate) async fn put_job_success(
    client: &aws_sdk_codepipeline::Client,
    job_id: &str,
) -> anyhow::Result<()> {
    client
        .put_job_success_result()
        .job_id(job_id)
        .send()
        .await
        .context(format!("unable to report success for job {job_id}"))?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub(crate) async fn put_job_failure(
    client: &aws_sdk_codepipeline::Client,
    job_id: &str,
    failure: &JobFailure,
) -> anyhow::Result<()> {
    client
        .put_job_failure_result()
        .job_id(job_id)
        .failure_details(failure.to_failure_details()?)
        .send()
        .await
        .context(format!("unable to report failure for job {job_id}"))?;
    Ok(())
}
