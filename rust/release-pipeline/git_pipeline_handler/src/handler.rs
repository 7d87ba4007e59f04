use anyhow::Context as _;
use aws_lambda_events::event::codepipeline_job::CodePipelineJob;
use codepipeline_client::JobFailure;
use invocation_params::{InvocationParams, parse_query_string};

use crate::{
    artifact,
    config::{ACCOUNT_NAME, BUCKET_NAME, EnvParameters, OBJECT_KEY, default_params},
    context::Context,
    error::PromotionError,
    models::{InputArtifactExt, JobOutcome, JobStatus, PipelineJobExt, parse_job, read_job_id},
    ports::{ArtifactStore, JobReporter},
    version::can_push,
};

/// Runs the promotion for a pipeline job and reports the result back to the pipeline.
///
/// Only a failure to report, or an event without a job id, is returned as an error.
/// Promotion failures, including a job which cannot be read, are reported to the
/// pipeline and returned as a failed [JobOutcome].
#[tracing::instrument(skip(ctx, event), fields(job_id = ?read_job_id(&event)))]
pub async fn handler<S: ArtifactStore, R: JobReporter>(
    ctx: &Context<S, R>,
    event: serde_json::Value,
    request_id: &str,
) -> anyhow::Result<JobOutcome> {
    let Some(job_id) = read_job_id(&event).map(str::to_string) else {
        anyhow::bail!("the event does not carry a CodePipeline job id");
    };

    let result = match parse_job(event) {
        Ok(job) => {
            tracing::debug!(job=?job, "received job");
            promote(&ctx.store, &ctx.env, &job).await
        }
        Err(err) => Err(err),
    };

    let status = match result {
        Ok(status) => {
            ctx.reporter
                .succeed(&job_id)
                .await
                .context("unable to report job success")?;
            tracing::info!("success");
            status
        }
        Err(err) => {
            tracing::error!(error=?err, kind = err.kind(), "promotion failed");
            let failure = JobFailure {
                message: err.to_string(),
                external_execution_id: request_id.to_string(),
            };
            ctx.reporter
                .fail(&job_id, &failure)
                .await
                .context("unable to report job failure")?;
            JobStatus::Failed {
                kind: err.kind(),
                message: failure.message,
            }
        }
    };

    Ok(JobOutcome { job_id, status })
}

/// Merges the defaults, environment and `UserParameters` of the job, in that order
pub fn resolve_params(env: &EnvParameters, user_parameters: Option<&str>) -> InvocationParams {
    let user = parse_query_string(user_parameters.unwrap_or_default());
    default_params().layer(env.layer()).layer(user)
}

/// Pulls the input artifact and pushes it to the destination when its version is allowed in the account
#[tracing::instrument(skip_all)]
pub async fn promote<S: ArtifactStore>(
    store: &S,
    env: &EnvParameters,
    job: &CodePipelineJob,
) -> Result<JobStatus, PromotionError> {
    let params = resolve_params(env, job.user_parameters());
    tracing::debug!(params=?params, "resolved parameters");

    let source = job.input_artifact()?.s3_source()?;
    let archive = store
        .get_object(source.bucket_name, source.object_key)
        .await
        .map_err(PromotionError::UpstreamServiceError)?;

    // scratch space only lives until the version is read
    let version = artifact::extract(&archive)?.version();

    let account_name = params.get(ACCOUNT_NAME).unwrap_or_default().to_string();
    if !can_push(&account_name, &version) {
        tracing::info!(version = %version, "skip pushing to the {account_name} account");
        return Ok(JobStatus::Skipped {
            account_name,
            version,
        });
    }

    tracing::info!(version = %version, "pushing to the {account_name} account");
    let (Some(bucket_name), Some(object_key)) = (
        params.get_non_empty(BUCKET_NAME),
        params.get_non_empty(OBJECT_KEY),
    ) else {
        return Err(PromotionError::MissingDestination);
    };

    store
        .put_object(bucket_name, object_key, &archive)
        .await
        .map_err(PromotionError::UpstreamServiceError)?;

    Ok(JobStatus::Promoted {
        account_name,
        version,
        bucket_name: bucket_name.to_string(),
        object_key: object_key.to_string(),
    })
}
