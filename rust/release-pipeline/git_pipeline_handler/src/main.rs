#![recursion_limit = "256"]

use std::sync::Arc;

use codepipeline_client::CodePipeline;
use git_pipeline_handler::{config::EnvParameters, context::Context, handler::handler};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use pipeline_entrypoint::{PipelineEntrypoint, load_aws_config};
use s3_client::S3;

#[tokio::main]
async fn main() -> Result<(), Error> {
    PipelineEntrypoint::default().init();
    tracing::trace!("initiating lambda");

    let env = EnvParameters::from_env();
    tracing::info!(env=?env, "loaded environment parameters");

    let config = load_aws_config().await;
    let s3 = S3::from_sdk_config(&config, s3_client::DEFAULT_MAX_ATTEMPTS);
    let codepipeline = CodePipeline::new(aws_sdk_codepipeline::Client::new(&config));

    tracing::trace!("initialized clients");

    // Shared references
    let shared_ctx = Arc::new(Context::new(s3, codepipeline, env));

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let ctx = shared_ctx.clone();

        async move {
            handler(ctx.as_ref(), event.payload, &event.context.request_id)
                .await
                .map_err(Error::from)
        }
    });

    run(func).await
}
