#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use codebuild_client::CodeBuild;
use git_webhook_handler::{config::WebhookOptions, handler::handler, models::WebhookResponse};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use pipeline_entrypoint::{PipelineEntrypoint, load_aws_config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    PipelineEntrypoint::default().init();
    tracing::trace!("initiating lambda");

    let options = WebhookOptions::from_env().context("webhook options should be valid")?;
    tracing::info!(options=?options, "loaded webhook options");

    let config = load_aws_config().await;
    let codebuild = CodeBuild::new(aws_sdk_codebuild::Client::new(&config));

    // Shared references
    let shared_codebuild = Arc::new(codebuild);
    let shared_options = Arc::new(options);

    let func = service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
        let codebuild = shared_codebuild.clone();
        let options = shared_options.clone();

        async move {
            let response: WebhookResponse =
                handler(codebuild.as_ref(), options.as_ref(), event.payload).await;
            Ok::<_, Error>(response)
        }
    });

    run(func).await
}
