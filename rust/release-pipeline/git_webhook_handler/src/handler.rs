use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use invocation_params::InvocationParams;

use crate::{
    config::WebhookOptions,
    error::WebhookError,
    models::{PushDecision, PushEvent, WebhookResponse},
    ports::BuildService,
};

pub const PROJECT_NAME: &str = "projectName";

/// Handles a single webhook call. Every outcome, including errors, becomes a response.
#[tracing::instrument(skip_all, fields(http_method = %request.http_method))]
pub async fn handler<B: BuildService>(
    build_service: &B,
    options: &WebhookOptions,
    request: ApiGatewayProxyRequest,
) -> WebhookResponse {
    tracing::debug!(request=?request, "received event");

    match process(build_service, options, request).await {
        Ok(body) => {
            tracing::info!(body = %body, "success");
            WebhookResponse::ok(body)
        }
        Err(err) => {
            tracing::error!(error=?err, kind = err.kind(), "webhook failed");
            WebhookResponse::bad_request(err.to_string())
        }
    }
}

/// Merges the defaults, stage variables and query string parameters, in that order
pub fn merge_params(
    options: &WebhookOptions,
    request: &ApiGatewayProxyRequest,
) -> InvocationParams {
    let stage_variables = request
        .stage_variables
        .iter()
        .filter(|_| options.stage_variables)
        .map(|(k, v)| (k.as_str(), v.as_str()));

    InvocationParams::default()
        .with_unset(PROJECT_NAME)
        .layer(stage_variables)
        .layer(request.query_string_parameters.iter())
}

async fn process<B: BuildService>(
    build_service: &B,
    options: &WebhookOptions,
    request: ApiGatewayProxyRequest,
) -> Result<String, WebhookError> {
    let params = merge_params(options, &request);

    match request.http_method.as_str() {
        "GET" if options.allow_get => return Ok(serde_json::to_string(&params)?),
        "POST" => (),
        _ if options.allow_get => {
            return Err(WebhookError::MethodNotAllowed(
                "It only accepts GET and POST requests.",
            ));
        }
        _ => {
            return Err(WebhookError::MethodNotAllowed(
                "It only accepts POST requests.",
            ));
        }
    }

    let body = request
        .body
        .as_deref()
        .ok_or_else(|| WebhookError::MalformedRequest("request body is missing".to_string()))?;
    let event: PushEvent = serde_json::from_str(body)
        .map_err(|e| WebhookError::MalformedRequest(e.to_string()))?;
    tracing::debug!(event=?event, "received body");

    match event.decide(params.get(PROJECT_NAME))? {
        PushDecision::Skip(skip) => {
            tracing::info!(reason = skip.message, "skipping build");
            Ok(serde_json::to_string(&skip)?)
        }
        PushDecision::Build(build_params) => {
            tracing::info!(build_params=?build_params, "starting build");
            let started = build_service
                .start_build(&build_params)
                .await
                .map_err(WebhookError::UpstreamServiceError)?;
            Ok(serde_json::to_string(&started)?)
        }
    }
}
