#![deny(missing_docs)]
//! Standardized initialization for the lambda binaries in this workspace.
//! Keeps tracing output consistent between the webhook and pipeline handlers.

mod aws;
mod environment;

pub use aws::{FALLBACK_REGION, load_aws_config};
pub use environment::{ENVIRONMENT_VAR, Environment, LogFormat, UnknownValue};
use tracing_subscriber::EnvFilter;

/// Defines how a lambda binary is initialized
#[derive(Debug)]
pub struct PipelineEntrypoint {
    env: Result<Environment, UnknownValue>,
}

impl Default for PipelineEntrypoint {
    /// Reads the environment from [ENVIRONMENT_VAR], falling back to production when unset
    fn default() -> Self {
        PipelineEntrypoint {
            env: Environment::from_env().map(|env| env.unwrap_or(Environment::Production)),
        }
    }
}

impl PipelineEntrypoint {
    /// consume self and initialize tracing for this binary.
    /// An unrecognized environment is logged once tracing is up and production is used instead.
    pub fn init(self) {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let env = self.env.as_ref().copied().unwrap_or(Environment::Production);

        match env.log_format() {
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        if let Err(err) = &self.env {
            tracing::warn!(error = %err, "falling back to {}", Environment::Production);
        }
        tracing::trace!(environment = %env, "initialized entrypoint");
    }
}
