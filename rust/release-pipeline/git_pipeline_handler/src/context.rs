use crate::config::EnvParameters;

/// Everything an invocation needs, built once per cold start
#[derive(Debug)]
pub struct Context<S, R> {
    pub store: S,
    pub reporter: R,
    pub env: EnvParameters,
}

impl<S, R> Context<S, R> {
    pub fn new(store: S, reporter: R, env: EnvParameters) -> Self {
        Self {
            store,
            reporter,
            env,
        }
    }
}
