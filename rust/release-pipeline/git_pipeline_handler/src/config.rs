use invocation_params::InvocationParams;

pub const ACCOUNT_VAR: &str = "GITPIPELINE_ACCOUNT";
pub const BUCKET_VAR: &str = "GITPIPELINE_S3BUCKET";
pub const OBJECT_KEY_VAR: &str = "GITPIPELINE_S3KEY";

pub const ACCOUNT_NAME: &str = "accountName";
pub const BUCKET_NAME: &str = "bucketName";
pub const OBJECT_KEY: &str = "objectKey";

pub const DEFAULT_ACCOUNT_NAME: &str = "sandbox";

/// The promotion parameters provided by the deployment of the lambda.
///
/// They sit between the built-in defaults and the `UserParameters` of each
/// pipeline action, so one function can serve several pipelines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvParameters {
    pub account_name: Option<String>,
    pub bucket_name: Option<String>,
    pub object_key: Option<String>,
}

impl EnvParameters {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Empty values are treated as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let read = |name: &'static str| lookup(name).filter(|v| !v.is_empty());
        EnvParameters {
            account_name: read(ACCOUNT_VAR),
            bucket_name: read(BUCKET_VAR),
            object_key: read(OBJECT_KEY_VAR),
        }
    }

    /// The values which are set, keyed by parameter name
    pub fn layer(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ACCOUNT_NAME, self.account_name.as_deref()),
            (BUCKET_NAME, self.bucket_name.as_deref()),
            (OBJECT_KEY, self.object_key.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

/// The built-in defaults: the sandbox account and no destination
pub fn default_params() -> InvocationParams {
    InvocationParams::from_defaults([
        (ACCOUNT_NAME, DEFAULT_ACCOUNT_NAME),
        (BUCKET_NAME, ""),
        (OBJECT_KEY, ""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_set_variables() {
        let env = EnvParameters::from_lookup(|name| match name {
            ACCOUNT_VAR => Some("prod".to_string()),
            BUCKET_VAR => Some("releases".to_string()),
            OBJECT_KEY_VAR => Some(String::new()),
            _ => None,
        });

        assert_eq!(
            env,
            EnvParameters {
                account_name: Some("prod".to_string()),
                bucket_name: Some("releases".to_string()),
                object_key: None,
            }
        );
        assert_eq!(
            env.layer().collect::<Vec<_>>(),
            vec![(ACCOUNT_NAME, "prod"), (BUCKET_NAME, "releases")]
        );
    }

    #[test]
    fn defaults_resolve_every_key() {
        let params = default_params();
        assert_eq!(params.get(ACCOUNT_NAME), Some(DEFAULT_ACCOUNT_NAME));
        assert_eq!(params.get(BUCKET_NAME), Some(""));
        assert_eq!(params.get(OBJECT_KEY), Some(""));
    }
}
