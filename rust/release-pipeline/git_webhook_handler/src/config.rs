use thiserror::Error;

/// Enables the diagnostic `GET` echo of the merged parameters
pub const ALLOW_GET_VAR: &str = "GITWEBHOOK_ALLOW_GET";
/// Lets api gateway stage variables override `projectName`
pub const STAGE_VARIABLES_VAR: &str = "GITWEBHOOK_STAGE_VARIABLES";

/// Switches between the two flavours of the webhook.
///
/// One deployment answers `GET` with the merged parameters and reads
/// `projectName` from stage variables as well as the query string. The other
/// only accepts `POST` and only reads the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebhookOptions {
    /// Answer `GET` with the merged parameters instead of rejecting it
    pub allow_get: bool,
    /// Merge api gateway stage variables underneath the query string parameters
    pub stage_variables: bool,
}

impl Default for WebhookOptions {
    fn default() -> Self {
        WebhookOptions {
            allow_get: true,
            stage_variables: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{var_name} must be a boolean, got {value}")]
pub struct InvalidFlag {
    var_name: &'static str,
    value: String,
}

impl WebhookOptions {
    pub fn from_env() -> Result<Self, InvalidFlag> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the options from an arbitrary variable lookup. Unset variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InvalidFlag>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = WebhookOptions::default();
        Ok(WebhookOptions {
            allow_get: read_flag(&lookup, ALLOW_GET_VAR)?.unwrap_or(defaults.allow_get),
            stage_variables: read_flag(&lookup, STAGE_VARIABLES_VAR)?
                .unwrap_or(defaults.stage_variables),
        })
    }
}

fn read_flag<F>(lookup: &F, var_name: &'static str) -> Result<Option<bool>, InvalidFlag>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(value) = lookup(var_name) else {
        return Ok(None);
    };
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(InvalidFlag { var_name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_channels() {
        let options = WebhookOptions::from_lookup(|_| None).unwrap();
        assert_eq!(options, WebhookOptions::default());
        assert!(options.allow_get);
        assert!(options.stage_variables);
    }

    #[test]
    fn reads_flags() {
        let options = WebhookOptions::from_lookup(|name| match name {
            ALLOW_GET_VAR => Some("FALSE".to_string()),
            STAGE_VARIABLES_VAR => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            options,
            WebhookOptions {
                allow_get: false,
                stage_variables: false
            }
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = WebhookOptions::from_lookup(|name| {
            (name == ALLOW_GET_VAR).then(|| "maybe".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "GITWEBHOOK_ALLOW_GET must be a boolean, got maybe"
        );
    }
}
