use std::collections::BTreeMap;

use crate::error::WebhookError;

/// Length of the `refs/heads/` namespace which is dropped from the pushed ref
pub const REF_PREFIX_LEN: usize = 11;

/// The api gateway proxy response. `statusCode` is sent as a string.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub status_code: String,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl WebhookResponse {
    fn new(status_code: &str, body: String) -> Self {
        WebhookResponse {
            status_code: status_code.to_string(),
            body,
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
        }
    }

    pub fn ok(body: String) -> Self {
        Self::new("200", body)
    }

    pub fn bad_request(message: String) -> Self {
        Self::new("400", message)
    }
}

/// A source control push notification
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct PushEvent {
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub base_ref: Option<String>,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct Repository {
    #[serde(default)]
    pub name: Option<String>,
}

/// A push which does not start a build
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Skip {
    pub status: &'static str,
    pub message: &'static str,
}

impl Skip {
    pub const BRANCH_DELETED: Skip = Skip {
        status: "skip",
        message: "the git branch is deleted",
    };

    pub const NOT_A_COMMIT: Skip = Skip {
        status: "skip",
        message: "it is not a commit.",
    };
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildParameters {
    pub project_name: String,
    pub source_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushDecision {
    Skip(Skip),
    Build(BuildParameters),
}

impl PushEvent {
    /// Decides what to do with the push. `project_override` wins over the repository name.
    pub fn decide(&self, project_override: Option<&str>) -> Result<PushDecision, WebhookError> {
        if self.deleted.unwrap_or(false) {
            return Ok(PushDecision::Skip(Skip::BRANCH_DELETED));
        }

        let Some(pushed_ref) = non_empty(self.base_ref.as_deref())
            .or_else(|| non_empty(self.git_ref.as_deref()))
        else {
            return Ok(PushDecision::Skip(Skip::NOT_A_COMMIT));
        };

        let project_name = non_empty(project_override)
            .or_else(|| {
                self.repository
                    .as_ref()
                    .and_then(|r| non_empty(r.name.as_deref()))
            })
            .ok_or_else(|| {
                WebhookError::MalformedRequest(
                    "projectName is not configured and the payload has no repository name"
                        .to_string(),
                )
            })?;

        Ok(PushDecision::Build(BuildParameters {
            project_name: project_name.to_string(),
            source_version: strip_ref_prefix(pushed_ref),
        }))
    }
}

/// Drops the first [REF_PREFIX_LEN] characters of the ref, e.g. `refs/heads/main` -> `main`
pub fn strip_ref_prefix(pushed_ref: &str) -> String {
    pushed_ref.chars().skip(REF_PREFIX_LEN).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
