use anyhow::Context;
use aws_sdk_codebuild::{operation::start_build::StartBuildOutput, types::Build};

/// The response of a StartBuild call, in the same shape the CodeBuild api returns it
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartedBuild {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSummary>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator: Option<String>,
}

impl From<&Build> for BuildSummary {
    fn from(build: &Build) -> Self {
        BuildSummary {
            id: build.id().map(str::to_string),
            arn: build.arn().map(str::to_string),
            build_number: build.build_number(),
            project_name: build.project_name().map(str::to_string),
            source_version: build.source_version().map(str::to_string),
            build_status: build.build_status().map(|s| s.as_str().to_string()),
            current_phase: build.current_phase().map(str::to_string),
            initiator: build.initiator().map(str::to_string),
        }
    }
}

impl From<&StartBuildOutput> for StartedBuild {
    fn from(output: &StartBuildOutput) -> Self {
        StartedBuild {
            build: output.build_value().map(BuildSummary::from),
        }
    }
}

#[tracing::instrument(skip(client))]
pub(crate) async fn start_build(
    client: &aws_sdk_codebuild::Client,
    project_name: &str,
    source_version: &str,
) -> anyhow::Result<StartedBuild> {
    let response = client
        .start_build()
        .project_name(project_name)
        .source_version(source_version)
        .send()
        .await
        .context(format!("unable to start build for project {project_name}"))?;

    let started = StartedBuild::from(&response);
    tracing::info!(build_id = ?started.build.as_ref().and_then(|b| b.id.as_deref()), "build started");

    Ok(started)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_codebuild::types::StatusType;

    #[test]
    fn summary_copies_build_fields() {
        let build = Build::builder()
            .id("svc:1234")
            .arn("arn:aws:codebuild:us-east-1:123456789012:build/svc:1234")
            .build_number(7)
            .project_name("svc")
            .source_version("main")
            .build_status(StatusType::InProgress)
            .current_phase("QUEUED")
            .build();

        let summary = BuildSummary::from(&build);
        assert_eq!(summary.id.as_deref(), Some("svc:1234"));
        assert_eq!(summary.build_number, Some(7));
        assert_eq!(summary.build_status.as_deref(), Some("IN_PROGRESS"));
        assert_eq!(summary.initiator, None);
    }

    #[test]
    fn started_build_reads_output_build() {
        let output = StartBuildOutput::builder()
            .build_value(Build::builder().id("svc:42").project_name("svc").build())
            .build();

        assert_eq!(
            StartedBuild::from(&output),
            StartedBuild {
                build: Some(BuildSummary {
                    id: Some("svc:42".to_string()),
                    project_name: Some("svc".to_string()),
                    ..Default::default()
                }),
            }
        );

        let empty = StartBuildOutput::builder().build();
        assert_eq!(StartedBuild::from(&empty), StartedBuild::default());
    }

    #[test]
    fn absent_fields_are_omitted() {
        let started = StartedBuild {
            build: Some(BuildSummary {
                id: Some("svc:1".to_string()),
                project_name: Some("svc".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(
            serde_json::to_string(&started).unwrap(),
            r#"{"build":{"id":"svc:1","projectName":"svc"}}"#
        );
    }
}
