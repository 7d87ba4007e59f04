use aws_lambda_events::event::codepipeline_job::{
    CodePipelineInputArtifact, CodePipelineJob, CodePipelineJobEvent,
};

use crate::error::PromotionError;

/// Location type of artifacts stored in s3
pub const S3_LOCATION_TYPE: &str = "S3";
/// Where the job id sits in a raw CodePipeline event
pub const JOB_ID_POINTER: &str = "/CodePipeline.job/id";

/// Reads the job id from the raw event.
/// The id is all that is needed to report back to the pipeline, so it is read apart from the rest of the job.
pub fn read_job_id(event: &serde_json::Value) -> Option<&str> {
    event
        .pointer(JOB_ID_POINTER)
        .and_then(serde_json::Value::as_str)
        .filter(|id| !id.is_empty())
}

/// Parses the full job out of the raw event
pub fn parse_job(event: serde_json::Value) -> Result<CodePipelineJob, PromotionError> {
    serde_json::from_value::<CodePipelineJobEvent>(event)
        .map(|event| event.code_pipeline_job)
        .map_err(|e| PromotionError::MalformedJob(e.to_string()))
}

pub trait PipelineJobExt {
    /// The first input artifact, which holds the build output
    fn input_artifact(&self) -> Result<&CodePipelineInputArtifact, PromotionError>;

    fn user_parameters(&self) -> Option<&str>;
}

impl PipelineJobExt for CodePipelineJob {
    fn input_artifact(&self) -> Result<&CodePipelineInputArtifact, PromotionError> {
        self.data.input_artifacts.first().ok_or_else(|| {
            PromotionError::UnsupportedArtifactLocation(
                "The job does not have an input artifact.".to_string(),
            )
        })
    }

    fn user_parameters(&self) -> Option<&str> {
        self.data
            .action_configuration
            .configuration
            .user_parameters
            .as_deref()
    }
}

/// The s3 object holding an input artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct S3Source<'a> {
    pub bucket_name: &'a str,
    pub object_key: &'a str,
}

pub trait InputArtifactExt {
    /// Resolves the s3 object holding the artifact. Any other location type is rejected.
    fn s3_source(&self) -> Result<S3Source<'_>, PromotionError>;
}

impl InputArtifactExt for CodePipelineInputArtifact {
    fn s3_source(&self) -> Result<S3Source<'_>, PromotionError> {
        let location = &self.location;
        match location.location_type.as_deref() {
            Some(S3_LOCATION_TYPE) => (),
            Some(location_type) => {
                return Err(PromotionError::UnsupportedArtifactLocation(format!(
                    "Could not handle the artifact of {location_type} type."
                )));
            }
            None => {
                return Err(PromotionError::UnsupportedArtifactLocation(
                    "The input artifact has no location type.".to_string(),
                ));
            }
        }

        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }
        match (
            non_empty(&location.s3_location.bucket_name),
            non_empty(&location.s3_location.object_key),
        ) {
            (Some(bucket_name), Some(object_key)) => Ok(S3Source {
                bucket_name,
                object_key,
            }),
            _ => Err(PromotionError::UnsupportedArtifactLocation(
                "The S3 input artifact does not define a bucketName and objectKey.".to_string(),
            )),
        }
    }
}

/// What the invocation did with the job, returned as the lambda result
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobOutcome {
    pub job_id: String,
    #[serde(flatten)]
    pub status: JobStatus,
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JobStatus {
    #[serde(rename_all = "camelCase")]
    Promoted {
        account_name: String,
        version: String,
        bucket_name: String,
        object_key: String,
    },
    #[serde(rename_all = "camelCase")]
    Skipped {
        account_name: String,
        version: String,
    },
    Failed {
        kind: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use cool_asserts::assert_matches;

    use super::*;

    const EVENT: &str = r#"{
        "CodePipeline.job": {
            "id": "11111111-abcd-1111-abcd-111111abcdef",
            "accountId": "111111111111",
            "data": {
                "actionConfiguration": {
                    "configuration": {
                        "FunctionName": "git-pipeline",
                        "UserParameters": "accountName=prod&bucketName=releases"
                    }
                },
                "inputArtifacts": [
                    {
                        "location": {
                            "s3Location": {
                                "bucketName": "codepipeline-artifacts",
                                "objectKey": "app/BuildOutput/abc.zip"
                            },
                            "type": "S3"
                        },
                        "revision": null,
                        "name": "BuildOutput"
                    }
                ],
                "outputArtifacts": [],
                "artifactCredentials": {
                    "secretAccessKey": "secret",
                    "sessionToken": "token",
                    "accessKeyId": "key"
                }
            }
        }
    }"#;

    fn artifact(json: &str) -> CodePipelineInputArtifact {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_codepipeline_event() {
        let event: serde_json::Value = serde_json::from_str(EVENT).unwrap();
        assert_eq!(
            read_job_id(&event),
            Some("11111111-abcd-1111-abcd-111111abcdef")
        );

        let job = parse_job(event).unwrap();
        assert_eq!(
            job.user_parameters(),
            Some("accountName=prod&bucketName=releases")
        );
        assert_eq!(
            job.input_artifact().unwrap().s3_source().unwrap(),
            S3Source {
                bucket_name: "codepipeline-artifacts",
                object_key: "app/BuildOutput/abc.zip",
            }
        );
    }

    #[test]
    fn job_id_is_read_from_incomplete_events() {
        let event = serde_json::json!({
            "CodePipeline.job": { "id": "job-1", "data": { "inputArtifacts": [{ "name": "x" }] } }
        });
        assert_eq!(read_job_id(&event), Some("job-1"));
        assert_matches!(parse_job(event), Err(PromotionError::MalformedJob(_)));

        assert_eq!(read_job_id(&serde_json::json!({})), None);
        assert_eq!(
            read_job_id(&serde_json::json!({ "CodePipeline.job": { "id": "" } })),
            None
        );
    }

    #[test]
    fn rejects_non_s3_location() {
        let artifact = artifact(r#"{"location":{"type":"CodeCommit","s3Location":{}}}"#);
        assert_matches!(
            artifact.s3_source(),
            Err(PromotionError::UnsupportedArtifactLocation(message)) => {
                assert_eq!(message, "Could not handle the artifact of CodeCommit type.");
            }
        );
    }

    #[test]
    fn s3_location_without_object_has_its_own_message() {
        let artifact = artifact(r#"{"location":{"type":"S3","s3Location":{"bucketName":"b"}}}"#);
        assert_matches!(
            artifact.s3_source(),
            Err(PromotionError::UnsupportedArtifactLocation(message)) => {
                assert_eq!(
                    message,
                    "The S3 input artifact does not define a bucketName and objectKey."
                );
            }
        );
    }

    #[test]
    fn missing_input_artifact_is_unsupported() {
        let job = parse_job(serde_json::json!({
            "CodePipeline.job": {
                "id": "job-1",
                "data": {
                    "actionConfiguration": { "configuration": {} },
                    "inputArtifacts": [],
                    "outputArtifacts": [],
                    "artifactCredentials": {}
                }
            }
        }))
        .unwrap();
        assert_matches!(
            job.input_artifact(),
            Err(PromotionError::UnsupportedArtifactLocation(_))
        );
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = JobOutcome {
            job_id: "job-1".to_string(),
            status: JobStatus::Skipped {
                account_name: "sandbox".to_string(),
                version: "1.5.0".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({
                "jobId": "job-1",
                "status": "skipped",
                "accountName": "sandbox",
                "version": "1.5.0"
            })
        );
    }
}
