mod start_build;

pub use start_build::{BuildSummary, StartedBuild};

#[derive(Clone, Debug)]
pub struct CodeBuild {
    /// Inner CodeBuild client
    inner: aws_sdk_codebuild::Client,
}

impl CodeBuild {
    pub fn new(inner: aws_sdk_codebuild::Client) -> Self {
        Self { inner }
    }

    /// Starts a build of `project_name` at `source_version`.
    /// It does not wait for the build to finish.
    #[tracing::instrument(skip(self))]
    pub async fn start_build(
        &self,
        project_name: &str,
        source_version: &str,
    ) -> anyhow::Result<StartedBuild> {
        start_build::start_build(&self.inner, project_name, source_version).await
    }
}
