use codebuild_client::{CodeBuild, StartedBuild};

use crate::models::BuildParameters;

/// Starts builds for pushed commits
#[cfg_attr(test, mockall::automock)]
pub trait BuildService: Send + Sync + 'static {
    fn start_build(
        &self,
        params: &BuildParameters,
    ) -> impl Future<Output = anyhow::Result<StartedBuild>> + Send;
}

impl BuildService for CodeBuild {
    async fn start_build(&self, params: &BuildParameters) -> anyhow::Result<StartedBuild> {
        CodeBuild::start_build(self, &params.project_name, &params.source_version).await
    }
}
