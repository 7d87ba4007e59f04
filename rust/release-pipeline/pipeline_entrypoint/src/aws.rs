use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain};

/// Region used when neither the environment nor the profile provide one
pub const FALLBACK_REGION: &str = "us-east-1";

/// Loads the shared aws config, falling back to [FALLBACK_REGION]
pub async fn load_aws_config() -> SdkConfig {
    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new(FALLBACK_REGION));
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
