use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Region/profile overrides from the command line.
/// Everything else (credentials, default region) resolves through the
/// standard AWS config chain: environment, config/credentials files, SSO.
pub struct RegionProfile {
	pub region: Option<String>,
	pub profile: Option<String>,
}

/// Load the shared SDK config.
/// - `--profile` selects a named profile over the default chain.
/// - `--region` overrides whatever region the chain resolves.
pub async fn load_sdk_config(reg_pro: &RegionProfile) -> SdkConfig {
	let mut loader = aws_config::defaults(BehaviorVersion::latest());

	if let Some(profile) = &reg_pro.profile {
		loader = loader.profile_name(profile);
	}
	if let Some(region) = &reg_pro.region {
		loader = loader.region(Region::new(region.clone()));
	}

	loader.load().await
}
