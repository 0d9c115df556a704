//! Amazon Bedrock runtime wrapper

// region:    --- Modules

// -- Sub-modules
mod titan;

// -- Re-exports
pub use self::titan::TitanTextModel;

// -- Imports
use crate::consts::DEFAULT_MODEL_REGION;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;

// endregion: --- Modules

/// Bedrock runtime client on its own region resolution.
/// Titan Text Express availability varies per region; default is us-east-1.
pub async fn new_bedrock_client(profile: Option<&str>, region: Option<String>) -> Client {
	let region = region.unwrap_or_else(|| DEFAULT_MODEL_REGION.to_string());

	let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region));
	if let Some(profile) = profile {
		loader = loader.profile_name(profile);
	}

	Client::new(&loader.load().await)
}
