//! AWS S3 API wrapper

// region:    --- Modules

// -- Sub-modules
mod bucket_source;

// -- Re-exports
pub use self::bucket_source::S3BucketSource;
pub use self::cred::{load_sdk_config, RegionProfile};

pub mod cred;

// -- Imports
use aws_sdk_s3::Client;

// endregion: --- Modules

/// S3 client on the standard config chain, with the eventual
/// region/profile overrides applied.
pub async fn new_s3_client(reg_pro: &RegionProfile) -> Client {
	let config = load_sdk_config(reg_pro).await;
	Client::new(&config)
}
