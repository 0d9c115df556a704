use crate::Result;
use async_trait::async_trait;

/// Read-only view over the bucket provider, mirroring the per-bucket
/// describe operations the collector needs.
///
/// Passed in by the caller (rather than built from an ambient client) so the
/// scan logic can run against a fake.
#[async_trait]
pub trait BucketSource {
	/// All bucket names, in the provider's listing order.
	async fn list_buckets(&self) -> Result<Vec<String>>;

	/// Ok when the bucket has a server side encryption configuration.
	async fn get_encryption(&self, bucket: &str) -> Result<()>;

	/// The BlockPublicAcls flag of the public access block configuration.
	async fn get_public_access_block(&self, bucket: &str) -> Result<bool>;

	/// The versioning status string. None when the bucket never had one.
	async fn get_versioning(&self, bucket: &str) -> Result<Option<String>>;

	/// True when a logging configuration is present.
	async fn get_logging(&self, bucket: &str) -> Result<bool>;
}
