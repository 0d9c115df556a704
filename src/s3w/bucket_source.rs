use crate::audit::BucketSource;
use crate::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;

/// The S3 backed `BucketSource`.
/// All calls are read-only (list/describe); nothing here mutates the account.
pub struct S3BucketSource {
	client: Client,
}

impl S3BucketSource {
	/// Constructor
	pub fn from_client(client: Client) -> S3BucketSource {
		S3BucketSource { client }
	}
}

#[async_trait]
impl BucketSource for S3BucketSource {
	async fn list_buckets(&self) -> Result<Vec<String>> {
		let buckets_output = self.client.list_buckets().send().await?;
		let names = buckets_output
			.buckets()
			.iter()
			.filter_map(|b| b.name().map(String::from))
			.collect();
		Ok(names)
	}

	async fn get_encryption(&self, bucket: &str) -> Result<()> {
		// A bucket without a SSE configuration answers with an error,
		// so a plain success is the whole signal.
		self.client.get_bucket_encryption().bucket(bucket).send().await?;
		Ok(())
	}

	async fn get_public_access_block(&self, bucket: &str) -> Result<bool> {
		let output = self.client.get_public_access_block().bucket(bucket).send().await?;
		let blocked = output
			.public_access_block_configuration()
			.and_then(|c| c.block_public_acls())
			.unwrap_or(false);
		Ok(blocked)
	}

	async fn get_versioning(&self, bucket: &str) -> Result<Option<String>> {
		let output = self.client.get_bucket_versioning().bucket(bucket).send().await?;
		Ok(output.status().map(|s| s.as_str().to_string()))
	}

	async fn get_logging(&self, bucket: &str) -> Result<bool> {
		let output = self.client.get_bucket_logging().bucket(bucket).send().await?;
		Ok(output.logging_enabled().is_some())
	}
}
