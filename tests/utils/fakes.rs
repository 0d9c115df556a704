//! In-memory substitutes for the two external collaborators.

use async_trait::async_trait;
use s3vet::audit::BucketSource;
use s3vet::report::ReportModel;
use s3vet::{Error, Result};
use std::sync::Mutex;

// region:    --- FakeBucketSource

/// `BucketSource` over a fixed bucket list.
/// A "secure" bucket answers every probe with the good value; an insecure one
/// fails every probe (the collector has to substitute fallbacks).
pub struct FakeBucketSource {
	buckets: Vec<(String, bool)>, // (name, secure)
}

impl FakeBucketSource {
	pub fn new(buckets: &[(&str, bool)]) -> FakeBucketSource {
		FakeBucketSource {
			buckets: buckets.iter().map(|(name, secure)| (name.to_string(), *secure)).collect(),
		}
	}

	fn secure(&self, bucket: &str) -> Result<bool> {
		self.buckets
			.iter()
			.find(|(name, _)| name == bucket)
			.map(|(_, secure)| *secure)
			.ok_or(Error::Static("bucket not in fixture"))
	}
}

#[async_trait]
impl BucketSource for FakeBucketSource {
	async fn list_buckets(&self) -> Result<Vec<String>> {
		Ok(self.buckets.iter().map(|(name, _)| name.clone()).collect())
	}

	async fn get_encryption(&self, bucket: &str) -> Result<()> {
		match self.secure(bucket)? {
			true => Ok(()),
			false => Err(Error::Static("AccessDenied on get_encryption")),
		}
	}

	async fn get_public_access_block(&self, bucket: &str) -> Result<bool> {
		match self.secure(bucket)? {
			true => Ok(true),
			false => Err(Error::Static("NoSuchPublicAccessBlockConfiguration")),
		}
	}

	async fn get_versioning(&self, bucket: &str) -> Result<Option<String>> {
		match self.secure(bucket)? {
			true => Ok(Some("Enabled".to_string())),
			false => Err(Error::Static("AccessDenied on get_versioning")),
		}
	}

	async fn get_logging(&self, bucket: &str) -> Result<bool> {
		match self.secure(bucket)? {
			true => Ok(true),
			false => Err(Error::Static("AccessDenied on get_logging")),
		}
	}
}

// endregion: --- FakeBucketSource

// region:    --- FakeReportModel

/// `ReportModel` returning a canned report and recording the prompt it got.
pub struct FakeReportModel {
	canned: String,
	pub seen_prompt: Mutex<Option<String>>,
}

impl FakeReportModel {
	pub fn new(canned: &str) -> FakeReportModel {
		FakeReportModel {
			canned: canned.to_string(),
			seen_prompt: Mutex::new(None),
		}
	}

	pub fn prompt(&self) -> String {
		self.seen_prompt.lock().unwrap().clone().expect("no prompt was submitted")
	}
}

#[async_trait]
impl ReportModel for FakeReportModel {
	async fn generate(&self, prompt: &str) -> Result<String> {
		*self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
		Ok(self.canned.clone())
	}
}

// endregion: --- FakeReportModel
