use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_bucket_encryption::GetBucketEncryptionError;
use aws_sdk_s3::operation::get_bucket_logging::GetBucketLoggingError;
use aws_sdk_s3::operation::get_bucket_versioning::GetBucketVersioningError;
use aws_sdk_s3::operation::get_public_access_block::GetPublicAccessBlockError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Static error: {0}")]
	Static(&'static str),

	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error("Model '{0}' response contains no results")]
	ModelEmptyResults(String),

	#[error("Model body JSON error. Cause: {0}")]
	ModelBodyJson(#[from] serde_json::Error),

	#[error(transparent)]
	AwsGetBucketEncryption(#[from] SdkError<GetBucketEncryptionError>),

	#[error(transparent)]
	AwsGetPublicAccessBlock(#[from] SdkError<GetPublicAccessBlockError>),

	#[error(transparent)]
	AwsGetBucketVersioning(#[from] SdkError<GetBucketVersioningError>),

	#[error(transparent)]
	AwsGetBucketLogging(#[from] SdkError<GetBucketLoggingError>),

	#[error(transparent)]
	AwsInvokeModel(#[from] SdkError<InvokeModelError>),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// For better CLI error reporting.
/// Note: Might do the same for the probe AwsError types.
impl From<SdkError<ListBucketsError>> for Error {
	fn from(val: SdkError<ListBucketsError>) -> Self {
		let se = val.into_service_error();
		let code = se.code().unwrap_or_default().to_string();
		let message = se.message().unwrap_or_default().to_string();
		Error::AwsServiceError(code, message)
	}
}
