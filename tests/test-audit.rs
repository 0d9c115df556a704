use anyhow::Result;
use s3vet::report::run_audit;
use utils::{FakeBucketSource, FakeReportModel, XString};

mod utils;

#[tokio::test]
async fn test_audit_end_to_end() -> Result<()> {
	// FIXTURE
	let source = FakeBucketSource::new(&[
		("dev-patel-secure", true),
		("prod-other", true),
		("dev-patel-open", false),
	]);
	let model = FakeReportModel::new("2 issues found. Not production-ready.");

	// EXEC
	let report = run_audit(&source, &model, "dev-patel").await?;

	// CHECK - the model's text comes back untouched
	assert_eq!(report, "2 issues found. Not production-ready.");

	// CHECK - the prompt embeds the formatted findings and the fixed asks
	let prompt = model.prompt();
	assert!(prompt.starts_with("You are a Cloud Infrastructure Security Expert."));
	assert!(prompt.contains("AWS S3 BUCKET SECURITY SCAN RESULTS:"));
	assert!(prompt.x_has_line("Bucket: dev-patel-secure"));
	assert!(prompt.x_has_line("Bucket: dev-patel-open"));
	assert!(!prompt.contains("prod-other"));
	assert!(prompt.contains("3. 3 Specific Security Recommendations"));

	Ok(())
}

#[tokio::test]
async fn test_audit_empty_scan_still_reports() -> Result<()> {
	// FIXTURE - nothing matches; the model is still asked (about an empty scan)
	let source = FakeBucketSource::new(&[("prod-other", true)]);
	let model = FakeReportModel::new("No buckets in scope.");

	// EXEC
	let report = run_audit(&source, &model, "dev-patel").await?;

	// CHECK
	assert_eq!(report, "No buckets in scope.");
	assert!(model.prompt().contains("AWS S3 BUCKET SECURITY SCAN RESULTS:"));

	Ok(())
}
