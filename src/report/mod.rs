//! Findings flattening and the one AI report call.

use crate::audit::{scan_buckets, BucketFinding, BucketSource};
use crate::consts::SCAN_HEADER;
use crate::Result;
use async_trait::async_trait;

// region:    --- ReportModel

/// The hosted text-generation model behind the report.
/// One operation, one call per run. The Bedrock implementation lives in
/// `bedrockw`; tests substitute a fake.
#[async_trait]
pub trait ReportModel {
	/// Submit the prompt, return the model's first generated text.
	async fn generate(&self, prompt: &str) -> Result<String>;
}

// endregion: --- ReportModel

// region:    --- Formatting

/// Flatten the findings into the plain text block handed to the model.
///
/// Deterministic string building only: header line, then per bucket a blank
/// line, the bucket line, and one line per check in insertion order.
pub fn format_findings(findings: &[BucketFinding]) -> String {
	let mut text = format!("{SCAN_HEADER}\n");

	for finding in findings {
		text.push_str(&format!("\nBucket: {}\n", finding.name));
		for check in &finding.checks {
			text.push_str(&format!("  - {}: {}\n", check.value.name(), check.value));
		}
	}

	text
}

/// Fixed prompt template around the findings text.
pub fn build_prompt(findings_text: &str) -> String {
	format!(
		r#"You are a Cloud Infrastructure Security Expert.

SECURITY AUDIT DATA:
{findings_text}

Provide a security analysis with:
1. Identified Security Issues (list any risks found)
2. Compliance Status (is it production-ready?)
3. 3 Specific Security Recommendations

Be technical and specific. Focus on actual security findings."#
	)
}

// endregion: --- Formatting

// region:    --- Run Audit

/// Full pipeline: collect, flatten, one model call.
/// Anything failing past collection ends the run (no partial report).
pub async fn run_audit(source: &impl BucketSource, model: &impl ReportModel, filter: &str) -> Result<String> {
	let findings = scan_buckets(source, filter).await?;
	let findings_text = format_findings(&findings);
	let prompt = build_prompt(&findings_text);
	model.generate(&prompt).await
}

// endregion: --- Run Audit

// region:    --- Tests


// endregion: --- Tests
