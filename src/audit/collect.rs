use super::finding::{BucketFinding, CheckOutcome, CheckValue, EncryptionStatus, FindingStatus};
use super::source::BucketSource;
use crate::Result;
use tracing::{debug, warn};

// Versioning values when the provider reports no status / cannot be asked.
const VERSIONING_DEFAULT: &str = "Disabled";
const VERSIONING_UNKNOWN: &str = "Unknown";

/// Scan every bucket whose name contains `filter` (plain substring test) and
/// return one finding per bucket, in the provider's listing order.
///
/// A listing failure propagates and ends the run; probe failures never do
/// (see `audit_bucket`).
pub async fn scan_buckets(source: &impl BucketSource, filter: &str) -> Result<Vec<BucketFinding>> {
	let buckets = source.list_buckets().await?;

	let mut findings: Vec<BucketFinding> = Vec::new();
	for name in buckets.into_iter().filter(|n| n.contains(filter)) {
		findings.push(audit_bucket(source, name).await);
	}

	Ok(findings)
}

/// Run the four probes on one bucket, in fixed order.
///
/// Each probe failure is mapped to its fixed fallback value, whatever the
/// cause (denied, not configured, transport). The cause is kept on the
/// outcome and logged, not encoded into the value.
async fn audit_bucket(source: &impl BucketSource, name: String) -> BucketFinding {
	debug!("Auditing bucket '{name}'");

	let mut checks: Vec<CheckOutcome> = Vec::with_capacity(4);

	// -- encryption
	let outcome = match source.get_encryption(&name).await {
		Ok(_) => CheckOutcome::ok(CheckValue::Encryption(EncryptionStatus::Enabled)),
		Err(err) => CheckOutcome::fallback(CheckValue::Encryption(EncryptionStatus::DisabledRisk), err.to_string()),
	};
	checks.push(warn_if_fallback(&name, outcome));

	// -- public_access_blocked
	let outcome = match source.get_public_access_block(&name).await {
		Ok(blocked) => CheckOutcome::ok(CheckValue::PublicAccessBlocked(blocked)),
		Err(err) => CheckOutcome::fallback(CheckValue::PublicAccessBlocked(false), err.to_string()),
	};
	checks.push(warn_if_fallback(&name, outcome));

	// -- versioning
	let outcome = match source.get_versioning(&name).await {
		Ok(status) => CheckOutcome::ok(CheckValue::Versioning(
			status.unwrap_or_else(|| VERSIONING_DEFAULT.to_string()),
		)),
		Err(err) => CheckOutcome::fallback(CheckValue::Versioning(VERSIONING_UNKNOWN.to_string()), err.to_string()),
	};
	checks.push(warn_if_fallback(&name, outcome));

	// -- logging_enabled
	let outcome = match source.get_logging(&name).await {
		Ok(present) => CheckOutcome::ok(CheckValue::LoggingEnabled(present)),
		Err(err) => CheckOutcome::fallback(CheckValue::LoggingEnabled(false), err.to_string()),
	};
	checks.push(warn_if_fallback(&name, outcome));

	BucketFinding {
		name,
		status: FindingStatus::Found,
		checks,
	}
}

fn warn_if_fallback(bucket: &str, outcome: CheckOutcome) -> CheckOutcome {
	if let Some(cause) = &outcome.cause {
		warn!(
			"Check '{}' fell back for bucket '{}'. Cause: {}",
			outcome.value.name(),
			bucket,
			cause
		);
	}
	outcome
}

// region:    --- Tests


// endregion: --- Tests
