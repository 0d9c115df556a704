use std::fmt;

// region:    --- FindingStatus

/// A bucket only yields a finding once it was seen in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingStatus {
	Found,
}

impl fmt::Display for FindingStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FindingStatus::Found => write!(f, "Found"),
		}
	}
}

// endregion: --- FindingStatus

// region:    --- CheckValue

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionStatus {
	Enabled,
	DisabledRisk,
}

/// One security check result, tagged per check kind.
/// Note: The value shapes are deliberately heterogeneous (status enum, bool,
///       free-text provider status), matching what each probe actually yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckValue {
	Encryption(EncryptionStatus),
	PublicAccessBlocked(bool),
	Versioning(String),
	LoggingEnabled(bool),
}

impl CheckValue {
	pub fn name(&self) -> &'static str {
		match self {
			CheckValue::Encryption(_) => "encryption",
			CheckValue::PublicAccessBlocked(_) => "public_access_blocked",
			CheckValue::Versioning(_) => "versioning",
			CheckValue::LoggingEnabled(_) => "logging_enabled",
		}
	}
}

impl fmt::Display for CheckValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CheckValue::Encryption(EncryptionStatus::Enabled) => write!(f, "ENABLED"),
			CheckValue::Encryption(EncryptionStatus::DisabledRisk) => write!(f, "DISABLED (Risk!)"),
			CheckValue::PublicAccessBlocked(flag) => write!(f, "{flag}"),
			CheckValue::Versioning(status) => write!(f, "{status}"),
			CheckValue::LoggingEnabled(flag) => write!(f, "{flag}"),
		}
	}
}

// endregion: --- CheckValue

// region:    --- CheckOutcome

/// Result-or-fallback pair for one probe.
/// `cause` is Some exactly when `value` is a fallback substitution.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
	pub value: CheckValue,
	pub cause: Option<String>,
}

impl CheckOutcome {
	pub fn ok(value: CheckValue) -> CheckOutcome {
		CheckOutcome { value, cause: None }
	}

	pub fn fallback(value: CheckValue, cause: impl Into<String>) -> CheckOutcome {
		CheckOutcome {
			value,
			cause: Some(cause.into()),
		}
	}

	pub fn is_fallback(&self) -> bool {
		self.cause.is_some()
	}
}

// endregion: --- CheckOutcome

// region:    --- BucketFinding

/// The security check results collected for one bucket.
/// `checks` keeps probe insertion order (the formatter relies on it).
#[derive(Debug, Clone)]
pub struct BucketFinding {
	pub name: String,
	pub status: FindingStatus,
	pub checks: Vec<CheckOutcome>,
}

// endregion: --- BucketFinding
