//! Bucket security collection (list, filter, probe).

// region:    --- Modules

// -- Sub-modules
mod collect;
mod finding;
mod source;

// -- Re-exports
pub use self::collect::scan_buckets;
pub use self::finding::{BucketFinding, CheckOutcome, CheckValue, EncryptionStatus, FindingStatus};
pub use self::source::BucketSource;

// endregion: --- Modules
