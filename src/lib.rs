//! s3vet - scan S3 buckets for basic security posture and have a Bedrock
//! hosted model write the human readable audit report.
//!
//! Flow: list buckets, keep the ones whose name matches a filter substring,
//! run four read-only probes per bucket, flatten the findings to text, then
//! one model call for the report. Sequential and stateless between runs.

// region:    --- Modules

mod error;
mod prelude;

pub mod audit;
pub mod bedrockw;
pub mod cmd;
pub mod consts;
pub mod report;
pub mod s3w;

pub use prelude::{Error, Result};

// endregion: --- Modules
