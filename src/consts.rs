//! Global constants

pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";
pub const DEFAULT_MODEL_REGION: &str = "us-east-1";

pub const SCAN_HEADER: &str = "AWS S3 BUCKET SECURITY SCAN RESULTS:";
pub const REPORT_TITLE: &str = "🔐 AI-POWERED CLOUD SECURITY AUDIT REPORT";
pub const REPORT_BANNER: &str = "============================================================";
