use clap::{crate_version, Arg, Command};

pub const ARG_REGION: &str = "region";
pub const ARG_PROFILE: (&str, char) = ("profile", 'p');
pub const ARG_FILTER_1: &str = "filter_1";
pub const ARG_MODEL: &str = "model";
pub const ARG_MODEL_REGION: &str = "model-region";

pub fn cmd_app() -> Command {
	Command::new("s3vet")
		.version(crate_version!())
		.about("S3 bucket security checks, with the audit report written by a Bedrock model")
		.args(args_region_profile())
		.subcommand(sub_audit())
		.subcommand(sub_scan())
}

// region:    --- Sub Commands
fn sub_audit() -> Command {
	Command::new("audit")
		.about("Scan matching buckets and print the AI written audit report. e.g., `s3vet audit dev-`")
		.args(args_region_profile())
		.arg(arg_filter_1())
		.arg(
			Arg::new(ARG_MODEL)
				.long(ARG_MODEL)
				.num_args(1)
				.help("Bedrock model id for the report (default 'amazon.titan-text-express-v1')"),
		)
		.arg(
			Arg::new(ARG_MODEL_REGION)
				.long(ARG_MODEL_REGION)
				.num_args(1)
				.help("Region for the Bedrock call (default 'us-east-1')"),
		)
}

fn sub_scan() -> Command {
	Command::new("scan")
		.about("Scan matching buckets and print the raw findings (no model call)")
		.args(args_region_profile())
		.arg(arg_filter_1())
}
// endregion: --- Sub Commands

// region:    --- Common Args
fn arg_filter_1() -> Arg {
	Arg::new(ARG_FILTER_1)
		.num_args(1)
		.required(true)
		.help("Substring a bucket name must contain for the bucket to be checked")
}

fn args_region_profile() -> [Arg; 2] {
	[
		Arg::new(ARG_PROFILE.0)
			.required(false)
			.num_args(1)
			.short(ARG_PROFILE.1)
			.long(ARG_PROFILE.0)
			.help("The AWS profile to use (standard config chain otherwise)."),
		Arg::new(ARG_REGION)
			.required(false)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region to use for the S3 calls (override profile/env region)."),
	]
}
// endregion: --- Common Args
