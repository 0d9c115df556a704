use crate::audit::scan_buckets;
use crate::bedrockw::{new_bedrock_client, TitanTextModel};
use crate::cmd::app::{cmd_app, ARG_FILTER_1, ARG_MODEL, ARG_MODEL_REGION, ARG_PROFILE, ARG_REGION};
use crate::consts::{DEFAULT_MODEL_ID, REPORT_BANNER, REPORT_TITLE};
use crate::report::{format_findings, run_audit};
use crate::s3w::{new_s3_client, RegionProfile, S3BucketSource};
use crate::{Error, Result};
use clap::ArgMatches;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	// region/profile can come from the root command or the sub command
	let reg_pro = RegionProfile {
		region: arg_from_root_or_sub(&argm, ARG_REGION),
		profile: arg_from_root_or_sub(&argm, ARG_PROFILE.0),
	};

	match argm.subcommand() {
		Some(("audit", sub_cmd)) => exec_audit(reg_pro, sub_cmd).await?,
		Some(("scan", sub_cmd)) => exec_scan(reg_pro, sub_cmd).await?,
		_ => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

async fn exec_audit(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<()> {
	let filter = get_filter_1(argm)?;
	let model_id = argm.get_one::<String>(ARG_MODEL).map(|s| s.as_str()).unwrap_or(DEFAULT_MODEL_ID);
	let model_region = argm.get_one::<String>(ARG_MODEL_REGION).cloned();

	println!("Checking buckets...");

	let model_profile = reg_pro.profile.clone();
	let source = S3BucketSource::from_client(new_s3_client(&reg_pro).await);

	let bedrock_client = new_bedrock_client(model_profile.as_deref(), model_region).await;
	let model = TitanTextModel::from_client_and_model_id(bedrock_client, model_id);

	let report = run_audit(&source, &model, filter).await?;

	println!("\n{REPORT_BANNER}");
	println!("{REPORT_TITLE}");
	println!("{REPORT_BANNER}");
	println!("{report}");
	println!("{REPORT_BANNER}\n");

	Ok(())
}

async fn exec_scan(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<()> {
	let filter = get_filter_1(argm)?;

	println!("Checking buckets...");

	let source = S3BucketSource::from_client(new_s3_client(&reg_pro).await);
	let findings = scan_buckets(&source, filter).await?;

	println!("\n{}", format_findings(&findings));

	Ok(())
}

// region:    --- Args Utils
fn get_filter_1(argm: &ArgMatches) -> Result<&str> {
	let filter = argm
		.get_one::<String>(ARG_FILTER_1)
		.ok_or(Error::CmdInvalid("This command requires a bucket name filter"))?;
	Ok(filter)
}

fn arg_from_root_or_sub(argm: &ArgMatches, id: &str) -> Option<String> {
	argm.get_one::<String>(id)
		.or_else(|| match argm.subcommand() {
			Some((_, sub)) => sub.get_one::<String>(id),
			_ => None,
		})
		.cloned()
}
// endregion: --- Args Utils
