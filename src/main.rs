use s3vet::cmd::cmd_run;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("s3vet=warn")))
		.with_target(false)
		.init();

	match cmd_run().await {
		Ok(_) => (),
		Err(e) => {
			println!("Error:\n  {}", e);
			std::process::exit(1);
		}
	}
}
