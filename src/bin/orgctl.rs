use clap::Parser;
use org_hierarchy_api::cli::client::ApiFailure;
use org_hierarchy_api::cli::utils::output_error;
use org_hierarchy_api::cli::{Cli, OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = org_hierarchy_api::cli::run(cli).await {
        let code = e.downcast_ref::<ApiFailure>().and_then(|f| f.code.clone());
        let message = match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => format!("{e:?}"),
            _ => e.to_string(),
        };
        output_error(&output_format, &message, code.as_deref())?;
        std::process::exit(1);
    }

    Ok(())
}
