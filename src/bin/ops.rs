use clap::Parser;
use ops_console::cli::utils::output_error;
use ops_console::cli::{Cli, OutputFormat};
use ops_console::error::ServiceError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so OPS_API_URL and OPS_API_TOKEN can live in a file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = ops_console::cli::run(cli).await {
        let code = e
            .downcast_ref::<ServiceError>()
            .map(|err| err.code().to_string())
            .unwrap_or_else(|| "ERROR".to_string());
        let _ = output_error(&output_format, &format!("{e:#}"), &code);
        std::process::exit(1);
    }

    Ok(())
}
