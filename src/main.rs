use clap::Parser;
use orglens::utils::{logger, validation::Validate};
use orglens::{CliConfig, HttpJsonFetcher, OrgClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting orglens");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = HttpJsonFetcher::new()?;
    let client = OrgClient::with_api_base(fetcher, config.org.clone(), config.api_base.clone());

    match client.public_repos(config.license.as_deref()).await {
        Ok(names) => {
            tracing::info!(
                "Found {} repositories for organization '{}'",
                names.len(),
                client.org_name()
            );
            for name in &names {
                println!("{}", name);
            }
        }
        Err(e) => {
            tracing::error!("Failed to list repositories: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
