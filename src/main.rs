use clap::Parser;
use content_search_client::config::toml_config::LogFormat;
use content_search_client::utils::{logger, validation::Validate};
use content_search_client::{CliConfig, Command, ContentSearchClient};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file = cli.load_file()?;
    let (format, verbose) = cli.log_settings(file.as_ref());
    match format {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    let config = cli.client_config(file.as_ref())?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::debug!("Client config: {:?}", config);
    let client = ContentSearchClient::with_config(&config)?;

    match &cli.command {
        Command::Breeders { keyword } => print_json(&client.get_breeders(keyword).await)?,
        Command::Breeder { breeder_id } => print_json(&client.get_breeder(breeder_id).await)?,
        Command::Poultries {
            breeder_id,
            pagination,
        } => {
            let pagination = pagination.to_pagination();
            print_json(
                &client
                    .get_breeder_poultries(breeder_id, pagination.as_ref())
                    .await,
            )?
        }
        Command::Poultry {
            breeder_id,
            poultry_id,
        } => print_json(&client.get_poultry(breeder_id, poultry_id).await)?,
        Command::Home { user_id } => print_json(&client.get_home(user_id.as_deref()).await)?,
        Command::Search(args) => print_json(&client.get_search(&args.to_params()).await)?,
    }

    Ok(())
}
