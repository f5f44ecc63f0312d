use breed_cards::app::render;
use breed_cards::core::ConfigProvider;
use breed_cards::utils::logger;
use breed_cards::{ApiClient, BreedBoard, CliConfig, Settings};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("Fetching dog breeds from {}", settings.base_url());

    let board = BreedBoard::with_client(ApiClient::new(settings.base_url()));

    let cards = match board.refresh().await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::error!(
                "Fetch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let output = render::render(settings.format, settings.page_title(), &cards)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
