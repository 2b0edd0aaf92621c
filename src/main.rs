use booking_dao::utils::logger;
use booking_dao::{run_command, CliConfig, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = cli.config.as_deref().map(TomlConfig::from_file).transpose();

    // logger first so a failed config load is still logged
    let format = cli.resolve_log_format(file_config.as_ref().ok().and_then(Option::as_ref));
    logger::init_logger(cli.verbose, format);

    tracing::info!("Starting booking-dao");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match file_config {
        Ok(Some(file_config)) => run_command(&file_config, &cli.command).await,
        Ok(None) => run_command(&cli, &cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {} (severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
