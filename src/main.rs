use anyhow::Result;
use log::info;

use vehicle_diagnostics::cli;
use vehicle_diagnostics::config::Config;
use vehicle_diagnostics::services::LoaderService;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli::build_cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            info!("🔧 Loading configuration from {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    config.apply_matches(&matches)?;

    let mut service = LoaderService::new(config);

    if cli::handle_subcommands(&matches, &mut service).await? {
        return Ok(());
    }

    // Default action: run the replace-load
    service.run_load().await?;

    Ok(())
}
