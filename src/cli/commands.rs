use clap::ArgMatches;
use log::info;

use crate::output::JsonFormatter;
use crate::services::LoaderService;
use crate::utils::error::LoaderError;

/// Handles subcommands and global output options. Returns `Ok(true)` when a
/// subcommand consumed the run; the caller falls through to the default load
/// action otherwise.
pub async fn handle_subcommands(
    matches: &ArgMatches,
    service: &mut LoaderService,
) -> Result<bool, LoaderError> {
    // Configure output format
    if let Some(format) = matches.get_one::<String>("format") {
        match format.as_str() {
            "json" => {
                info!("🎨 Using JSON formatter");
                service.set_formatter(Box::new(JsonFormatter));
            }
            _ => {} // Keep default console formatter
        }
    }

    if matches.subcommand_matches("stats").is_some() {
        info!("📈 Executing stats command...");
        service.show_stats().await?;
        return Ok(true);
    }

    if let Some(matches) = matches.subcommand_matches("initconfig") {
        let path = matches.get_one::<String>("path").unwrap();
        info!("📝 Writing configuration to {}", path);

        service.config().save_to_file(path)?;
        println!("✅ Configuration written to {}", path);

        return Ok(true);
    }

    Ok(false)
}
