use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use, run `vacboard init`)",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_keys(&path)?;
            if missing.is_empty() {
                success(format!("Configuration {} is complete", path.display()));
            } else {
                for key in &missing {
                    warning(format!("Missing key `{}` (default value used)", key));
                }
            }
        }

        if !*print_config && !*check {
            info(format!("Configuration file: {}", path.display()));
        }
    }

    Ok(())
}
