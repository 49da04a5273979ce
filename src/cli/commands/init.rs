use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    let cfg = Config::default();
    info(format!(
        "Vacation data is read from {} (override with --data)",
        cfg.data_path().display()
    ));
    Ok(())
}
