use crate::cli::commands::{load_records, resolve_today, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timeline::Projector;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        window,
        force,
    } = cmd
    {
        let today = resolve_today(&window.today)?;
        let display = resolve_window(&window.from, &window.to, &window.range, today)?;
        let records = load_records(cfg);

        info(format!(
            "Exporting {} from {} to {}",
            format.as_str(),
            display.start(),
            display.end()
        ));

        ExportLogic::export(
            &Projector::from(cfg),
            &records,
            &display,
            today,
            *format,
            Path::new(file),
            *force,
        )?;
    }
    Ok(())
}
