use crate::cli::commands::resolve_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sidebar::{TaskSidebar, VacationSidebar};
use crate::core::view::View;
use crate::errors::AppResult;

/// Handle the `sidebar` subcommand: print the filled form as JSON.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Sidebar {
        task,
        vacation,
        column,
        view,
        today,
    } = cmd
    {
        let json = if let Some(raw) = task {
            let today = resolve_today(today)?;
            let form =
                TaskSidebar::from_data_attr(raw, column, View::from_query(view.as_deref()), today)?;
            serde_json::to_string_pretty(&form)?
        } else if let Some(raw) = vacation {
            serde_json::to_string_pretty(&VacationSidebar::from_data_attr(raw)?)?
        } else {
            return Ok(());
        };

        println!("{}", json);
    }
    Ok(())
}
