use crate::cli::commands::{load_records, resolve_today, resolve_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{ChartEngine, render_gantt};
use crate::core::timeline::Projector;
use crate::errors::{AppError, AppResult};
use crate::render::{DatasetEngine, TerminalEngine};

/// Handle the `gantt` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gantt {
        window,
        json,
        no_color,
    } = cmd
    {
        let today = resolve_today(&window.today)?;
        let display = resolve_window(&window.from, &window.to, &window.range, today)?;
        let records = load_records(cfg);
        let projector = Projector::from(cfg);

        if *json {
            let mut engine = DatasetEngine::new();
            let handle = render_gantt(&mut engine, &projector, &records, display, today, None)?;
            println!("{}", engine.to_json(handle)?);
            engine.destroy(handle)?;
        } else {
            let mut engine = TerminalEngine::new(cfg.chart_width);
            if *no_color {
                engine = engine.without_color();
            }
            let handle = render_gantt(&mut engine, &projector, &records, display, today, None)?;
            let out = engine
                .output(handle)
                .ok_or(AppError::UnknownChart(handle.id()))?;
            print!("{}", out);
            engine.destroy(handle)?;
        }
    }
    Ok(())
}
