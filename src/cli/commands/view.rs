use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{Controls, View};
use crate::errors::AppResult;

fn shown(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}

/// Handle the `view` subcommand
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        view,
        user,
        options,
    } = cmd
    {
        let view = View::from_query(view.as_deref());
        let controls = Controls::resolve(view, user.as_deref(), options);

        println!("view:             {}", controls.view);
        if let Some(category) = view.category() {
            println!("category:         {}", category);
        }
        println!("selected user:    {}", controls.selected_user);
        println!("'all' option:     {}", shown(controls.all_option_visible));
        println!("user management:  {}", shown(controls.user_management_visible));
        println!("add task form:    {}", shown(controls.add_task_visible));
    }
    Ok(())
}
