use crate::cli::commands::{load_records, resolve_today};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::{Board, vacation_board};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RED, RESET, color_for_optional_field};

/// Handle the `board` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Board { user, today, json } = cmd {
        let today = resolve_today(today)?;
        let records = load_records(cfg);
        let board = vacation_board(&records, user.as_deref(), today, cfg.urgent_days);

        if *json {
            println!("{}", serde_json::to_string_pretty(&board)?);
        } else {
            print_board(&board);
        }
    }
    Ok(())
}

fn print_board(board: &Board) {
    println!("User: {}\n", board.selected_user);

    for column in &board.columns {
        header(format!("{} ({})", column.status, column.cards.len()));

        if column.cards.is_empty() {
            println!("{GREY}  (empty){RESET}");
        }

        for card in &column.cards {
            let mark = if card.highlight {
                format!(" {RED}!{RESET}")
            } else {
                String::new()
            };
            println!("  #{} {}  {}{}", card.id, card.title, card.date_range, mark);

            let comment = card.comment.as_deref().unwrap_or("").trim();
            let text = if comment.is_empty() { "no comment" } else { comment };
            println!(
                "     {}{}{}",
                color_for_optional_field(Some(comment)),
                text,
                RESET
            );
        }
        println!();
    }
}
