//! Vacation board: the four status columns and their cards.

use crate::models::{VacationRecord, VacationStatus};
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// Selecting this "user" shows everybody's vacations.
pub const ALL_USERS: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacationCard {
    pub id: i64,
    pub title: String,
    pub date_range: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub comment: Option<String>,
    pub username: String,
    pub is_vacation: bool,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub status: VacationStatus,
    pub cards: Vec<VacationCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub selected_user: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column(&self, status: &VacationStatus) -> Option<&Column> {
        self.columns.iter().find(|c| &c.status == status)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

/// Lay out vacations in status columns.
///
/// Unknown statuses land in `todo`. A `todo` card is highlighted when the
/// vacation starts within `urgent_days` from today (or already started).
pub fn vacation_board(
    records: &[VacationRecord],
    selected_user: Option<&str>,
    today: NaiveDate,
    urgent_days: u32,
) -> Board {
    let selected = selected_user.unwrap_or(ALL_USERS);
    let horizon = date::add_days(today, urgent_days as u64);

    let mut columns: Vec<Column> = VacationStatus::COLUMNS
        .iter()
        .map(|s| Column {
            status: s.clone(),
            cards: Vec::new(),
        })
        .collect();

    for r in records {
        if selected != ALL_USERS && r.username != selected {
            continue;
        }
        let Some((start, end)) = r.span() else {
            continue;
        };

        let idx = VacationStatus::COLUMNS
            .iter()
            .position(|s| s == &r.status)
            .unwrap_or(0);
        let highlight = idx == 0 && start <= horizon;

        columns[idx].cards.push(VacationCard {
            id: r.id,
            title: r.username.clone(),
            date_range: format!("{} - {}", date::to_dotted(start), date::to_dotted(end)),
            status: r.status.to_string(),
            start_date: date::to_iso(start),
            end_date: date::to_iso(end),
            comment: r.comment.clone(),
            username: r.username.clone(),
            is_vacation: true,
            highlight,
        });
    }

    Board {
        selected_user: selected.to_string(),
        columns,
    }
}
