//! Sidebar forms filled from the JSON carried by board list items.

use crate::core::view::View;
use crate::errors::{AppError, AppResult};
use crate::models::TaskCard;
use crate::models::task::null_as_empty;
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder the board prints for a task without deadline.
const NO_DEADLINE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSidebar {
    pub title: String,
    pub column: String,
    pub task_id: i64,
    pub view: String,
    pub status: String,
    pub kind: String,
    pub priority: String,
    pub start_date: String,
    pub deadline: String,
    pub tags: String,
    pub task_type: String,
    pub comment: String,
    pub delete_task_id: i64,
    pub days_in_status: Option<i64>,
}

impl TaskSidebar {
    pub fn from_card(card: &TaskCard, column: &str, view: View, today: NaiveDate) -> Self {
        let deadline = card
            .deadline
            .as_deref()
            .filter(|d| *d != NO_DEADLINE)
            .unwrap_or("")
            .to_string();

        Self {
            title: card.title.clone(),
            column: column.to_string(),
            task_id: card.id,
            view: view.as_query().to_string(),
            status: card.status.clone(),
            kind: card.kind.clone(),
            priority: card.priority.clone(),
            start_date: card.start_date.clone().unwrap_or_default(),
            deadline,
            tags: card.tags.clone(),
            task_type: card.task_type.clone(),
            comment: card.comment.clone().unwrap_or_default(),
            delete_task_id: card.id,
            days_in_status: card
                .status_date
                .as_deref()
                .and_then(date::parse_iso)
                .map(|d| days_in_status(d, today)),
        }
    }

    /// Parse a `data-task` attribute.
    pub fn from_data_attr(
        json: &str,
        column: &str,
        view: View,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let card: TaskCard = serde_json::from_str(json)
            .map_err(|e| AppError::InvalidAttribute(format!("data-task: {}", e)))?;
        Ok(Self::from_card(&card, column, view, today))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct VacationAttr {
    id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    start_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    end_date: String,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationSidebar {
    pub title: String,
    pub vacation_id: i64,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub comment: String,
    pub delete_vacation_id: i64,
}

impl VacationSidebar {
    /// Parse a `data-vacation` attribute.
    pub fn from_data_attr(json: &str) -> AppResult<Self> {
        let v: VacationAttr = serde_json::from_str(json)
            .map_err(|e| AppError::InvalidAttribute(format!("data-vacation: {}", e)))?;

        Ok(Self {
            title: format!("{} - Vacation", v.title),
            vacation_id: v.id,
            status: v.status,
            start_date: v.start_date,
            end_date: v.end_date,
            comment: v.comment.unwrap_or_default(),
            delete_vacation_id: v.id,
        })
    }
}

/// Whole days between the last status change and today, regardless of order.
pub fn days_in_status(status_date: NaiveDate, today: NaiveDate) -> i64 {
    date::days_between(status_date, today).abs()
}
