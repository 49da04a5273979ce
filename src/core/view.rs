//! Board views selected through the `view` query parameter, and which form
//! controls each view shows.

use crate::core::board::ALL_USERS;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Users,
    AdHoc,
    Reg,
    Pro,
    Vacation,
    Backlog,
}

impl View {
    /// Missing or unknown values fall back to `Users`.
    pub fn from_query(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("ad-hoc") => Self::AdHoc,
            Some("reg") => Self::Reg,
            Some("pro") => Self::Pro,
            Some("vacation") => Self::Vacation,
            Some("backlog") => Self::Backlog,
            _ => Self::Users,
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::AdHoc => "ad-hoc",
            Self::Reg => "reg",
            Self::Pro => "pro",
            Self::Vacation => "vacation",
            Self::Backlog => "backlog",
        }
    }

    /// Task category shown by the category views.
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Self::AdHoc => Some("AD-HOC"),
            Self::Reg => Some("REG"),
            Self::Pro => Some("PRO"),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Visibility of the board's form controls for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub view: View,
    pub selected_user: String,
    pub all_option_visible: bool,
    pub user_management_visible: bool,
    pub add_task_visible: bool,
}

impl Controls {
    /// `options` are the entries of the user selector; `all` may be among them.
    /// With no selector at all (no options, no user) nothing is selected, so
    /// only the backlog hides the add-task form.
    pub fn resolve(view: View, selected_user: Option<&str>, options: &[String]) -> Self {
        let mut selected = match selected_user {
            Some(user) => user.to_string(),
            None if options.is_empty() => String::new(),
            None => ALL_USERS.to_string(),
        };
        let all_option_visible = view != View::Users;

        if !all_option_visible
            && selected == ALL_USERS
            && let Some(first) = options.iter().find(|o| o.as_str() != ALL_USERS)
        {
            selected = first.clone();
        }

        let add_task_visible = selected != ALL_USERS && view != View::Backlog;

        Self {
            view,
            selected_user: selected,
            all_option_visible,
            user_management_visible: view == View::Users,
            add_task_visible,
        }
    }
}
