use serde::{Deserialize, Deserializer, Serialize};

/// `null` and a missing key both read as an empty string: the backend leaves
/// most task columns nullable and the board prints them untouched.
pub fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of a task list item (`data-task` attribute) on the board.
///
/// Every field is optional on the wire except the id: the board renders
/// whatever the backend formatted and the sidebar copies it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub priority: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub task_type: String,
    #[serde(default)]
    pub status_date: Option<String>,
    #[serde(default)]
    pub days_in_status: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}
