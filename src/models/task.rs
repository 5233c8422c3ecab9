use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Task status enum; the catch-all keeps foreign statuses out of the three
// known buckets without failing deserialization of the whole list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
    #[serde(other)]
    #[default]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modification_date: Option<DateTime<Utc>>,
}
