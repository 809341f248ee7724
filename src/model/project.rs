use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub deadline: NaiveDate,
    pub assigned_employees: Vec<String>,
    pub priority: Priority,
}

impl Project {
    pub fn is_assigned(&self, employee_id: &str) -> bool {
        self.assigned_employees.iter().any(|id| id == employee_id)
    }
}
