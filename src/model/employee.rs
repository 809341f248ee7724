use serde::{Deserialize, Serialize};

use super::leave_request::LeaveType;

/// Remaining whole days per leave kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeaveBalance {
    pub sick: u32,
    pub casual: u32,
    pub earned: u32,
}

impl LeaveBalance {
    pub fn get(&self, leave_type: LeaveType) -> u32 {
        match leave_type {
            LeaveType::Sick => self.sick,
            LeaveType::Casual => self.casual,
            LeaveType::Earned => self.earned,
        }
    }

    /// Subtracts `days`, never going below zero.
    pub fn deduct(&mut self, leave_type: LeaveType, days: u32) {
        let slot = match leave_type {
            LeaveType::Sick => &mut self.sick,
            LeaveType::Casual => &mut self.casual,
            LeaveType::Earned => &mut self.earned,
        };
        *slot = slot.saturating_sub(days);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub department: String,
    /// Job title shown next to the name.
    #[serde(rename = "role")]
    pub title: String,
    pub leave_balance: LeaveBalance,
}
