pub mod employee;
pub mod leave_request;
pub mod notification;
pub mod project;

pub use employee::{Employee, LeaveBalance};
pub use leave_request::{LeaveInterval, LeaveRecord, LeaveStatus, LeaveType, shift_days};
pub use notification::{Notification, NotificationKind};
pub use project::{Priority, Project};
