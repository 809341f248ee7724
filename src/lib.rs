pub mod config;
pub mod desk;
pub mod error;
pub mod model;
pub mod rules;
pub mod views;

pub use desk::{LeaveDesk, LeaveFilter, LeaveList, NewLeave, PendingReview, Snapshot};
pub use error::LeaveError;
