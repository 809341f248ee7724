pub mod auto_approval;
pub mod capacity;
pub mod overlap;

pub use auto_approval::{
    AutoApprovalResult, DEADLINE_BUFFER_DAYS, MIN_CAPACITY_PERCENT, RuleOutcome, evaluate,
};
pub use capacity::capacity_percent;
pub use overlap::{inclusive_days, on_day, overlapping};
