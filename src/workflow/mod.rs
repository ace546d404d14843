//! Workflow coordinators over the record store.
//!
//! Each coordinator is a short synchronous sequence of store calls around
//! the pure calculations: attendance check-in/check-out, the leave request
//! lifecycle with its balance ledger, and company setup/hiring. There is
//! no internal locking or queuing; callers decide sequencing, and store
//! failures propagate immediately.

mod attendance;
mod balance;
mod leave;
mod onboarding;

pub use attendance::AttendanceTracker;
pub use balance::BalanceLedger;
pub use leave::{LeaveSubmission, LeaveWorkflow};
pub use onboarding::{NewHire, Onboarding};
