//! Badge awards and the congratulation push that follows them.

pub mod dispatcher;
pub mod outcome;

pub use dispatcher::AwardDispatcher;
pub use outcome::{AwardOutcome, NotificationStatus};
