//! Session history and reports.

pub mod report;
pub mod storage;

pub use report::{FocusReport, ReportPeriod};
pub use storage::{HistoryStorage, SessionRecord};
