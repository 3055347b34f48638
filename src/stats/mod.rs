//! 统计模块 - 探测次数记录与报表

pub mod recorder;
pub mod report;

pub use recorder::{CollisionRecorder, CollisionSummary};
pub use report::{snapshots, write_entire_table, write_frequencies, write_stats, StatsSnapshot};
