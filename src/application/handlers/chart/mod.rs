//! Chart handlers - report generation and annual timelines.

mod build_timeline;
mod generate_report;

pub use build_timeline::{BuildTimelineCommand, BuildTimelineHandler, BuildTimelineResult};
pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
