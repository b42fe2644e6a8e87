//! Application layer - Commands and Handlers.
//!
//! This layer validates incoming commands and coordinates the chart engine
//! with the calendar port.

pub mod handlers;

pub use handlers::{
    BuildTimelineCommand, BuildTimelineHandler, BuildTimelineResult, GenerateReportCommand,
    GenerateReportHandler,
};
