//! Application handlers.
//!
//! Command and query handlers that validate boundary input and run the
//! chart engine.

pub mod chart;

pub use chart::{
    BuildTimelineCommand, BuildTimelineHandler, BuildTimelineResult, GenerateReportCommand,
    GenerateReportHandler,
};
