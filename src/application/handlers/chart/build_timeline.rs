//! BuildTimelineHandler - Query handler for the year-by-year timeline.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::generate_report::{GenerateReportCommand, GenerateReportHandler};
use crate::config::{EngineConfig, MAX_TIMELINE_YEARS};
use crate::domain::chart::{AnnualTimeline, FourPillars, LuckCycles};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::CalendarOracle;

/// Command to build an annual timeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildTimelineCommand {
    #[serde(flatten)]
    pub birth: GenerateReportCommand,
    /// Overrides the configured timeline length
    pub years: Option<u32>,
}

/// Result of a timeline build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildTimelineResult {
    pub pillars: FourPillars,
    pub luck_cycles: LuckCycles,
    pub timeline: AnnualTimeline,
}

/// Handler for building annual timelines.
pub struct BuildTimelineHandler {
    reports: GenerateReportHandler,
    default_years: u32,
}

impl BuildTimelineHandler {
    pub fn new(oracle: Arc<dyn CalendarOracle>, config: EngineConfig) -> Self {
        let default_years = config.timeline_years;
        Self {
            reports: GenerateReportHandler::new(oracle, config),
            default_years,
        }
    }

    pub fn handle(&self, cmd: &BuildTimelineCommand) -> Result<BuildTimelineResult, DomainError> {
        let years = match cmd.years {
            Some(years) if years == 0 || years > MAX_TIMELINE_YEARS => {
                let err = ValidationError::input_range("years", 1, MAX_TIMELINE_YEARS, years);
                tracing::warn!(error = %err, "Rejected timeline length");
                return Err(err.into());
            }
            Some(years) => years,
            None => self.default_years,
        };

        let report = self.reports.handle(&cmd.birth)?;
        let timeline = report.timeline(years);

        tracing::debug!(
            birth_year = timeline.birth_year,
            entries = timeline.entries.len(),
            "Built annual timeline"
        );

        Ok(BuildTimelineResult {
            pillars: *report.pillars(),
            luck_cycles: report.luck_cycles().clone(),
            timeline,
        })
    }
}
