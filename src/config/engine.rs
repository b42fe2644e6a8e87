//! Chart engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::chart::{TrueSolarTimeCorrector, DEFAULT_STANDARD_MERIDIAN};

/// Longest annual timeline the engine will produce.
pub const MAX_TIMELINE_YEARS: u32 = 150;

/// Chart engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Meridian (degrees east) of the clock the birth time was read from
    #[serde(default = "default_standard_meridian")]
    pub standard_meridian: f64,

    /// Number of years covered by the annual timeline
    #[serde(default = "default_timeline_years")]
    pub timeline_years: u32,
}

impl EngineConfig {
    /// Corrector for the configured meridian
    pub fn corrector(&self) -> TrueSolarTimeCorrector {
        TrueSolarTimeCorrector::new(self.standard_meridian)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-180.0..=180.0).contains(&self.standard_meridian) {
            return Err(ValidationError::InvalidStandardMeridian(
                self.standard_meridian,
            ));
        }
        if self.timeline_years == 0 || self.timeline_years > MAX_TIMELINE_YEARS {
            return Err(ValidationError::InvalidTimelineYears {
                max: MAX_TIMELINE_YEARS,
                actual: self.timeline_years,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            standard_meridian: default_standard_meridian(),
            timeline_years: default_timeline_years(),
        }
    }
}

fn default_standard_meridian() -> f64 {
    DEFAULT_STANDARD_MERIDIAN
}

fn default_timeline_years() -> u32 {
    100
}
