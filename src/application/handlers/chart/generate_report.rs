//! GenerateReportHandler - Command handler for charting one birth.

use std::sync::Arc;

use serde::Deserialize;

use crate::config::EngineConfig;
use crate::domain::chart::{BirthInput, Gender, Report, ReportAssembler};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::CalendarOracle;

/// Command to generate a chart report.
///
/// Fields are optional so that an absent field surfaces as a
/// `MISSING_FIELD` error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReportCommand {
    /// Local calendar date, `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// Local clock time, `HH:MM`
    pub birth_time: Option<String>,
    /// Degrees east
    pub longitude: Option<f64>,
    /// Degrees north; validated but not used in the computation
    pub latitude: Option<f64>,
    /// `male` / `female`
    pub gender: Option<String>,
}

impl GenerateReportCommand {
    /// Validates every field and produces the engine input.
    pub fn to_birth_input(&self) -> Result<BirthInput, ValidationError> {
        let birth_date = required(&self.birth_date, "birth_date")?;
        let birth_time = required(&self.birth_time, "birth_time")?;
        let longitude = self
            .longitude
            .ok_or_else(|| ValidationError::missing_field("longitude"))?;
        let gender = Gender::parse(required(&self.gender, "gender")?)?;

        BirthInput::parse(birth_date, birth_time, longitude, self.latitude, gender)
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::missing_field(field)),
    }
}

/// Handler for generating chart reports.
pub struct GenerateReportHandler {
    oracle: Arc<dyn CalendarOracle>,
    config: EngineConfig,
}

impl GenerateReportHandler {
    pub fn new(oracle: Arc<dyn CalendarOracle>, config: EngineConfig) -> Self {
        Self { oracle, config }
    }

    pub fn handle(&self, cmd: &GenerateReportCommand) -> Result<Report, DomainError> {
        // 1. Validate at the boundary
        let birth = cmd.to_birth_input().map_err(|err| {
            tracing::warn!(field = err.field(), error = %err, "Rejected birth input");
            DomainError::from(err)
        })?;

        // 2. Pure computation
        let report = ReportAssembler::new(self.oracle.as_ref(), self.config.corrector())
            .assemble(&birth);

        tracing::debug!(
            pillars = %report.pillars(),
            pattern = %report.pattern(),
            strength = %report.strength().category,
            "Generated chart report"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::StemBranch;
    use crate::domain::foundation::{Branch, ErrorCode, Stem};
    use crate::ports::SexagenaryDate;
    use chrono::NaiveDate;

    struct FixedOracle;

    impl CalendarOracle for FixedOracle {
        fn convert(&self, _date: NaiveDate) -> SexagenaryDate {
            SexagenaryDate {
                year: StemBranch::new(Stem::Geng, Branch::Wu),
                month: StemBranch::new(Stem::Xin, Branch::Si),
                day: StemBranch::new(Stem::Geng, Branch::Chen),
            }
        }
    }

    fn handler() -> GenerateReportHandler {
        GenerateReportHandler::new(Arc::new(FixedOracle), EngineConfig::default())
    }

    fn valid_command() -> GenerateReportCommand {
        GenerateReportCommand {
            birth_date: Some("1990-05-15".to_string()),
            birth_time: Some("14:30".to_string()),
            longitude: Some(116.4074),
            latitude: Some(39.9042),
            gender: Some("male".to_string()),
        }
    }

    #[test]
    fn generates_report_for_valid_command() {
        let report = handler().handle(&valid_command()).unwrap();
        assert_eq!(report.pillars().hour().pair(), StemBranch::new(Stem::Gui, Branch::Wei));
    }

    #[test]
    fn missing_birth_date_is_missing_field() {
        let cmd = GenerateReportCommand {
            birth_date: None,
            ..valid_command()
        };
        let err = handler().handle(&cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.details.get("field").map(String::as_str), Some("birth_date"));
    }

    #[test]
    fn blank_gender_is_missing_field() {
        let cmd = GenerateReportCommand {
            gender: Some("  ".to_string()),
            ..valid_command()
        };
        let err = handler().handle(&cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
    }

    #[test]
    fn missing_longitude_is_missing_field() {
        let cmd = GenerateReportCommand {
            longitude: None,
            ..valid_command()
        };
        let err = cmd.to_birth_input().unwrap_err();
        assert_eq!(err, ValidationError::missing_field("longitude"));
    }

    #[test]
    fn unknown_gender_is_format_error() {
        let cmd = GenerateReportCommand {
            gender: Some("other".to_string()),
            ..valid_command()
        };
        let err = handler().handle(&cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputFormat);
    }

    #[test]
    fn out_of_range_longitude_is_range_error() {
        let cmd = GenerateReportCommand {
            longitude: Some(200.0),
            ..valid_command()
        };
        let err = handler().handle(&cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputRange);
        assert!(err.message.contains("longitude"));
    }

    #[test]
    fn configured_meridian_changes_true_solar_time() {
        let config = EngineConfig {
            standard_meridian: 116.4074,
            ..Default::default()
        };
        let handler = GenerateReportHandler::new(Arc::new(FixedOracle), config);
        let report = handler.handle(&valid_command()).unwrap();
        assert_eq!(report.true_solar_time(), report.local_time());
    }

    #[test]
    fn command_deserializes_from_json() {
        let cmd: GenerateReportCommand = serde_json::from_str(
            r#"{"birth_date":"1990-05-15","birth_time":"14:30","longitude":116.4074,"gender":"女"}"#,
        )
        .unwrap();
        assert!(cmd.latitude.is_none());
        assert_eq!(cmd.to_birth_input().unwrap().gender(), Gender::Female);
    }
}
