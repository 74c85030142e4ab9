//! Driver document compliance.
//!
//! One driver in, one [`ComplianceStatus`] out. Two ordered passes:
//!
//! 1. completeness: the first required attribute that is null, blank or a
//!    `nan` marker makes the driver `incomplete` and stops the evaluation;
//! 2. deadlines: expiration dates are visited in a fixed order and the first
//!    one inside a window decides (`expired`, `urgent`, `upcoming`).
//!
//! The deadline pass stops at the first field that matches in list order,
//! not at the most severe one. A later expired document is hidden behind an
//! earlier "upcoming" one; the list order carries the precedence.

use crate::config::{ComplianceSettings, MAX_OFFSET_HOURS};
use crate::models::driver::Driver;
use crate::models::status::{ComplianceStatus, StatusKind};
use crate::utils::date::{end_of_day, now_naive, parse_dmy};
use chrono::{Duration, NaiveDateTime};
use tracing::{debug, trace};

/// Every driver attribute except `id` and `codigo_sap`.
pub const REQUIRED_FIELDS: [&str; 35] = [
    "nome",
    "data_admissao",
    "cpf",
    "cnh",
    "rg",
    "operacao",
    "ctps",
    "serie",
    "data_nascimento",
    "primeira_cnh",
    "data_expedicao",
    "vencimento_cnh",
    "done_mopp",
    "vencimento_mopp",
    "done_aso_semestral",
    "vencimento_aso_semestral",
    "done_aso_periodico",
    "vencimento_aso_periodico",
    "done_buonny",
    "vencimento_buonny",
    "telefone",
    "endereco",
    "filiacao",
    "estado_civil",
    "filhos",
    "cargo",
    "empresa",
    "status",
    "conf_jornada",
    "conf_fecham",
    "done_toxicologico_cnh",
    "vencimento_toxicologico_cnh",
    "email",
    "done_toxicologico_clt",
    "vencimento_toxicologico_clt",
];

/// Deadline precedence: driving licence first.
pub const EXPIRATION_FIELDS: [&str; 7] = [
    "vencimento_cnh",
    "vencimento_mopp",
    "vencimento_aso_semestral",
    "vencimento_aso_periodico",
    "vencimento_buonny",
    "vencimento_toxicologico_cnh",
    "vencimento_toxicologico_clt",
];

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A value is missing when absent, whitespace only, or a textual NaN left
/// behind by a numeric import.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => {
            let v = v.trim();
            v.is_empty() || v.eq_ignore_ascii_case("nan")
        }
    }
}

/// First required attribute that is missing, if any.
pub fn first_missing_field(driver: &Driver) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|f| is_missing(driver.attribute(f)))
}

/// Whole days from `reference` to the end of the expiration day, floored:
/// `-1` as soon as the deadline has passed, `0` on its last day.
pub fn days_until(expiration: NaiveDateTime, reference: NaiveDateTime) -> i64 {
    // milliseconds: the clock carries sub-second precision
    (expiration - reference)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    /// Added to the wall clock before comparing.
    pub reference_offset: Duration,
    pub urgent_days: i64,
    pub upcoming_days: i64,
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::from_settings(&ComplianceSettings::default())
    }
}

impl ComplianceEngine {
    pub fn from_settings(settings: &ComplianceSettings) -> Self {
        Self {
            reference_offset: Duration::hours(
                settings
                    .reference_offset_hours
                    .clamp(-MAX_OFFSET_HOURS, MAX_OFFSET_HOURS),
            ),
            urgent_days: settings.urgent_days,
            upcoming_days: settings.upcoming_days,
        }
    }

    /// Evaluate against the current clock, sampled once.
    pub fn evaluate(&self, driver: &Driver) -> ComplianceStatus {
        self.evaluate_at(driver, now_naive())
    }

    /// Evaluate against a fixed wall-clock instant. The configured offset is
    /// applied here.
    pub fn evaluate_at(&self, driver: &Driver, now: NaiveDateTime) -> ComplianceStatus {
        if let Some(field) = first_missing_field(driver) {
            trace!(driver = driver.display_name(), field, "required field missing");
            return StatusKind::Incomplete.into();
        }

        let reference = now + self.reference_offset;

        for field in EXPIRATION_FIELDS {
            let Some(raw) = driver.attribute(field) else {
                continue;
            };
            let Some(date) = parse_dmy(raw) else {
                debug!(
                    driver = driver.display_name(),
                    field,
                    value = raw,
                    "unparseable expiration date skipped"
                );
                continue;
            };

            let days = days_until(end_of_day(date), reference);
            if let Some(kind) = self.classify(days) {
                trace!(driver = driver.display_name(), field, days, %kind, "deadline matched");
                return kind.into();
            }
        }

        StatusKind::Ok.into()
    }

    /// Window a day count falls in, `None` when beyond the upcoming window.
    pub fn classify(&self, days: i64) -> Option<StatusKind> {
        if days < 0 {
            Some(StatusKind::Expired)
        } else if days <= self.urgent_days {
            Some(StatusKind::Urgent)
        } else if days <= self.upcoming_days {
            Some(StatusKind::Upcoming)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_values() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(is_missing(Some("   ")));
        assert!(is_missing(Some("NaN")));
        assert!(is_missing(Some("nan")));
        assert!(!is_missing(Some("0")));
        assert!(!is_missing(Some("banana")));
    }

    #[test]
    fn day_difference_is_floored() {
        let exp = end_of_day(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(days_until(exp, at(2026, 1, 10, 12)), 0);
        assert_eq!(days_until(exp, at(2026, 1, 11, 0)), -1);
        assert_eq!(days_until(exp, at(2026, 1, 9, 0)), 1);

        let just_past = NaiveDate::from_ymd_opt(2026, 1, 10)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 500)
            .unwrap();
        assert_eq!(days_until(exp, just_past), -1);
    }

    #[test]
    fn windows() {
        let engine = ComplianceEngine::default();
        assert_eq!(engine.classify(-1), Some(StatusKind::Expired));
        assert_eq!(engine.classify(0), Some(StatusKind::Urgent));
        assert_eq!(engine.classify(10), Some(StatusKind::Urgent));
        assert_eq!(engine.classify(11), Some(StatusKind::Upcoming));
        assert_eq!(engine.classify(30), Some(StatusKind::Upcoming));
        assert_eq!(engine.classify(31), None);
    }

    #[test]
    fn default_offset_is_three_hours() {
        assert_eq!(
            ComplianceEngine::default().reference_offset,
            Duration::hours(3)
        );
    }

    #[test]
    fn out_of_range_offset_is_clamped() {
        let engine = ComplianceEngine::from_settings(&ComplianceSettings {
            reference_offset_hours: 9_000_000_000_000,
            ..Default::default()
        });
        assert_eq!(engine.reference_offset, Duration::hours(MAX_OFFSET_HOURS));
    }

    #[test]
    fn required_list_skips_internal_codes() {
        assert!(!REQUIRED_FIELDS.contains(&"id"));
        assert!(!REQUIRED_FIELDS.contains(&"codigo_sap"));
        for f in EXPIRATION_FIELDS {
            assert!(REQUIRED_FIELDS.contains(&f));
        }
    }
}
