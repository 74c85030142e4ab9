use crate::core::compliance::ComplianceEngine;
use crate::core::decoder::{decode, decode_all};
use crate::models::{ComplianceStatus, Decoded, Driver, StatusKind, Value, Workday};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A driver paired with its freshly computed status.
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    pub driver: Driver,
    pub status: ComplianceStatus,
}

/// Flat row handed to renderers and exporters.
#[derive(Debug, Clone, Serialize)]
pub struct DriverStatusRow {
    pub id: String,
    pub nome: String,
    pub cpf: String,
    pub cnh: String,
    pub operacao: String,
    pub empresa: String,
    pub status_kind: StatusKind,
    pub status_message: String,
}

impl From<&DriverReport> for DriverStatusRow {
    fn from(r: &DriverReport) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            id: text(&r.driver.id),
            nome: text(&r.driver.nome),
            cpf: text(&r.driver.cpf),
            cnh: text(&r.driver.cnh),
            operacao: text(&r.driver.operacao),
            empresa: text(&r.driver.empresa),
            status_kind: r.status.kind,
            status_message: r.status.message.clone(),
        }
    }
}

/// Which drivers a report includes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFilter {
    pub active_only: bool,
    pub status: Option<StatusKind>,
}

pub struct Core;

impl Core {
    /// Decode driver rows and evaluate each one against the same instant.
    pub fn driver_reports_at(
        records: &[Vec<Value>],
        engine: &ComplianceEngine,
        filter: ReportFilter,
        now: NaiveDateTime,
    ) -> Vec<DriverReport> {
        decode_all::<Driver>(records)
            .into_iter()
            // rows of the wrong arity decode to all-null drivers: no data
            .filter(|d| !d.is_blank())
            .filter(|d| !filter.active_only || d.is_active())
            .map(|driver| {
                let status = engine.evaluate_at(&driver, now);
                DriverReport { driver, status }
            })
            .filter(|r| filter.status.is_none_or(|k| r.status.kind == k))
            .collect()
    }

    pub fn driver_report(record: Option<&[Value]>, engine: &ComplianceEngine) -> Option<DriverReport> {
        match decode::<Driver>(record) {
            Decoded::Decoded(driver) => {
                let status = engine.evaluate(&driver);
                Some(DriverReport { driver, status })
            }
            Decoded::Empty => None,
        }
    }

    /// Decoded workdays; rows not matching the full schema are dropped.
    pub fn workdays(records: &[Vec<Value>]) -> Vec<Workday> {
        records
            .iter()
            .filter_map(|r| match decode::<Workday>(Some(r.as_slice())) {
                Decoded::Decoded(w) => Some(w),
                Decoded::Empty => None,
            })
            .collect()
    }

    /// [`Core::workdays`] restricted to one calendar day when given.
    pub fn workdays_on(records: &[Vec<Value>], day: Option<NaiveDate>) -> Vec<Workday> {
        Self::workdays(records)
            .into_iter()
            .filter(|w| day.is_none_or(|d| w.day() == Some(d)))
            .collect()
    }
}
