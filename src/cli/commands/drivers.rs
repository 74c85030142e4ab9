use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compliance::ComplianceEngine;
use crate::core::logic::{Core, DriverReport, ReportFilter};
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::{AppError, AppResult};
use crate::models::{EntityKind, StatusKind};
use crate::ui::messages::info;
use crate::utils::colors::colorize_status;
use crate::utils::date::now_naive;
use crate::utils::formatting::{or_dash, truncate};
use crate::utils::table::Table;

pub(crate) fn parse_status(s: &Option<String>) -> AppResult<Option<StatusKind>> {
    s.as_deref()
        .map(|v| StatusKind::from_str_opt(v).ok_or_else(|| AppError::InvalidStatus(v.to_string())))
        .transpose()
}

/// Load and evaluate drivers. The clock is read once for the whole listing.
pub(crate) fn load_reports(cfg: &Config, filter: ReportFilter) -> AppResult<Vec<DriverReport>> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    let records = load_all(&pool.conn, EntityKind::Driver)?;
    let engine = ComplianceEngine::from_settings(&cfg.compliance);

    Ok(Core::driver_reports_at(&records, &engine, filter, now_naive()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drivers { all, status } = cmd {
        let filter = ReportFilter {
            active_only: cfg.active_only && !*all,
            status: parse_status(status)?,
        };
        let reports = load_reports(cfg, filter)?;

        if reports.is_empty() {
            info("No drivers found.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "NAME", "CPF", "OPERATION", "COMPANY", "STATUS"]);
        for r in &reports {
            let d = &r.driver;
            table.add_row(vec![
                or_dash(d.id.as_deref()).to_string(),
                truncate(or_dash(d.nome.as_deref()), 32),
                or_dash(d.cpf.as_deref()).to_string(),
                or_dash(d.operacao.as_deref()).to_string(),
                truncate(or_dash(d.empresa.as_deref()), 24),
                colorize_status(r.status.kind, &r.status.message),
            ]);
        }
        print!("{}", table.render());
        println!("\n{} driver(s)", reports.len());
    }
    Ok(())
}
