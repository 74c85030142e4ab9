use super::drivers::load_reports;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::ReportFilter;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        all,
        force,
    } = cmd
    {
        let filter = ReportFilter {
            active_only: cfg.active_only && !*all,
            status: None,
        };
        let reports = load_reports(cfg, filter)?;
        ExportLogic::export(&reports, *format, file, *force)?;

        let pool = DbPool::new(&cfg.database)?;
        if let Err(e) = log::audit(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} driver(s) exported to {}", reports.len(), file),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
