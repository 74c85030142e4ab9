use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compliance::{ComplianceEngine, first_missing_field};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_by_id;
use crate::errors::{AppError, AppResult};
use crate::models::EntityKind;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{colorize_optional, colorize_status};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Driver { id } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let record = load_by_id(&pool.conn, EntityKind::Driver, *id)?;
        let engine = ComplianceEngine::from_settings(&cfg.compliance);

        let Some(report) = Core::driver_report(record.as_deref(), &engine) else {
            return Err(AppError::NotFound {
                kind: "driver",
                id: id.to_string(),
            });
        };

        header(format!("Driver {}", report.driver.display_name()));
        for (name, value) in report.driver.attributes() {
            println!("{:<30} {}", name, colorize_optional(value));
        }

        println!(
            "\nStatus: {}",
            colorize_status(report.status.kind, &report.status.message)
        );
        if let Some(field) = first_missing_field(&report.driver) {
            warning(format!("First missing field: {field}"));
        }
    }
    Ok(())
}
