use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::decoder::decode_kind;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::models::{EntityKind, Value};
use crate::ui::messages::success;
use std::fs;

/// Parse a JSON array of positional records.
pub(crate) fn parse_records(content: &str) -> AppResult<Vec<Vec<Value>>> {
    Ok(serde_json::from_str(content)?)
}

/// Insert every record or none: the batch runs in one transaction and the
/// first record that does not fit the layout aborts it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { kind, file } = cmd {
        let kind =
            EntityKind::from_str_opt(kind).ok_or_else(|| AppError::InvalidKind(kind.clone()))?;
        let records = parse_records(&fs::read_to_string(file)?)?;

        for (i, r) in records.iter().enumerate() {
            if decode_kind(kind, Some(r.as_slice())).is_empty() {
                tracing::debug!(index = i, len = r.len(), kind = kind.as_str(), "rejected record");
                return Err(AppError::InvalidRecord {
                    kind: kind.as_str(),
                    len: r.len(),
                });
            }
        }

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let tx = pool.conn.transaction()?;
        for r in &records {
            insert_record(&tx, kind, r)?;
        }
        tx.commit()?;

        success(format!("Imported {} {} record(s)", records.len(), kind));

        if let Err(e) = log::audit(
            &pool.conn,
            "import",
            kind.as_str(),
            &format!("{} record(s) from {}", records.len(), file),
        ) {
            tracing::warn!("failed to write internal log: {e}");
        }
    }
    Ok(())
}
