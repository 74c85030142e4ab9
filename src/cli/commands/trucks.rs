use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::decoder::decode_all;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::models::{EntityKind, Truck};
use crate::ui::messages::info;
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Trucks) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let trucks: Vec<Truck> = decode_all(&load_all(&pool.conn, EntityKind::Truck)?);

        if trucks.is_empty() {
            info("No trucks found.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "PLATE", "MODEL", "YEAR", "CRLV", "STATUS"]);
        for t in trucks.iter().filter(|t| !t.is_blank()) {
            table.add_row(vec![
                or_dash(t.id.as_deref()).to_string(),
                or_dash(t.placa.as_deref()).to_string(),
                or_dash(t.modelo.as_deref()).to_string(),
                or_dash(t.ano.as_deref()).to_string(),
                or_dash(t.exercicio_crlv.as_deref()).to_string(),
                or_dash(t.status.as_deref()).to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
