use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::decoder::decode_all;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::models::{Company, EntityKind};
use crate::ui::messages::info;
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Companies) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let companies: Vec<Company> = decode_all(&load_all(&pool.conn, EntityKind::Company)?);

        if companies.is_empty() {
            info("No companies found.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "COMPANY", "CNPJ"]);
        for c in &companies {
            table.add_row(vec![
                or_dash(c.id.as_deref()).to_string(),
                or_dash(c.enterprise.as_deref()).to_string(),
                or_dash(c.cnpj.as_deref()).to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
