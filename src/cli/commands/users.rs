use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::decoder::decode_all;
use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::models::{EntityKind, User};
use crate::ui::messages::info;
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

/// Passwords are never printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Users) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let users: Vec<User> = decode_all(&load_all(&pool.conn, EntityKind::User)?);

        if users.is_empty() {
            info("No users found.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["NAME", "EMAIL", "ADMIN", "ROUTES"]);
        for u in &users {
            let routes = u.routes();
            table.add_row(vec![
                or_dash(u.name.as_deref()).to_string(),
                or_dash(u.email.as_deref()).to_string(),
                if u.is_admin { "yes" } else { "no" }.to_string(),
                if routes.is_empty() {
                    "--".to_string()
                } else {
                    routes.join(", ")
                },
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
