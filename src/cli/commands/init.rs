use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rFleetlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", &db_path));

    // internal log is best effort
    if let Err(e) = log::audit(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
