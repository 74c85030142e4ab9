use crate::models::layout::{EntityKind, Layout};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub(crate) fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Table backing each entity kind.
pub fn table_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::User => "users",
        EntityKind::Driver => "drivers",
        EntityKind::Truck => "trucks",
        EntityKind::Company => "companies",
        EntityKind::TrackPoint => "track_points",
        EntityKind::Workday => "workdays",
    }
}

/// Column definition for a layout field. Everything is TEXT except the
/// identifiers, the admin flag and the GPS measures.
fn column_def(kind: EntityKind, field: &str) -> String {
    match (kind, field) {
        (EntityKind::Driver | EntityKind::Truck | EntityKind::Company, "id") => {
            "id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()
        }
        (EntityKind::User, "is_admin") => {
            "is_admin INTEGER DEFAULT 0 CHECK (is_admin IN (0, 1))".to_string()
        }
        (EntityKind::User, "authorized_routes") => "authorized_routes TEXT DEFAULT '[]'".to_string(),
        (EntityKind::TrackPoint, "vel" | "latitude" | "longitude") => format!("{field} REAL"),
        _ => format!("{field} TEXT"),
    }
}

fn create_sql(layout: &Layout) -> String {
    let mut cols: Vec<String> = Vec::new();
    if layout.kind == EntityKind::User {
        cols.push("id INTEGER PRIMARY KEY AUTOINCREMENT".to_string());
    }
    cols.extend(layout.field_names().map(|f| column_def(layout.kind, f)));

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        table_name(layout.kind),
        cols.join(",\n    ")
    )
}

fn create_entity_tables(conn: &Connection) -> Result<()> {
    for kind in EntityKind::ALL {
        let table = table_name(kind);
        if !table_exists(conn, table)? {
            conn.execute_batch(&create_sql(kind.layout()))?;
            success(format!("Created {table} table."));
        }
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_workdays_driver_date ON workdays(motorista, data);
        CREATE INDEX IF NOT EXISTS idx_track_points_plate ON track_points(placa, data_iso);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Older driver tables predate the e-mail and CNH toxicology columns.
fn migrate_add_late_driver_columns(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_driver_late_columns";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    for (column, ddl) in [
        ("done_toxicologico_cnh", "done_toxicologico_cnh TEXT"),
        ("vencimento_toxicologico_cnh", "vencimento_toxicologico_cnh TEXT"),
        ("email", "email TEXT"),
    ] {
        if !has_column(conn, "drivers", column)? {
            conn.execute_batch(&format!("ALTER TABLE drivers ADD COLUMN {ddl};"))?;
        }
    }

    mark_applied(conn, version, "Ensured late driver columns")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entity_tables(conn)?;
    migrate_add_late_driver_columns(conn)?;
    Ok(())
}
