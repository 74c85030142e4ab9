//! Positional reads and writes.
//!
//! Columns are always selected in layout order, so a row comes back as the
//! positional record the decoder expects. Nothing here knows what the
//! columns mean.

use crate::db::migrate::table_name;
use crate::errors::{AppError, AppResult};
use crate::models::layout::EntityKind;
use crate::models::value::{NULL, Value};
use rusqlite::{Connection, OptionalExtension, Row, params_from_iter};

fn column_list(kind: EntityKind) -> String {
    kind.layout().field_names().collect::<Vec<_>>().join(", ")
}

fn select_sql(kind: EntityKind) -> String {
    format!("SELECT {} FROM {}", column_list(kind), table_name(kind))
}

fn row_to_record(row: &Row, width: usize) -> rusqlite::Result<Vec<Value>> {
    (0..width).map(|i| row.get::<_, Value>(i)).collect()
}

fn query_records(
    conn: &Connection,
    kind: EntityKind,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<Vec<Value>>> {
    let width = kind.layout().fields.len();
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| row_to_record(row, width))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every row of a kind, in insertion order.
pub fn load_all(conn: &Connection, kind: EntityKind) -> AppResult<Vec<Vec<Value>>> {
    let sql = format!("{} ORDER BY rowid ASC", select_sql(kind));
    query_records(conn, kind, &sql, &[])
}

/// Single row by `id`, for the kinds that carry one in their layout.
pub fn load_by_id(conn: &Connection, kind: EntityKind, id: i64) -> AppResult<Option<Vec<Value>>> {
    if kind.layout().slot_of("id").is_none() {
        return Err(AppError::InvalidKind(format!("{kind} has no id column")));
    }

    let width = kind.layout().fields.len();
    let sql = format!("{} WHERE id = ?1", select_sql(kind));
    let mut stmt = conn.prepare(&sql)?;
    let rec = stmt
        .query_row([id], |row| row_to_record(row, width))
        .optional()?;
    Ok(rec)
}

/// Workday rows of one driver. Dates are stored as free text (`5/3/2026`
/// and `05/03/2026` both occur), so day filtering happens after decoding.
pub fn load_workdays(conn: &Connection, driver: &str) -> AppResult<Vec<Vec<Value>>> {
    let kind = EntityKind::Workday;
    let sql = format!("{} WHERE motorista = ?1 ORDER BY rowid ASC", select_sql(kind));
    query_records(conn, kind, &sql, &[&driver])
}

/// Insert a positional record. The record must satisfy the kind's arity;
/// optional trailing slots are written as NULL.
pub fn insert_record(conn: &Connection, kind: EntityKind, record: &[Value]) -> AppResult<()> {
    let layout = kind.layout();
    if !layout.arity.accepts(record.len()) {
        return Err(AppError::InvalidRecord {
            kind: kind.as_str(),
            len: record.len(),
        });
    }

    let width = layout.fields.len();
    let values: Vec<&Value> = (0..width)
        .map(|i| record.get(i).unwrap_or(&NULL))
        .collect();

    let placeholders = (1..=width)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table_name(kind),
        column_list(kind),
        placeholders
    );

    conn.execute(&sql, params_from_iter(values))?;
    Ok(())
}

pub fn count(conn: &Connection, kind: EntityKind) -> AppResult<i64> {
    let n = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", table_name(kind)),
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}
