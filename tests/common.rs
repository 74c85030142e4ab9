#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use rfleetlog::models::layout::{DRIVER_LAYOUT, WORKDAY_LAYOUT};
use rfleetlog::models::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the developer's real config file.
pub fn rfl() -> Command {
    let mut home = env::temp_dir();
    home.push("rfleetlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rfleetlog");
    cmd.env("HOME", &home).env("APPDATA", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfleetlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `dd/mm/yyyy` of today shifted by `days`.
pub fn date_in(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%d/%m/%Y")
        .to_string()
}

/// A complete, active driver whose documents all expire far in the future.
/// `overrides` replace single attributes by name.
pub fn driver_record(id: i64, nome: &str, overrides: &[(&str, Value)]) -> Vec<Value> {
    let mut rec: Vec<Value> = DRIVER_LAYOUT
        .fields
        .iter()
        .map(|(name, _)| match *name {
            "id" => Value::Integer(id),
            "nome" => Value::from(nome),
            "status" => Value::from("Ativo"),
            n if n.starts_with("vencimento_") => Value::from("01/01/2099"),
            n => Value::from(format!("{n}-{id}")),
        })
        .collect();

    for (name, value) in overrides {
        if let Some(i) = DRIVER_LAYOUT.slot_of(name) {
            rec[i] = value.clone();
        }
    }
    rec
}

/// A workday row with the given `(field, value)` slots set, others null.
pub fn workday_record(fields: &[(&str, &str)]) -> Vec<Value> {
    let mut rec = vec![Value::Null; WORKDAY_LAYOUT.fields.len()];
    for (name, value) in fields {
        if let Some(i) = WORKDAY_LAYOUT.slot_of(name) {
            rec[i] = Value::from(*value);
        }
    }
    rec
}

/// Initialize the schema without touching the config file.
pub fn init_db(db_path: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Seed records of one kind through the `import` command.
pub fn import(db_path: &str, kind: &str, records: &[Vec<Value>]) {
    let file = temp_out(&format!("{}_{}_seed", file_stem(db_path), kind), "json");
    fs::write(&file, serde_json::to_string(records).expect("serialize seed")).expect("write seed");

    rfl()
        .args(["--db", db_path, "import", "--kind", kind, "--file", &file])
        .assert()
        .success();
}

fn file_stem(path: &str) -> String {
    PathBuf::from(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Init a DB holding one driver per status plus an inactive one.
pub fn init_db_with_drivers(db_path: &str) {
    init_db(db_path);
    import(
        db_path,
        "driver",
        &[
            driver_record(1, "Ana Ok", &[]),
            driver_record(2, "Bruno Expired", &[("vencimento_cnh", Value::from(date_in(-1)))]),
            driver_record(
                3,
                "Carla Urgent",
                &[("vencimento_toxicologico_clt", Value::from(date_in(5)))],
            ),
            driver_record(4, "Davi Upcoming", &[("vencimento_mopp", Value::from(date_in(20)))]),
            driver_record(5, "Eva Incomplete", &[("email", Value::Null)]),
            driver_record(6, "Fabio Inactive", &[("status", Value::from("Inativo"))]),
        ],
    );
}
