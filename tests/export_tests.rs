use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_drivers, rfl, setup_test_db, temp_out};

#[test]
fn export_csv_active_drivers() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_drivers(&db_path);

    rfl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,nome,cpf,cnh,operacao,empresa,status_kind,status_message")
    );
    assert!(content.contains("Bruno Expired"));
    assert!(content.contains("expired,Attention! Expired document"));
    assert!(!content.contains("Fabio Inactive"));
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn export_json_all_drivers() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_drivers(&db_path);

    rfl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--all",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 6);

    let carla = rows
        .iter()
        .find(|r| r["nome"] == "Carla Urgent")
        .expect("Carla exported");
    assert_eq!(carla["status_kind"], "urgent");
    assert_eq!(carla["status_message"], "Attention! Expiration identified");
    assert_eq!(carla["id"], "3");
}

#[test]
fn export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_drivers(&db_path);

    rfl()
        .args(["--db", &db_path, "export", "--file", "report.csv"])
        .assert()
        .failure()
        .stderr(contains("output file path must be absolute"));
}

#[test]
fn export_force_overwrites_and_refusal_keeps_file() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_drivers(&db_path);
    fs::write(&out, "old").unwrap();

    rfl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rfl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,nome"));
}
