//! End-to-end tests for the etik binary over a CSV cutting sheet.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_sheet(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("raskroy.csv");
    fs::write(
        &path,
        "№ Заказа,№ магазина / заявка,Клиент,Наименование,Корпус,Профиль /    Доп. Элементы,Фасад,\"ВЕС, КГ\"\n\
         101,125,Мебель-Сити,Шкаф 600x720x450,Белый 16/Дуб 18,-,МДФ,12.5\n\
         101,125,Мебель-Сити,Пенал,Венге,-,-,\n\
         102,126,ИП Иванов,Тумба 400х500х300,Белый,профиль серебро,-,8\n",
    )
    .unwrap();
    path
}

fn etik() -> Command {
    Command::cargo_bin("etik").unwrap()
}

#[test]
fn search_prints_first_matching_record() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(&dir);

    etik()
        .args(["search", "101", "--input"])
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Наименование изделия: Шкаф\n"))
        .stdout(predicate::str::contains("✅ Ширина: 600 мм"))
        .stdout(predicate::str::contains("✅ Корпус: Белый/Дуб"))
        .stdout(predicate::str::contains("✅ Вес: 12 кг"));
}

#[test]
fn search_missing_order_is_a_rejection() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(&dir);

    etik()
        .args(["search", "999", "--input"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(predicate::str::contains("order №999 not found"));
}

#[test]
fn search_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(&dir);

    let output = etik()
        .args(["search", "102", "--format", "json", "--input"])
        .arg(&sheet)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["item_name"], "Тумба");
    assert_eq!(record["dimensions"]["width"], 400);
    assert_eq!(record["extra_component"], "профиль серебро");
    assert!(record.get("facade").is_none());
}

#[test]
fn labels_plan_json() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(&dir);

    let output = etik()
        .args([
            "labels",
            "101",
            "--label",
            "КОРПУС:2",
            "--label",
            "Оргалит:1",
            "--input",
        ])
        .arg(&sheet)
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels = plan.as_array().unwrap();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0]["ordinal"], 1);
    assert_eq!(labels[0]["total_count"], 3);
    assert_eq!(labels[0]["color_line"], "БЕЛЫЙ/ДУБ");
    assert_eq!(labels[2]["color_line"], "БЕЛЫЙ");
    assert_eq!(labels[2]["ordinal"], 3);
}

#[test]
fn labels_overrides_apply_before_planning() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = write_sheet(&dir);

    let output = etik()
        .args([
            "labels",
            "102",
            "--label",
            "КОРПУС:1",
            "--set",
            "item_name=Комод",
            "--set",
            "width=800",
            "--input",
        ])
        .arg(&sheet)
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan[0]["item_name"], "Комод");
    assert_eq!(plan[0]["width"], 800);
    assert_eq!(plan[0]["height"], 500);
}

#[test]
fn unsupported_input_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.pdf");
    fs::write(&path, "not a sheet").unwrap();

    etik()
        .args(["search", "101", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}
