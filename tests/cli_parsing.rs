//! Parseo de argumentos y códigos de salida del binario.

#![allow(deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use msmlplan::Config;
use predicates::prelude::*;

fn msml() -> Command {
    Command::cargo_bin("msml").expect("msml binary")
}

#[test]
fn parsea_nombre_y_archivo() {
    let c = Config::try_parse_from(["msml", "Lovelace_Ada", "-f", "datos/msml.xlsx"]).unwrap();
    assert_eq!(c.name, "Lovelace_Ada");
    assert_eq!(c.file, PathBuf::from("datos/msml.xlsx"));
    assert!(!c.json);
}

#[test]
fn parsea_json_y_directorio_de_planes() {
    let c = Config::try_parse_from(["msml", "CSC5201", "--file", "x.xlsx", "--json", "--plans-dir", "planes"]).unwrap();
    assert!(c.json);
    assert_eq!(c.plans_dir, Some(PathBuf::from("planes")));
}

#[test]
fn nombre_es_obligatorio() {
    assert!(Config::try_parse_from(["msml"]).is_err());
}

#[test]
fn archivo_inexistente_termina_con_error() {
    let td = tempfile::tempdir().unwrap();
    msml()
        .arg("Lovelace")
        .arg("-f")
        .arg(td.path().join("no-existe.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
