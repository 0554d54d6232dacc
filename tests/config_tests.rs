//! Integration tests for storage folder configuration

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::postbook_cmd;

#[test]
fn test_folder_flag() {
    let temp = TempDir::new().unwrap();

    postbook_cmd()
        .current_dir(temp.path())
        .args(["--folder", "mine", "create", "A", "1"])
        .assert()
        .success();

    assert!(temp.path().join("mine/posts.json").exists());
    assert!(!temp.path().join("saved_posts").exists());

    postbook_cmd()
        .current_dir(temp.path())
        .args(["list", "--folder", "mine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- A"));
}

#[test]
fn test_folder_env_var() {
    let temp = TempDir::new().unwrap();

    postbook_cmd()
        .current_dir(temp.path())
        .env("POSTBOOK_FOLDER", "from_env")
        .args(["create", "A", "1"])
        .assert()
        .success();

    assert!(temp.path().join("from_env/posts.json").exists());
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("postbook.toml"),
        "folder = \"journal\"\nfile_name = \"entries.json\"\n",
    )
    .unwrap();

    postbook_cmd()
        .current_dir(temp.path())
        .args(["create", "A", "1"])
        .assert()
        .success();

    assert!(temp.path().join("journal/entries.json").exists());
}

#[test]
fn test_flag_beats_env_var() {
    let temp = TempDir::new().unwrap();

    postbook_cmd()
        .current_dir(temp.path())
        .env("POSTBOOK_FOLDER", "from_env")
        .args(["--folder", "from_flag", "create", "A", "1"])
        .assert()
        .success();

    assert!(temp.path().join("from_flag/posts.json").exists());
    assert!(!temp.path().join("from_env").exists());
}

#[test]
fn test_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("postbook.toml"), "folder = [").unwrap();

    postbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML deserialization error"));
}
