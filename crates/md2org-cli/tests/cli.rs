use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn md2org(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("md2org").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_note_next_to_input() {
    let vault = TempDir::new().unwrap();
    let input = vault.path().join("Ideas.md");
    fs::write(&input, "# Ideas\ntags: #todo\n\n## First\n![[plan.png]]\n").unwrap();

    md2org(&vault)
        .args(["--asset-path", "media"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").and(predicate::str::contains("Ideas.org")));

    let written = fs::read_to_string(vault.path().join("Ideas.org")).unwrap();
    assert_eq!(
        written,
        "#+TITLE: Ideas\n#+ROAM_TAGS: todo\n\n\n** First\n![[file:media/plan.png]]\n\n"
    );
}

#[test]
fn daily_note_links_climb_out_of_daily_dir() {
    let vault = TempDir::new().unwrap();
    let daily = vault.path().join("daily");
    fs::create_dir(&daily).unwrap();
    let input = daily.join("2024-01-05.md");
    fs::write(&input, "1\n2\n3\n4\n5\n6\n7\nSee [[Project]]\n").unwrap();

    md2org(&vault)
        .args(["--daily-path", "daily"])
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(daily.join("2024-01-05.org")).unwrap();
    assert_eq!(
        written,
        "#+TITLE: 2024-01-05\n\nSee [[file:../Project.org][Project]]\n\n"
    );
}

#[test]
fn config_file_supplies_defaults() {
    let vault = TempDir::new().unwrap();
    fs::write(
        vault.path().join("config.toml"),
        "asset_path = \"attachments\"\n",
    )
    .unwrap();
    let input = vault.path().join("pic.md");
    fs::write(&input, "![[cat.jpg]]\n").unwrap();

    md2org(&vault).arg(&input).assert().success();

    let written = fs::read_to_string(vault.path().join("pic.org")).unwrap();
    assert!(written.contains("![[file:attachments/cat.jpg]]"));
}

#[test]
fn save_config_persists_paths() {
    let vault = TempDir::new().unwrap();
    let input = vault.path().join("n.md");
    fs::write(&input, "text\n").unwrap();

    md2org(&vault)
        .args(["--daily-path", "journal", "--save-config"])
        .arg(&input)
        .assert()
        .success();

    let saved = fs::read_to_string(vault.path().join("config.toml")).unwrap();
    assert!(saved.contains("daily_path = \"journal\""));
    assert!(saved.contains("asset_path = \"./\""));
}

#[test]
fn missing_input_fails_with_diagnostic() {
    let vault = TempDir::new().unwrap();

    md2org(&vault)
        .arg(vault.path().join("absent.md"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to convert"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn broken_config_is_reported() {
    let vault = TempDir::new().unwrap();
    fs::write(vault.path().join("config.toml"), "daily_path = [").unwrap();
    let input = vault.path().join("n.md");
    fs::write(&input, "text\n").unwrap();

    md2org(&vault)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
