// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use std::{fs, path::Path};

const SEPARATOR: &str = "------------------------------------";

fn write_document(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn round_trip_document() -> String {
    format!(
        "project\n├── src\n│   └── main.py\n└── README.md\n{sep}\nsrc/main.py\nprint(\"hi\")\n{sep}\nREADME.md\n{sep}\n",
        sep = SEPARATOR
    )
}

#[test]
fn build_creates_tree_with_contents() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(tmp.path(), "structure.txt", &round_trip_document());
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path()).arg("build").arg("structure.txt");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("2 directories, 2 files"));

    let root = tmp.path().join("project");
    assert_eq!(
        fs::read_to_string(root.join("src").join("main.py")).unwrap(),
        "print(\"hi\")"
    );
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "");

    let mut created: Vec<String> = walkdir::WalkDir::new(&root)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            entry
                .path()
                .strip_prefix(tmp.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    created.sort();
    assert_eq!(
        created,
        vec![
            "project",
            "project/README.md",
            "project/src",
            "project/src/main.py"
        ]
    );
}

#[test]
fn build_creates_empty_file_without_matching_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let document = format!(
        "app\n├── lib\n│   └── util.rs\n└── Cargo.toml\n{sep}\nCargo.toml\n[package]\n{sep}\n",
        sep = SEPARATOR
    );
    write_document(tmp.path(), "structure.txt", &document);
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path()).arg("build").arg("structure.txt");

    cmd.assert().success();

    let root = tmp.path().join("app");
    assert_eq!(fs::read_to_string(root.join("lib").join("util.rs")).unwrap(), "");
    assert_eq!(
        fs::read_to_string(root.join("Cargo.toml")).unwrap(),
        "[package]"
    );
}

#[test]
fn build_twice_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(tmp.path(), "structure.txt", &round_trip_document());

    for _ in 0..2 {
        let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();
        cmd.current_dir(tmp.path()).arg("build").arg("structure.txt");
        cmd.assert().success();
    }

    assert!(tmp.path().join("project").join("src").is_dir());
}

#[test]
fn build_empty_file_fails_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(tmp.path(), "structure.txt", "");
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path()).arg("build").arg("structure.txt");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Empty file"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn build_missing_root_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(tmp.path(), "structure.txt", "\n├── src\n");
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path()).arg("build").arg("structure.txt");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("No root folder name found"));
}

#[test]
fn dry_run_prints_tree_only() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(tmp.path(), "structure.txt", &round_trip_document());
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .arg("build")
        .arg("structure.txt")
        .arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("│   └── main.py"));

    assert!(!tmp.path().join("project").exists());
}

#[test]
fn config_overrides_separator_and_indent() {
    let tmp = tempfile::tempdir().unwrap();
    write_document(
        tmp.path(),
        "sprout.toml",
        "separator = \"=====\"\nindent_width = 2\n",
    );
    write_document(
        tmp.path(),
        "structure.txt",
        "site\n├─ css\n│ └─ main.css\n=====\nmain.css\nbody {}\n",
    );
    let mut cmd = assert_cmd::Command::cargo_bin("sprout").unwrap();

    cmd.current_dir(tmp.path())
        .arg("--config")
        .arg("sprout.toml")
        .arg("build")
        .arg("structure.txt");

    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("site").join("css").join("main.css")).unwrap(),
        "body {}"
    );
}
