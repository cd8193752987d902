use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;
use tempfile::tempdir;

const NOTES: &str = "# Notes\n\n## Thinking Level\nold body\n### Detail\nnested\n\n## Usage\nrun it\n";

fn write(dir: &Path, rel: &str, content: impl AsRef<str>) -> PathBuf {
    let path = dir.join(rel);
    fs::write(&path, content.as_ref()).unwrap();
    path
}

fn mdsection(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    // Keep any user config out of the run
    let config = write(dir, "config.toml", "");
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn replace_section_from_content_file() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);
    let body = write(tmp.path(), "body.md", "fresh body\n\n");

    mdsection(tmp.path())
        .arg(&doc)
        .arg("--section")
        .arg("thinking level")
        .arg("--content")
        .arg(&body)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated: "));

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "# Notes\n\n## Thinking Level\n\nfresh body\n\n## Usage\nrun it\n"
    );
}

#[test]
fn append_after_section_from_stdin() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);

    mdsection(tmp.path())
        .arg(&doc)
        .arg("--append-after")
        .arg("Thinking")
        .arg("--content-stdin")
        .write_stdin("appended\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "# Notes\n\n## Thinking Level\nold body\n### Detail\nnested\n\n\nappended\n\n## Usage\nrun it\n"
    );
}

#[test]
fn dry_run_prints_without_writing() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "doc.md", "# A\ntext1\n## B\ntext2\n# C\ntext3");

    mdsection(tmp.path())
        .arg(&doc)
        .args(["-s", "A", "--content-inline", "new", "--dry-run"])
        .assert()
        .success()
        .stdout("# A\n\nnew\n\n# C\ntext3\n");

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "# A\ntext1\n## B\ntext2\n# C\ntext3"
    );
}

#[test]
fn exact_flag_skips_earlier_partial_match() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "doc.md", "# Build\nsteps\n# B\nold");

    mdsection(tmp.path())
        .arg(&doc)
        .args(["-s", "B", "--content-inline", "new", "--dry-run"])
        .assert()
        .success()
        .stdout("# Build\n\nnew\n\n# B\nold\n");

    mdsection(tmp.path())
        .arg(&doc)
        .args(["-s", "B", "--content-inline", "new", "--dry-run", "--exact"])
        .assert()
        .success()
        .stdout("# Build\nsteps\n# B\n\nnew\n\n");
}

#[test]
fn list_sections_plain_and_json() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);

    mdsection(tmp.path())
        .arg(&doc)
        .arg("--list-sections")
        .assert()
        .success()
        .stdout("# Notes\n  ## Thinking Level\n    ### Detail\n  ## Usage\n");

    mdsection(tmp.path())
        .arg(&doc)
        .args(["-l", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"headingCount\": 4"))
        .stdout(predicate::str::contains("\"title\": \"Detail\""));
}

#[test]
fn missing_section_fails_and_leaves_file() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);

    mdsection(tmp.path())
        .arg(&doc)
        .args(["-s", "Nowhere", "--content-inline", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Section 'Nowhere' not found."));

    assert_eq!(fs::read_to_string(&doc).unwrap(), NOTES);
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();

    mdsection(tmp.path())
        .arg(tmp.path().join("absent.md"))
        .arg("-l")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn section_without_content_fails() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);

    mdsection(tmp.path())
        .arg(&doc)
        .args(["--section", "Usage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--section requires content"));

    mdsection(tmp.path())
        .arg(&doc)
        .args(["--section", "Usage", "--content-inline", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content supplied"));

    assert_eq!(fs::read_to_string(&doc).unwrap(), NOTES);
}

#[test]
fn no_mode_prints_help_and_fails() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "notes.md", NOTES);

    mdsection(tmp.path())
        .arg(&doc)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn config_prefer_exact_mode() {
    let tmp = tempdir().unwrap();
    let doc = write(tmp.path(), "doc.md", "# Build\nsteps\n# B\nold");
    let config = write(tmp.path(), "exact.toml", "[matching]\nmode = \"prefer-exact\"\n");

    Command::new(assert_cmd::cargo::cargo_bin!("mdsection"))
        .arg("--config")
        .arg(&config)
        .arg(&doc)
        .args(["-a", "b", "--content-inline", "tail"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "# Build\nsteps\n# B\nold\n\ntail\n"
    );
}

#[test]
fn completions_subcommand_prints_script() {
    Command::new(assert_cmd::cargo::cargo_bin!("mdsection"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mdsection"));
}
