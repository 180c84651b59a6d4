use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use vitae_core::SAMPLE_RESUME;

const INVALID_RESUME: &str = r#"{"basics": {"name": "Gavin"}, "skills": "everything"}"#;

/// `vitae` running inside `dir`, isolated from the user's config and themes.
fn vitae_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vitae"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("VITAE_THEMES_DIR")
        .env_remove("VITAE_BROWSER")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace_with(content: &str) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("resume.json"), content).expect("write resume");
    dir
}

fn outputs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".html") || n.ends_with(".pdf"))
        .collect();
    names.sort();
    names
}

#[test]
fn validate_accepts_sample() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args(["validate", "resume.json"])
        .assert()
        .success()
        .stdout(contains("resume.json is a valid jsonresume document"));
}

#[test]
fn validate_reports_violations_with_exit_code() {
    let dir = workspace_with(INVALID_RESUME);
    vitae_cmd(dir.path())
        .args(["validate", "resume.json"])
        .assert()
        .code(3)
        .stderr(contains("is not a valid resume.json file by the jsonresume schema"))
        .stderr(contains("/skills"));
}

#[test]
fn malformed_json_exits_with_parse_code() {
    let dir = workspace_with("{ \"basics\": ");
    vitae_cmd(dir.path())
        .args(["validate", "resume.json"])
        .assert()
        .code(4);
}

#[test]
fn render_html_into_working_directory() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "jsonresume-theme-flat", "-r", "html"])
        .assert()
        .success()
        .stdout(contains("HTML file written to resume.html"));

    assert_eq!(outputs(dir.path()), vec!["resume.html"]);
    let html = fs::read_to_string(dir.path().join("resume.html")).unwrap();
    assert!(html.contains("Richard Hendriks"));
}

#[test]
fn render_honours_output_name_and_out_dir() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args([
            "render",
            "resume.json",
            "classic",
            "-o",
            "cv",
            "--out-dir",
            "site",
            "-r",
            "html",
        ])
        .assert()
        .success()
        .stdout(contains("HTML file written to"))
        .stdout(contains("cv.html"));

    assert!(dir.path().join("site").join("cv.html").is_file());
}

#[test]
fn render_without_modes_writes_nothing() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat"])
        .assert()
        .success()
        .stdout(contains("no render modes requested"));
    assert!(outputs(dir.path()).is_empty());
}

#[test]
fn unknown_mode_fails_before_reading_input() {
    let dir = TempDir::new().unwrap();
    // resume.json does not exist: the mode error must win over the I/O error.
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat", "-r", "html", "docx"])
        .assert()
        .code(7)
        .stderr(contains("unsupported render mode 'docx'"));
    assert!(outputs(dir.path()).is_empty());
}

#[test]
fn invalid_resume_renders_nothing() {
    let dir = workspace_with(INVALID_RESUME);
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat", "-r", "html"])
        .assert()
        .code(3);
    assert!(outputs(dir.path()).is_empty());
}

#[test]
fn unknown_theme_exits_with_theme_code() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "jsonresume-theme-nope-not-here", "-r", "html"])
        .assert()
        .code(5)
        .stderr(contains("classic, flat"));
    assert!(outputs(dir.path()).is_empty());
}

#[test]
fn missing_input_exits_with_io_code() {
    let dir = TempDir::new().unwrap();
    vitae_cmd(dir.path())
        .args(["render", "absent.json", "flat", "-r", "html"])
        .assert()
        .code(9);
}

#[test]
fn themes_dir_adds_directory_theme() {
    let dir = workspace_with(SAMPLE_RESUME);
    let theme_dir = dir.path().join("themes").join("plain");
    fs::create_dir_all(&theme_dir).unwrap();
    fs::write(
        theme_dir.join("resume.html.tera"),
        "<h1>{{ basics.name }}</h1>",
    )
    .unwrap();

    vitae_cmd(dir.path())
        .args(["themes", "--themes-dir", "themes"])
        .assert()
        .success()
        .stdout(contains("plain"))
        .stdout(contains("flat"));

    vitae_cmd(dir.path())
        .env("VITAE_THEMES_DIR", dir.path().join("themes"))
        .args(["render", "resume.json", "plain", "-r", "html"])
        .assert()
        .success();
    let html = fs::read_to_string(dir.path().join("resume.html")).unwrap();
    assert_eq!(html, "<h1>Richard Hendriks</h1>");
}

#[test]
fn init_writes_sample_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    vitae_cmd(dir.path()).arg("init").assert().success();

    let written = fs::read_to_string(dir.path().join("resume.json")).unwrap();
    assert_eq!(written, SAMPLE_RESUME);

    vitae_cmd(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("cannot create"));

    vitae_cmd(dir.path())
        .args(["validate", "resume.json"])
        .assert()
        .success();
}

#[test]
fn themes_lists_builtins() {
    let dir = TempDir::new().unwrap();
    vitae_cmd(dir.path())
        .arg("themes")
        .assert()
        .success()
        .stdout(contains("flat").and(contains("classic")))
        .stdout(contains("built-in"));
}

#[test]
fn missing_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    vitae_cmd(dir.path()).arg("render").assert().code(2);
}

#[cfg(target_os = "linux")]
#[test]
fn broken_default_theme_does_not_block_other_themes() {
    let dir = workspace_with(SAMPLE_RESUME);
    let themes = dir.path().join(".config").join("vitae").join("themes");
    for (name, entry) in [("broken", "{% if %}"), ("plain", "<h1>{{ basics.name }}</h1>")] {
        fs::create_dir_all(themes.join(name)).unwrap();
        fs::write(themes.join(name).join("resume.html.tera"), entry).unwrap();
    }

    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat", "-r", "html"])
        .assert()
        .success()
        .stderr(contains("skipping broken theme"));
    assert!(dir.path().join("resume.html").is_file());

    vitae_cmd(dir.path())
        .arg("themes")
        .assert()
        .success()
        .stdout(contains("plain"))
        .stdout(contains("broken").not());
}

#[test]
fn broken_theme_in_explicit_dir_fails() {
    let dir = workspace_with(SAMPLE_RESUME);
    let theme_dir = dir.path().join("themes").join("broken");
    fs::create_dir_all(&theme_dir).unwrap();
    fs::write(theme_dir.join("resume.html.tera"), "{% if %}").unwrap();

    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat", "--themes-dir", "themes", "-r", "html"])
        .assert()
        .code(5);
    assert!(outputs(dir.path()).is_empty());
}

#[test]
fn empty_output_name_falls_back_to_input_stem() {
    let dir = workspace_with(SAMPLE_RESUME);
    vitae_cmd(dir.path())
        .args(["render", "resume.json", "flat", "-o", "", "-r", "html"])
        .assert()
        .success()
        .stdout(contains("HTML file written to resume.html"));
    assert_eq!(outputs(dir.path()), vec!["resume.html"]);
}
