use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RECTANGLE_SCRIPT: &str = r#"[
    { "type": "set_tool", "tool": "rectangle" },
    { "type": "pointer_down", "x": 10, "y": 10 },
    { "type": "pointer_up", "x": 110, "y": 60 },
    { "type": "set_tool", "tool": "select" },
    { "type": "pointer_down", "x": 10, "y": 30 },
    { "type": "pointer_up", "x": 10, "y": 30 }
]"#;

fn sketchboard_cmd() -> Command {
    Command::cargo_bin("sketchboard").expect("binary exists")
}

fn write_script(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("script.json");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Config file with no overrides so the user's own config never leaks in.
fn write_empty_config(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    path
}

#[test]
fn sketchboard_help_prints_usage() {
    sketchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vector shape editor for lines, rectangles and circles",
        ));
}

#[test]
fn no_arguments_prints_script_reference() {
    sketchboard_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay <SCRIPT>"))
        .stdout(predicate::str::contains("set_tool"));
}

#[test]
fn output_requires_replay() {
    sketchboard_cmd()
        .args(["--output", "out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_prints_shape_summary() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, RECTANGLE_SCRIPT);
    let config = write_empty_config(&temp);

    sketchboard_cmd()
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 shape(s)"))
        .stdout(predicate::str::contains("Rectangle (10, 10) -> (110, 60) [100 x 50]"))
        .stdout(predicate::str::contains("selected: #0"));
}

#[test]
fn replay_json_lists_shapes() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, RECTANGLE_SCRIPT);
    let config = write_empty_config(&temp);

    let output = sketchboard_cmd()
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let shapes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shapes[0]["kind"], "rectangle");
    assert_eq!(shapes[0]["end"]["x"], 110.0);
}

#[test]
fn replay_writes_png_output() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, RECTANGLE_SCRIPT);
    let config = write_empty_config(&temp);
    let png = temp.path().join("renders").join("canvas.png");

    sketchboard_cmd()
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&png)
        .assert()
        .success();

    let bytes = std::fs::read(&png).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn export_uses_configured_directory() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, RECTANGLE_SCRIPT);
    let export_dir = temp.path().join("exports");
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[export]\ndirectory = {:?}\nfilename_template = \"board\"\n",
            export_dir.display().to_string()
        ),
    )
    .unwrap();

    sketchboard_cmd()
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("exported:"));

    assert!(export_dir.join("board.png").exists());
}

#[test]
fn invalid_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, r#"[{ "type": "pointer_down" }]"#);
    let config = write_empty_config(&temp);

    sketchboard_cmd()
        .arg("--replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load script"));
}

#[test]
fn dump_config_schema_prints_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"editor\""))
        .stdout(predicate::str::contains("\"hit_tolerance\""));
}
