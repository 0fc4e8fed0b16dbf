use std::process::Command;

fn dayboard() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dayboard"));
    command.env("RUST_LOG", "error");
    command
}

#[test]
fn cli_help_lists_subcommands() {
    let output = dayboard().arg("--help").output().expect("Failed to start dayboard binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["init", "show", "plan", "assign", "api-key", "tui"] {
        assert!(stdout.contains(subcommand), "missing {subcommand} in:\n{stdout}");
    }
}

#[test]
fn cli_init_writes_sample_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("dayboard").join("config.yaml");

    let output = dayboard()
        .arg("--config")
        .arg(&config_path)
        .arg("--log-level")
        .arg("error")
        .arg("init")
        .output()
        .expect("Failed to start dayboard binary");
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let written = std::fs::read_to_string(&config_path).expect("config written");
    assert!(written.contains("base_url"));
    assert!(written.contains("phrases"));

    let again = dayboard()
        .arg("--config")
        .arg(&config_path)
        .arg("init")
        .output()
        .expect("Failed to start dayboard binary");
    assert!(!again.status.success(), "second init must not overwrite");
}

#[test]
fn cli_rejects_invalid_base_url() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dayboard()
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("--base-url")
        .arg("not a url")
        .arg("api-key")
        .output()
        .expect("Failed to start dayboard binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid base_url"), "stderr: {stderr}");
}
