use assert_cmd::Command;

/// Origin with nothing listening on it.
fn dead_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn payroll(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("payroll").unwrap();
    cmd.env("PAYROLL_CONFIG_DIR", config_dir.path())
        .env("PAYROLL_ENV", "local")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = payroll(&dir).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["list", "show", "add", "update", "delete", "interactive"] {
        assert!(stdout.contains(sub), "missing {sub} in help");
    }
}

#[test]
fn unreachable_server_fails_list() {
    let dir = tempfile::tempdir().unwrap();
    let output = payroll(&dir)
        .args(["--base-url", &dead_origin(), "list"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: request failed"), "stderr: {stderr}");
}

#[test]
fn declined_delete_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = payroll(&dir)
        .args(["--base-url", &dead_origin(), "delete", "7"])
        .write_stdin("n\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Delete employee #7? [y/N]"));
    assert!(stdout.contains("Cancelled."));
}

#[test]
fn interactive_survives_failed_initial_load() {
    let dir = tempfile::tempdir().unwrap();
    let output = payroll(&dir)
        .args(["--base-url", &dead_origin()])
        .write_stdin("6\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Form: Add Employee"));
    assert!(stdout.contains("Goodbye!"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: request failed"));
}

#[test]
fn invalid_environment_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = payroll(&dir)
        .env("PAYROLL_ENV", "qa")
        .arg("list")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load payroll settings"));
}
