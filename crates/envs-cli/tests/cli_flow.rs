use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_envs"))
}

/// A command isolated from the user's config and password.
fn envs(home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env_remove("ENVS_PASSWORD")
        .env_remove("ENVS_CONFIG")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home)
        .stdin(Stdio::null());
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &[u8]) -> Output {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn envs");
    // The child may exit before reading stdin (argument errors)
    let _ = child.stdin.take().expect("stdin").write_all(input);
    child.wait_with_output().expect("wait envs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn encrypt_file(home: &Path, path: &Path, text: &str, password: &str) {
    let mut cmd = envs(home);
    cmd.arg("-e").arg("-f").arg(path).env("ENVS_PASSWORD", password);
    let output = run_with_stdin(cmd, text.as_bytes());
    assert!(
        output.status.success(),
        "encrypt failed: stdout={}, stderr={}",
        stdout(&output),
        stderr(&output)
    );
}

#[test]
fn test_cli_print_plain_file() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("dev.env");
    std::fs::write(&file, "# comment\nHOST=localhost\n\nPORT=8080\n").expect("write env");

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "export HOST=localhost\nexport PORT=8080\n");
}

#[test]
fn test_cli_encrypt_then_print() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("secret.env");
    encrypt_file(home.path(), &file, "SECRET=1\nTOKEN=a=b\n", "hunter2");

    let on_disk = std::fs::read(&file).expect("read container");
    assert!(on_disk.starts_with(b"\0env"));
    assert!(!String::from_utf8_lossy(&on_disk).contains("SECRET"));

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", "hunter2")
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "export SECRET=1\nexport TOKEN=a=b\n");
}

#[test]
fn test_cli_wrong_password_exit_code() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("secret.env");
    encrypt_file(home.path(), &file, "SECRET=1\n", "hunter2");

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", "wrong")
        .output()
        .expect("run envs");
    assert_eq!(output.status.code(), Some(5));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("authentication failed"));
}

#[test]
fn test_cli_whitespace_password_from_env() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("secret.env");
    encrypt_file(home.path(), &file, "A=1\n", " ");

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", " ")
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "export A=1\n");
}

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_password_from_env() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("secret.env");
    let password = OsStr::from_bytes(b"pw\xff\xfe");

    let mut cmd = envs(home.path());
    cmd.arg("-e")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", password);
    let output = run_with_stdin(cmd, b"A=1\n");
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let sealed = std::fs::read(&file).expect("read container");
    let opened = envs_core::container::open(&sealed, b"pw\xff\xfe").expect("open");
    assert_eq!(opened, b"A=1\n");

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", password)
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "export A=1\n");
}

#[test]
fn test_cli_encrypted_file_without_tty_or_password_fails() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("secret.env");
    encrypt_file(home.path(), &file, "SECRET=1\n", "hunter2");

    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(&file)
        .stderr(Stdio::piped())
        .output()
        .expect("run envs");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("ENVS_PASSWORD"));
}

#[test]
fn test_cli_encrypt_rejects_malformed_input() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("bad.env");

    let mut cmd = envs(home.path());
    cmd.arg("-e")
        .arg("-f")
        .arg(&file)
        .env("ENVS_PASSWORD", "hunter2");
    let output = run_with_stdin(cmd, b"GOOD=1\nBROKEN_LINE\n");

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("BROKEN_LINE"));
    assert!(!file.exists());
}

#[test]
fn test_cli_encrypt_to_stdout() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = envs(home.path());
    cmd.arg("-e").env("ENVS_PASSWORD", "hunter2");
    let output = run_with_stdin(cmd, b"A=1\n");

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(output.stdout.starts_with(b"\0env"));
    assert_eq!(output.stdout.len(), 4 + 12 + 4 + 16);

    let opened = envs_core::container::open(&output.stdout, b"hunter2").expect("open");
    assert_eq!(opened, b"A=1\n");
}

#[test]
fn test_cli_encrypt_rejects_multiple_files() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = envs(home.path());
    cmd.args(["-e", "-f", "a.env", "-f", "b.env"])
        .env("ENVS_PASSWORD", "hunter2");
    let output = run_with_stdin(cmd, b"A=1\n");

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("only one file"));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let home = TempDir::new().expect("tempdir");
    let output = envs(home.path())
        .arg("-p")
        .arg("-f")
        .arg(home.path().join("missing.env"))
        .output()
        .expect("run envs");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_no_action_exits_cleanly() {
    let home = TempDir::new().expect("tempdir");
    let output = envs(home.path())
        .arg("-f")
        .arg(home.path().join("missing.env"))
        .output()
        .expect("run envs");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_config_default_files() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("default.env");
    std::fs::write(&file, "FROM_CONFIG=yes\n").expect("write env");
    let config_dir = home.path().join("config").join("envs");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[defaults]\nfiles = [{:?}]\n", file.to_string_lossy()),
    )
    .expect("write config");

    let output = envs(home.path()).arg("-p").output().expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "export FROM_CONFIG=yes\n");
}

#[cfg(unix)]
#[test]
fn test_cli_runs_command_with_clean_environment() {
    let home = TempDir::new().expect("tempdir");
    let a = home.path().join("a.env");
    let b = home.path().join("b.env");
    std::fs::write(&a, "SHARED=a\nONLY_A=1\n").expect("write a");
    std::fs::write(&b, "SHARED=b\n").expect("write b");

    let output = envs(home.path())
        .arg("-f")
        .arg(&a)
        .arg("-f")
        .arg(&b)
        .args(["/bin/sh", "-c", "echo \"$SHARED $ONLY_A ${HOME:-unset}\""])
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "b 1 unset\n");
}

#[cfg(unix)]
#[test]
fn test_cli_include_env_keeps_ambient_variables() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("dev.env");
    std::fs::write(&file, "FROM_FILE=1\n").expect("write env");

    let output = envs(home.path())
        .arg("-i")
        .arg("-f")
        .arg(&file)
        .env("AMBIENT_MARKER", "present")
        .args(["/bin/sh", "-c", "echo \"$FROM_FILE $AMBIENT_MARKER\""])
        .output()
        .expect("run envs");
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "1 present\n");
}

#[cfg(unix)]
#[test]
fn test_cli_forwards_child_exit_code() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("dev.env");
    std::fs::write(&file, "A=1\n").expect("write env");

    let output = envs(home.path())
        .arg("-f")
        .arg(&file)
        .args(["/bin/sh", "-c", "exit 42"])
        .output()
        .expect("run envs");
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_cli_generates_completions() {
    let home = TempDir::new().expect("tempdir");
    let output = envs(home.path())
        .args(["--completions", "bash"])
        .output()
        .expect("run envs");
    assert!(output.status.success());
    assert!(stdout(&output).contains("envs"));
}
