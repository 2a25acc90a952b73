//! CLI integration tests

use std::process::Command;

use tempfile::TempDir;

fn cliptrans_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cliptrans"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("CLIPTRANS_TARGET_LANGUAGE")
        .env_remove("LIBRETRANSLATE_API_KEY")
        .env_remove("CLIPTRANS_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("translate"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("--to"));
    assert!(stdout.contains("--from"));
    assert!(stdout.contains("--providers"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cliptrans"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = home.path().join("cliptrans").join("config.toml");
    assert_eq!(stdout.trim(), expected.to_string_lossy());
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_init_set_get_list() {
    let home = TempDir::new().unwrap();

    let init = cliptrans_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(init.status.success());
    assert!(home.path().join("cliptrans").join("config.toml").exists());

    let set = cliptrans_bin(&home)
        .args(["config", "set", "target_language", "ZH_cn"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = cliptrans_bin(&home)
        .args(["config", "get", "target_language"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "zh-CN");

    let set_key = cliptrans_bin(&home)
        .args(["config", "set", "libretranslate.api_key", "0123456789abcdef"])
        .output()
        .expect("Failed to execute command");
    assert!(set_key.status.success());

    let list = cliptrans_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");
    assert!(list.status.success());
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("target_language: zh-CN"));
    assert!(stdout.contains("providers: libretranslate,mymemory"));
    assert!(stdout.contains("libretranslate.api_key: 0123...cdef"));
    assert!(!stdout.contains("0123456789abcdef"));
}

#[test]
fn config_get_unset_value() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .args(["config", "get", "mymemory.email"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(not set)");
}

#[test]
fn watch_with_empty_stdin_exits_cleanly() {
    let home = TempDir::new().unwrap();
    let output = cliptrans_bin(&home)
        .args(["watch", "--console"])
        .stdin(std::process::Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("0 received"),
        "Expected an empty session summary, got: {}",
        stderr
    );
}
