//! End-to-end tests for the `shinysim` binary
//!
//! Each test runs the binary inside its own temporary working directory and
//! checks exit status, stdout protocol, and the parameter file left behind.
//! Runs that emit rows sleep for real, so they keep `-maxTime` small.

use assert_cmd::Command;
use tempfile::TempDir;

fn shinysim(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shinysim").expect("binary should build");
    cmd.current_dir(dir.path());
    cmd
}

fn params_files(dir: &TempDir) -> Vec<String> {
    std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("sim_params"))
        .collect()
}

#[test]
fn test_reference_run() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .args(["2.0", "-maxTime", "3", "-simtag", "42", "-seed", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "period,data");
    for (i, line) in lines[1..].iter().enumerate() {
        let (period, value) = line.split_once(',').unwrap();
        assert_eq!(period, (i + 1).to_string());
        let value: f64 = value.parse().unwrap();
        assert!((0.0..2.0).contains(&value));
    }

    let params = std::fs::read_to_string(dir.path().join("sim_params42.txt")).unwrap();
    assert_eq!(params, "seed=1\nmaxTime=3\nsimtag=42\nmultiplicativeFactor=2.0\n");
}

#[test]
fn test_same_seed_same_stdout() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    let args = ["1.5", "-maxTime", "2", "-simtag", "3", "-seed", "987654321"];

    let a = shinysim(&dir_a).args(args).output().unwrap();
    let b = shinysim(&dir_b).args(args).output().unwrap();
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_zero_max_time_prints_header_only() {
    let dir = TempDir::new().unwrap();
    shinysim(&dir)
        .args(["1.0", "-maxTime", "0", "-simtag", "11"])
        .assert()
        .success()
        .stdout("period,data\n");

    let params = std::fs::read_to_string(dir.path().join("sim_params11.txt")).unwrap();
    assert!(params.starts_with("seed="));
    assert_eq!(params.lines().count(), 4);
}

#[test]
fn test_wrong_flag_exits_1_without_file() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .args(["1.0", "-wrongFlag", "3", "-simtag", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage:"));
    assert!(params_files(&dir).is_empty());
}

#[test]
fn test_too_few_arguments_exits_1() {
    let dir = TempDir::new().unwrap();
    for args in [vec![], vec!["1.0"], vec!["1.0", "-maxTime", "3", "-simtag"]] {
        let output = shinysim(&dir).args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(output.stdout.is_empty());
    }
    assert!(params_files(&dir).is_empty());
}

#[test]
fn test_malformed_number_exits_1_without_file() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .args(["lots", "-maxTime", "3", "-simtag", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("multiplicativeFactor"));
    assert!(params_files(&dir).is_empty());
}

#[test]
fn test_padded_number_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .args(["1.0", "-maxTime", " 3", "-simtag", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(params_files(&dir).is_empty());
}

#[test]
fn test_rust_log_level_reaches_stderr_only() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .env("RUST_LOG", "info")
        .args(["1.0", "-maxTime", "0", "-simtag", "5", "-seed", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "period,data\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Starting run: simtag=5"), "stderr: {}", stderr);
    assert!(stderr.contains("factor=1.0"), "stderr: {}", stderr);
}

#[test]
fn test_quiet_stderr_without_rust_log() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir)
        .env_remove("RUST_LOG")
        .args(["1.0", "-maxTime", "0", "-simtag", "6", "-seed", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_unwritable_params_file_exits_2() {
    let dir = TempDir::new().unwrap();
    // A directory squatting on the file name makes creation fail
    std::fs::create_dir(dir.path().join("sim_params77.txt")).unwrap();

    let output = shinysim(&dir)
        .args(["1.0", "-maxTime", "3", "-simtag", "77", "-seed", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "emission must not start");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("sim_params77.txt"));
}

#[test]
fn test_help_exits_0() {
    let dir = TempDir::new().unwrap();
    let output = shinysim(&dir).arg("--help").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("-maxTime"));
    assert!(params_files(&dir).is_empty());
}
