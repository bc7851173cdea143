//! End-to-end runs of the fossify binary against a fake adb

mod common;

use std::io::Write;
use std::process::{Child, ChildStdin, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use common::FakeAdb;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

const BLOAT: &str = "com.miui.analytics";
const DANGER: &str = "com.miui.securitycenter";
const GMS: &str = "com.google.android.gms";
const HUNG: &str = "com.xiaomi.mipicks";

fn fossify(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fossify"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn fossify");

    {
        let mut pipe = child.stdin.take().expect("stdin pipe");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }
    child.wait_with_output().expect("wait for fossify")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_mode_prints_usage() {
    let output = fossify(&[], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn unknown_mode_prints_usage() {
    let output = fossify(&["--NUKE"], None);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("Unknown mode: --nuke"));
    assert!(text.contains("--fulldebloatdegoogle"));
}

#[test]
fn help_exits_zero() {
    let output = fossify(&["--help"], None);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn no_device_exits_one() {
    let adb = FakeAdb::new("", &[BLOAT]);
    let output = fossify(&["--debloat", "--adb", adb.path_str()], Some("\n"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No ADB device connected"));
    assert_eq!(adb.calls(), vec!["devices"]);
}

#[test]
fn dry_run_reports_status() {
    let adb = FakeAdb::attached(&[BLOAT, DANGER]);
    let output = fossify(&["--DRYRUN", "--adb", adb.path_str()], None);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("DRY RUN MODE"));
    assert!(text.contains("Installed: 2"));
    assert_eq!(adb.installed(), vec![BLOAT, DANGER]);
}

#[test]
fn debloat_removes_bloat_and_writes_report() {
    let adb = FakeAdb::attached(&[BLOAT, DANGER, GMS]);
    let report = adb.dir().join("report.json");
    let output = fossify(
        &[
            "--debloat",
            "--adb",
            adb.path_str(),
            "--report",
            report.to_str().unwrap(),
        ],
        Some("\n"),
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(adb.installed(), vec![DANGER, GMS]);

    let text = stdout(&output);
    assert!(text.contains("Removed: 1"));
    assert!(text.contains("Skipped (dangerous): 1"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["mode"], "debloat");
    assert_eq!(json["tally"]["removed"], 1);
    assert_eq!(json["tally"]["skipped"], 1);
}

#[test]
fn closed_stdin_cancels_mutation() {
    let adb = FakeAdb::attached(&[BLOAT]);
    let output = fossify(&["--fulldebloatdegoogle", "--adb", adb.path_str()], None);

    assert_eq!(output.status.code(), Some(130));
    assert!(stdout(&output).contains("Operation cancelled by user"));
    assert_eq!(adb.installed(), vec![BLOAT]);
}

#[test]
fn restore_reinstalls_missing_packages() {
    let adb = FakeAdb::attached(&[]);
    let output = fossify(&["--restore", "--adb", adb.path_str()], Some("\n"));

    assert_eq!(output.status.code(), Some(0));
    let installed = adb.installed();
    assert!(installed.contains(&DANGER.to_string()));
    assert!(installed.contains(&GMS.to_string()));
    assert!(stdout(&output).contains("Restore Complete"));
}

#[test]
fn invalid_config_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.json");
    std::fs::write(&config, "{ not json").unwrap();

    let output = fossify(&["--dryrun", "--config", config.to_str().unwrap()], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}

fn spawn_fossify(args: &[&str]) -> (Child, ChildStdin) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fossify"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn fossify");
    let stdin = child.stdin.take().expect("stdin pipe");
    (child, stdin)
}

fn wait_for_call(adb: &FakeAdb, call: &str) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !adb.calls().iter().any(|logged| logged == call) {
        assert!(Instant::now() < deadline, "fake adb never saw `{call}`");
        thread::sleep(Duration::from_millis(20));
    }
}

fn send(child: &Child, sig: Signal) {
    signal::kill(Pid::from_raw(child.id() as i32), sig).expect("signal fossify");
}

#[test]
fn sigint_mid_run_stops_hung_adb_and_keeps_removals() {
    let adb = FakeAdb::attached(&[BLOAT, HUNG]);
    adb.hang_on(HUNG);

    let (child, mut stdin) = spawn_fossify(&["--debloat", "--adb", adb.path_str()]);
    stdin.write_all(b"\n").expect("confirm");
    wait_for_call(&adb, &format!("shell pm list packages {HUNG}"));

    let interrupted = Instant::now();
    send(&child, Signal::SIGINT);
    let output = child.wait_with_output().expect("wait for fossify");
    drop(stdin);

    assert_eq!(output.status.code(), Some(130));
    assert!(interrupted.elapsed() < Duration::from_secs(5));
    assert!(stdout(&output).contains("Operation cancelled by user"));
    assert_eq!(adb.installed(), vec![HUNG]);
}

#[test]
fn sigint_at_prompt_exits_130_without_mutation() {
    let adb = FakeAdb::attached(&[BLOAT]);
    let (child, stdin) = spawn_fossify(&["--debloat", "--adb", adb.path_str()]);
    wait_for_call(&adb, "devices");
    thread::sleep(Duration::from_millis(200));

    send(&child, Signal::SIGINT);
    let output = child.wait_with_output().expect("wait for fossify");
    drop(stdin);

    assert_eq!(output.status.code(), Some(130));
    assert!(stdout(&output).contains("Operation cancelled by user"));
    assert_eq!(adb.calls(), vec!["devices"]);
    assert_eq!(adb.installed(), vec![BLOAT]);
}

#[test]
fn sigterm_exits_with_128_plus_signal() {
    let adb = FakeAdb::attached(&[BLOAT]);
    let (child, stdin) = spawn_fossify(&["--restore", "--adb", adb.path_str()]);
    wait_for_call(&adb, "devices");
    thread::sleep(Duration::from_millis(200));

    send(&child, Signal::SIGTERM);
    let output = child.wait_with_output().expect("wait for fossify");
    drop(stdin);

    assert_eq!(output.status.code(), Some(143));
    assert_eq!(adb.installed(), vec![BLOAT]);
}
