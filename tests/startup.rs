//! Process-level startup behavior of the `bank-registry` binary.

use std::net::TcpListener;
use std::process::{Command, Stdio};

mod common;

fn free_port() -> u16 {
    let probe = TcpListener::bind("127.0.0.1:0").unwrap();
    probe.local_addr().unwrap().port()
}

#[test]
fn test_missing_input_exits_with_status_one() {
    let port = free_port();

    let output = Command::new(env!("CARGO_BIN_EXE_bank-registry"))
        .args(["--input", "/no/such/dir/banks.json"])
        .args(["--host", "127.0.0.1"])
        .args(["--port", &port.to_string()])
        .stdin(Stdio::null())
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot find input file"), "stderr: {stderr}");

    // the listener was never bound
    TcpListener::bind(("127.0.0.1", port)).expect("port should still be free");
}

#[test]
fn test_missing_required_flags_fail() {
    let file = common::data_file(common::TWO_BANKS);

    let output = Command::new(env!("CARGO_BIN_EXE_bank-registry"))
        .args(["-i", file.path().to_str().unwrap(), "-h", "127.0.0.1"])
        .stdin(Stdio::null())
        .output()
        .expect("binary should start");

    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_file_exits_with_status_one() {
    let file = common::data_file(common::TWO_BANKS);
    let config = common::data_file("[xml]\nindent = 500\n");

    let output = Command::new(env!("CARGO_BIN_EXE_bank-registry"))
        .args(["-i", file.path().to_str().unwrap()])
        .args(["-h", "127.0.0.1", "-p", &free_port().to_string()])
        .args(["-c", config.path().to_str().unwrap()])
        .stdin(Stdio::null())
        .output()
        .expect("binary should start");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("xml.indent"));
}
