//! Process-level shutdown test for `braille-bridge serve`.
//!
//! Runs the real binary with a stdin pipe that stays open and idle, then
//! delivers SIGINT and checks that the process goes away on its own.

#![cfg(unix)]

use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const EXIT_DEADLINE: Duration = Duration::from_secs(10);

fn wait_for_exit(child: &mut Child, deadline: Duration) -> bool {
    let started = Instant::now();
    while started.elapsed() < deadline {
        if child.try_wait().expect("try_wait").is_some() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_sigint_stops_serve_while_stdin_is_idle() {
    // Arrange: stdin is piped and never written to or closed.
    let mut child = Command::new(env!("CARGO_BIN_EXE_braille-bridge"))
        .arg("serve")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn braille-bridge");
    let _stdin = child.stdin.take();
    thread::sleep(Duration::from_millis(500));

    // Act
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");

    // Assert
    assert!(status.success());
    let exited = wait_for_exit(&mut child, EXIT_DEADLINE);
    if !exited {
        let _ = child.kill();
        let _ = child.wait();
    }
    assert!(exited, "serve did not exit after SIGINT");
}
